use crate::grid::Coordinate;
use crate::{Error, Result};

/// A dense row-major 2D grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Creates a grid filled with `T::default()`
    pub fn new(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }

    /// Resets every cell to `T::default()`
    pub fn clear(&mut self) {
        self.cells.fill(T::default());
    }
}

impl Grid<char> {
    /// Parses a rectangular block of text, one row per line.
    ///
    /// Trailing blank lines are ignored; rows of differing width are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let rows: Vec<&str> = input
            .trim_end()
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(Error::Parse {
                line: 1,
                message: "empty grid".to_string(),
            });
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (index, row) in rows.iter().enumerate() {
            let row_width = row.chars().count();
            if row_width != width {
                return Err(Error::Parse {
                    line: index + 1,
                    message: format!("expected {} columns, found {}", width, row_width),
                });
            }
            cells.extend(row.chars());
        }

        Ok(Grid {
            width,
            height: rows.len(),
            cells,
        })
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, coordinate: Coordinate) -> bool {
        self.index(coordinate).is_some()
    }

    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        let x = usize::try_from(coordinate.x).ok()?;
        let y = usize::try_from(coordinate.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, coordinate: Coordinate) -> Option<&T> {
        self.index(coordinate).map(|index| &self.cells[index])
    }

    /// Reads a cell, treating everything outside the grid as `default`
    pub fn get_or(&self, coordinate: Coordinate, default: T) -> T
    where
        T: Clone,
    {
        self.get(coordinate).cloned().unwrap_or(default)
    }

    pub fn set(&mut self, coordinate: Coordinate, value: T) -> Result<()> {
        let index = self.index(coordinate).ok_or(Error::OutOfBounds {
            x: coordinate.x,
            y: coordinate.y,
        })?;
        self.cells[index] = value;
        Ok(())
    }

    /// All in-bounds coordinates in row-major order
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let width = self.width as i32;
        let height = self.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| Coordinate::new(x, y)))
    }

    /// First coordinate (row-major) holding `value`
    pub fn find(&self, value: &T) -> Option<Coordinate>
    where
        T: PartialEq,
    {
        self.coordinates()
            .find(|&coordinate| self.get(coordinate) == Some(value))
    }

    /// Every coordinate holding `value`
    pub fn find_all<'a>(&'a self, value: &'a T) -> impl Iterator<Item = Coordinate> + 'a
    where
        T: PartialEq,
    {
        self.coordinates()
            .filter(move |&coordinate| self.get(coordinate) == Some(value))
    }
}
