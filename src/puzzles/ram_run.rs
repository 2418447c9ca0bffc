//! RAM Run: bytes fall onto a square memory grid one at a time. Find the
//! shortest walk from the top-left to the bottom-right corner after some of
//! them have landed, and the first byte that makes the exit unreachable.

use crate::algorithm::WeightedEdge;
use crate::grid::{Coordinate, Grid};
use crate::{Dijkstra, Error, Result};

#[derive(Debug, Clone)]
pub struct RamRun {
    bytes: Vec<Coordinate>,
    size: usize,
}

impl RamRun {
    /// Parses one `x,y` byte position per line for a `size` x `size` grid
    pub fn parse(input: &str, size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::Config("grid size must be positive".to_string()));
        }

        let mut bytes = Vec::new();
        for (index, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let parse_error = |message: String| Error::Parse {
                line: index + 1,
                message,
            };

            let (x, y) = line
                .split_once(',')
                .ok_or_else(|| parse_error(format!("expected 'x,y', found '{}'", line)))?;
            let x: i32 = x
                .trim()
                .parse()
                .map_err(|e| parse_error(format!("bad x '{}': {}", x, e)))?;
            let y: i32 = y
                .trim()
                .parse()
                .map_err(|e| parse_error(format!("bad y '{}': {}", y, e)))?;

            let limit = size as i32;
            if !(0..limit).contains(&x) || !(0..limit).contains(&y) {
                return Err(parse_error(format!(
                    "byte {},{} is outside the {}x{} grid",
                    x, y, size, size
                )));
            }
            bytes.push(Coordinate::new(x, y));
        }

        Ok(RamRun { bytes, size })
    }

    pub fn byte_count(&self) -> usize {
        self.bytes.len()
    }

    fn corrupted(&self, fallen: usize) -> Result<Grid<bool>> {
        let mut grid = Grid::new(self.size, self.size);
        for &byte in self.bytes.iter().take(fallen) {
            grid.set(byte, true)?;
        }
        Ok(grid)
    }

    /// Fewest steps from the top-left to the bottom-right corner once the
    /// first `fallen` bytes have landed, or `None` if the exit is cut off.
    pub fn escape_length(&self, fallen: usize) -> Result<Option<u32>> {
        let grid = self.corrupted(fallen)?;
        let start = Coordinate::new(0, 0);
        let exit = Coordinate::new(self.size as i32 - 1, self.size as i32 - 1);

        if grid.get_or(start, true) || grid.get_or(exit, true) {
            return Ok(None);
        }

        let adjacent = |from: &Coordinate| {
            from.orthogonal_neighbors()
                .into_iter()
                .filter(|&to| grid.get(to) == Some(&false))
                .map(|to| WeightedEdge::new(1u32, to))
                .collect::<Vec<_>>()
        };

        Dijkstra::new().compute_to_target(start, &exit, adjacent)
    }

    /// The first byte whose landing cuts the exit off, or `None` if the exit
    /// stays reachable after every byte has fallen.
    pub fn first_blocking_byte(&self) -> Result<Option<Coordinate>> {
        let total = self.bytes.len();
        if self.escape_length(total)?.is_some() {
            return Ok(None);
        }
        if self.escape_length(0)?.is_none() {
            return Ok(None);
        }

        // escape_length(low) is Some, escape_length(high) is None
        let (mut low, mut high) = (0, total);
        while high - low > 1 {
            let mid = low + (high - low) / 2;
            if self.escape_length(mid)?.is_some() {
                low = mid;
            } else {
                high = mid;
            }
        }

        let blocking = self.bytes[high - 1];
        log::info!("Exit cut off by byte #{} at {}", high, blocking);
        Ok(Some(blocking))
    }
}
