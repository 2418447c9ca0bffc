//! Reindeer Maze: cheapest route from `S` to `E` when moving forward costs 1
//! and every 90 degree turn costs 1000, plus the number of tiles lying on
//! any of the cheapest routes.

use std::collections::HashSet;

use crate::algorithm::{ShortestPathTree, WeightedEdge};
use crate::grid::{Coordinate, Direction, Grid, Step};
use crate::{Dijkstra, Error, Result};

pub const MOVE_COST: u32 = 1;
pub const TURN_COST: u32 = 1000;

const WALL: char = '#';

/// Both answers for a maze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeScore {
    /// Lowest possible score from start to end
    pub lowest_score: u32,

    /// Distinct tiles that are part of at least one lowest-score route
    pub best_seats: usize,
}

#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid<char>,
    start: Coordinate,
    end: Coordinate,
}

impl Maze {
    pub fn parse(input: &str) -> Result<Self> {
        let grid = Grid::parse(input)?;
        let start = grid.find(&'S').ok_or(Error::MissingTile('S'))?;
        let end = grid.find(&'E').ok_or(Error::MissingTile('E'))?;

        Ok(Maze { grid, start, end })
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn end(&self) -> Coordinate {
        self.end
    }

    fn is_open(&self, coordinate: Coordinate) -> bool {
        self.grid.get_or(coordinate, WALL) != WALL
    }

    /// Moves available from `step`: one tile forward unless a wall is in the
    /// way, or a quarter turn in place either way.
    pub fn adjacent(&self, step: &Step) -> Vec<WeightedEdge<u32, Step>> {
        let mut edges = Vec::with_capacity(3);
        if self.is_open(step.next()) {
            edges.push(WeightedEdge::new(MOVE_COST, step.forward()));
        }
        edges.push(WeightedEdge::new(TURN_COST, step.turned_clockwise()));
        edges.push(WeightedEdge::new(TURN_COST, step.turned_counter_clockwise()));
        edges
    }

    /// Runs the full search from the start tile, facing east
    pub fn explore(&self) -> Result<ShortestPathTree<Step, u32>> {
        let start = Step::new(self.start, Direction::RIGHT);
        Dijkstra::new().compute_all(start, |step: &Step| self.adjacent(step))
    }

    pub fn solve(&self) -> Result<MazeScore> {
        let tree = self.explore()?;

        // The end tile counts in any facing
        let finishes = Step::facings(self.end);
        let (lowest_score, best_finishes) = tree
            .min_distance_among(finishes.iter())
            .ok_or(Error::Unreachable)?;

        let seats: HashSet<Coordinate> = tree
            .optimal_path_nodes(best_finishes.iter())
            .into_iter()
            .map(|step| step.position)
            .collect();

        log::info!(
            "Maze solved: lowest score {}, {} seats on best paths",
            lowest_score,
            seats.len()
        );

        Ok(MazeScore {
            lowest_score,
            best_seats: seats.len(),
        })
    }
}
