//! AoC Paths - tie-aware Dijkstra shortest paths
//!
//! A generic single-source shortest path engine over implicitly defined
//! weighted graphs. Besides plain distances it keeps, for every node, the
//! full set of predecessors that reach it at its optimal cost, so callers can
//! enumerate every node lying on any minimum-cost path.
//!
//! The grid and puzzle modules are the Advent of Code 2024 consumers of the
//! engine (Reindeer Maze and RAM Run).

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod grid;
pub mod puzzles;

pub use algorithm::{
    dijkstra::Dijkstra, infinity, Distance, Node, ShortestPathEngine, ShortestPathTree,
    WeightedEdge,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use grid::{Coordinate, Direction, Grid, Step};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Negative edge weight: {weight}")]
    InvalidWeight { weight: String },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Missing '{0}' tile in maze")]
    MissingTile(char),

    #[error("Coordinate ({x}, {y}) is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    #[error("No path between start and target")]
    Unreachable,

    #[error("Path distance overflows the distance type: {distance} + {weight}")]
    DistanceOverflow { distance: String, weight: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
