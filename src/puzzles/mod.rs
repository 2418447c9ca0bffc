pub mod ram_run;
pub mod reindeer_maze;

pub use ram_run::RamRun;
pub use reindeer_maze::{Maze, MazeScore};
