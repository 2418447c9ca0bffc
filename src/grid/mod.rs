pub mod coordinate;
#[allow(clippy::module_inception)]
pub mod grid;
pub mod step;

pub use coordinate::{Coordinate, Direction};
pub use grid::Grid;
pub use step::Step;
