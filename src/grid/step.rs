use crate::grid::{Coordinate, Direction};

/// A position together with a facing direction.
///
/// Used as a search node when turning has a cost of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub position: Coordinate,
    pub direction: Coordinate,
}

impl Step {
    pub const fn new(position: Coordinate, direction: Coordinate) -> Self {
        Step {
            position,
            direction,
        }
    }

    /// The cell directly ahead
    pub fn next(self) -> Coordinate {
        self.position + self.direction
    }

    /// Moves one cell ahead keeping the facing
    pub fn forward(self) -> Step {
        Step::new(self.next(), self.direction)
    }

    pub fn turned_clockwise(self) -> Step {
        Step::new(self.position, self.direction.rotated_clockwise())
    }

    pub fn turned_counter_clockwise(self) -> Step {
        Step::new(self.position, self.direction.rotated_counter_clockwise())
    }

    /// All four facings at `position`
    pub fn facings(position: Coordinate) -> [Step; 4] {
        Direction::ORTHOGONAL.map(|direction| Step::new(position, direction))
    }
}
