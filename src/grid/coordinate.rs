use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A signed 2D grid position or offset. `y` grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// Rotates a direction 90 degrees clockwise (with `y` pointing down)
    pub const fn rotated_clockwise(self) -> Self {
        Coordinate::new(-self.y, self.x)
    }

    pub const fn rotated_counter_clockwise(self) -> Self {
        Coordinate::new(self.y, -self.x)
    }

    pub const fn flipped(self) -> Self {
        Coordinate::new(-self.x, -self.y)
    }

    /// The four edge-adjacent positions
    pub fn orthogonal_neighbors(self) -> [Coordinate; 4] {
        Direction::ORTHOGONAL.map(|direction| self + direction)
    }

    pub fn manhattan_distance(self, other: Coordinate) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Coordinate {
    fn add_assign(&mut self, rhs: Coordinate) {
        *self = *self + rhs;
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Coordinate {
    fn sub_assign(&mut self, rhs: Coordinate) {
        *self = *self - rhs;
    }
}

impl Mul<i32> for Coordinate {
    type Output = Coordinate;

    fn mul(self, rhs: i32) -> Coordinate {
        Coordinate::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Coordinate {
    type Output = Coordinate;

    fn neg(self) -> Coordinate {
        self.flipped()
    }
}

/// Unit offsets for the four cardinal directions
pub struct Direction;

impl Direction {
    pub const UP: Coordinate = Coordinate::new(0, -1);
    pub const DOWN: Coordinate = Coordinate::new(0, 1);
    pub const LEFT: Coordinate = Coordinate::new(-1, 0);
    pub const RIGHT: Coordinate = Coordinate::new(1, 0);

    pub const ORTHOGONAL: [Coordinate; 4] = [Self::UP, Self::RIGHT, Self::DOWN, Self::LEFT];
}
