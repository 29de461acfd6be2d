//! Grid coordinates.
//!
//! The board is an integer grid large enough to be unbounded in practice:
//! tiles may only sit within `Location::LIMIT` of the origin on each axis, so
//! stepping to a neighbor (or padding a bounding box) never overflows `i32`.
//! `Location` orders by `x` then `y` so that every ordered collection of
//! locations iterates deterministically.

use serde::{Deserialize, Serialize};

/// A cell on the unbounded grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    /// The origin, where the first tile of a game lands.
    pub const ORIGIN: Location = Location { x: 0, y: 0 };

    /// Largest playable coordinate magnitude on either axis.
    pub const LIMIT: i32 = 1 << 24;

    /// Create a new location.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether a tile may be placed here.
    #[must_use]
    pub const fn in_range(self) -> bool {
        self.x.unsigned_abs() <= Self::LIMIT as u32 && self.y.unsigned_abs() <= Self::LIMIT as u32
    }

    /// The cell `steps` cells away along `axis` (negative steps go backwards).
    ///
    /// Only meaningful for in-range cells and small `steps`.
    #[must_use]
    pub const fn offset(self, axis: Axis, steps: i32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(self.x + steps, self.y),
            Axis::Vertical => Self::new(self.x, self.y + steps),
        }
    }

    /// The adjacent cell along `axis` in `direction`.
    #[must_use]
    pub const fn neighbor(self, axis: Axis, direction: Direction) -> Self {
        self.offset(axis, direction.step())
    }

    /// The four orthogonal neighbors.
    #[must_use]
    pub fn neighbors(self) -> [Location; 4] {
        [
            self.neighbor(Axis::Horizontal, Direction::Forward),
            self.neighbor(Axis::Horizontal, Direction::Backward),
            self.neighbor(Axis::Vertical, Direction::Forward),
            self.neighbor(Axis::Vertical, Direction::Backward),
        ]
    }

    /// Coordinate along `axis`.
    #[must_use]
    pub const fn along(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Coordinate across `axis` (constant for every cell on the same line).
    #[must_use]
    pub const fn across(self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.y,
            Axis::Vertical => self.x,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A straight direction on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Varies `x` (a row).
    Horizontal,
    /// Varies `y` (a column).
    Vertical,
}

impl Axis {
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// The perpendicular axis.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Which way to walk along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    #[must_use]
    pub const fn step(self) -> i32 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}
