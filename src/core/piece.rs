//! Pieces and placements.
//!
//! A `Piece` is a (color, shape) tile; identical tiles are interchangeable so
//! pieces compare by value. A `Placement` binds a piece to a grid location.

use serde::{Deserialize, Serialize};

use super::attributes::{Color, Shape, SharedAttribute};
use super::location::Location;

/// A tile: one color and one shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub shape: Shape,
}

impl Piece {
    /// Create a new piece.
    #[must_use]
    pub const fn new(color: Color, shape: Shape) -> Self {
        Self { color, shape }
    }

    /// The attribute this piece has in common with `other`, if it shares
    /// exactly one. Identical pieces and pieces sharing nothing return `None`.
    #[must_use]
    pub fn shared_with(self, other: Piece) -> Option<SharedAttribute> {
        match (self.color == other.color, self.shape == other.shape) {
            (true, false) => Some(SharedAttribute::Color(self.color)),
            (false, true) => Some(SharedAttribute::Shape(self.shape)),
            _ => None,
        }
    }

    /// Whether the two pieces may be neighbors in a line.
    #[must_use]
    pub fn shares_exactly_one_attribute(self, other: Piece) -> bool {
        self.shared_with(other).is_some()
    }

    /// Whether this piece has the given attribute.
    #[must_use]
    pub fn has(self, attribute: SharedAttribute) -> bool {
        match attribute {
            SharedAttribute::Color(c) => self.color == c,
            SharedAttribute::Shape(s) => self.shape == s,
        }
    }

    /// Parse a two-letter abbreviation such as `rc`.
    #[must_use]
    pub fn from_abbreviation(text: &str) -> Option<Self> {
        let mut chars = text.chars();
        let color = Color::from_abbreviation(chars.next()?)?;
        let shape = Shape::from_abbreviation(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self::new(color, shape))
    }

    /// Place this piece at a location.
    #[must_use]
    pub const fn at(self, location: Location) -> Placement {
        Placement::new(self, location)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color.abbreviation(), self.shape.abbreviation())
    }
}

/// A piece bound to a board location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub piece: Piece,
    pub location: Location,
}

impl Placement {
    /// Create a new placement.
    #[must_use]
    pub const fn new(piece: Piece, location: Location) -> Self {
        Self { piece, location }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.piece, self.location.x, self.location.y)
    }
}
