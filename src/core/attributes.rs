//! Tile attributes: colors and shapes.
//!
//! Every tile carries exactly one `Color` and one `Shape`. The engine knows a
//! fixed catalogue of each; a game instance picks an ordered subset of both
//! via `Settings` (six of each by default).
//!
//! ## Abbreviations
//!
//! Each variant has a single-letter abbreviation used by the scripted-test
//! notation. A piece is written color letter first, e.g. `rc` = red circle.

use serde::{Deserialize, Serialize};

/// Tile color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    White,
    Black,
}

impl Color {
    /// Every color the engine knows, in canonical order.
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::White,
        Color::Black,
    ];

    /// The six colors of the standard game.
    pub const STANDARD: [Color; 6] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Purple,
    ];

    /// Single-letter abbreviation.
    #[must_use]
    pub const fn abbreviation(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Orange => 'o',
            Color::Yellow => 'y',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Purple => 'p',
            Color::White => 'w',
            Color::Black => 'k',
        }
    }

    /// Look up a color by its abbreviation.
    #[must_use]
    pub fn from_abbreviation(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.abbreviation() == c)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Tile shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shape {
    Circle,
    Square,
    Diamond,
    Clover,
    Cross,
    Star,
    Heart,
    Moon,
}

impl Shape {
    /// Every shape the engine knows, in canonical order.
    pub const ALL: [Shape; 8] = [
        Shape::Circle,
        Shape::Square,
        Shape::Diamond,
        Shape::Clover,
        Shape::Cross,
        Shape::Star,
        Shape::Heart,
        Shape::Moon,
    ];

    /// The six shapes of the standard game.
    pub const STANDARD: [Shape; 6] = [
        Shape::Circle,
        Shape::Square,
        Shape::Diamond,
        Shape::Clover,
        Shape::Cross,
        Shape::Star,
    ];

    /// Single-letter abbreviation.
    #[must_use]
    pub const fn abbreviation(self) -> char {
        match self {
            Shape::Circle => 'c',
            Shape::Square => 's',
            Shape::Diamond => 'd',
            Shape::Clover => 'l',
            Shape::Cross => 'x',
            Shape::Star => 't',
            Shape::Heart => 'h',
            Shape::Moon => 'm',
        }
    }

    /// Look up a shape by its abbreviation.
    #[must_use]
    pub fn from_abbreviation(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|shape| shape.abbreviation() == c)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The attribute a line has in common across all its tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SharedAttribute {
    /// Every tile has this color; shapes are all distinct.
    Color(Color),
    /// Every tile has this shape; colors are all distinct.
    Shape(Shape),
}
