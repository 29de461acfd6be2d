//! Error types.
//!
//! The engine is purely functional over its inputs, so every error here is a
//! rejected input: a play that breaks the rules, a malformed submission, a bad
//! configuration, or an unreadable test script. Running out of search budget
//! is not an error.

use thiserror::Error;

use super::location::Location;
use super::piece::{Piece, Placement};

/// Errors raised by board operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The play failed `Board::is_legal_play`.
    #[error("illegal play: {play}")]
    IllegalPlay {
        /// The rejected play, in notation form.
        play: String,
    },

    /// Two placements of one submission target the same cell.
    #[error("more than one placement at {0}")]
    DuplicateLocation(Location),

    /// The same placement was submitted twice.
    #[error("placement {0} submitted twice")]
    DuplicatePlacement(Placement),

    /// The cell lies outside the playable area.
    #[error("location {0} is outside the playable area")]
    OutOfRange(Location),

    /// The piece's color or shape is not part of the configured game.
    #[error("piece {0} is not part of this game's colors and shapes")]
    PieceOutOfDomain(Piece),
}

/// Errors raised when building `Settings`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("at least one color and one shape are required")]
    EmptyDomain,

    #[error("color and shape counts must match (got {colors} colors, {shapes} shapes)")]
    UnequalDomains { colors: usize, shapes: usize },

    #[error("duplicate entry in color or shape list")]
    DuplicateAttribute,

    #[error("deck multiplier must be at least 1")]
    ZeroMultiplier,

    #[error("at least one player is required")]
    NoPlayers,
}

/// Errors raised while parsing the scripted-test notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("turn {turn}: unknown piece abbreviation {text:?}")]
    UnknownPiece { turn: usize, text: String },

    #[error("turn {turn}: expected `<piece> <x> <y>`, got {text:?}")]
    MalformedPlacement { turn: usize, text: String },

    #[error("turn {turn}: bad coordinate {text:?}")]
    BadCoordinate { turn: usize, text: String },

    #[error("turn {turn}: {source}")]
    Rejected {
        turn: usize,
        #[source]
        source: EngineError,
    },
}
