//! # rust-qwirkle
//!
//! Rules engine and exhaustive move search for a color/shape tile-placement
//! game.
//!
//! ## Design Principles
//!
//! 1. **One Rule**: A set of pieces forms a line when they are pairwise
//!    distinct and share a color or a shape. Every legality and scoring
//!    decision reduces to that check.
//!
//! 2. **Immutable Boards**: A board never changes. Playing returns a new
//!    snapshot that shares structure with the old one via `im-rs`, so
//!    hypothetical boards during search are cheap.
//!
//! 3. **Configuration Over Convention**: Domain size, copies per piece,
//!    players and the completion bonus come from `Settings`, never from
//!    constants in the rules.
//!
//! ## Modules
//!
//! - `core`: Attributes, pieces, locations, plays, settings, RNG, errors
//! - `board`: Grid, lines, board legality and scoring, text notation
//! - `search`: Move enumeration and ranking
//! - `strategy`: Player strategies and the discard policy

pub mod board;
pub mod core;
pub mod search;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Axis, Color, Direction, EngineError, GameRng, Location, NotationError, Piece, Placement, Play,
    Settings, SettingsError, Shape, SharedAttribute,
};

pub use crate::board::{forms_line, parse_play, parse_script, replay, replay_script, Board, Line, ScriptedTurn};

pub use crate::search::{enumerate_moves, rank_plays, MoveSet, RankedPlay, RankedPlays, SearchConfig, SearchStats};

pub use crate::strategy::{Decision, HarmonyStrategy, MaxStrategy, Strategy};
