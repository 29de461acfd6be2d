//! Core value types: attributes, pieces, locations, plays, settings, RNG,
//! errors.
//!
//! Everything here is an immutable value with structural equality. The
//! board and search layers build on these without adding rules of their own.

pub mod attributes;
pub mod config;
pub mod error;
pub mod location;
pub mod piece;
pub mod play;
pub mod rng;

pub use attributes::{Color, Shape, SharedAttribute};
pub use config::Settings;
pub use error::{EngineError, NotationError, SettingsError};
pub use location::{Axis, Direction, Location};
pub use piece::{Piece, Placement};
pub use play::Play;
pub use rng::GameRng;
