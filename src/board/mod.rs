//! The board and its rules.
//!
//! - `grid`: location index, bounding box, axis iteration
//! - `line`: the line rule primitive, extension and joining
//! - `board`: immutable snapshots, legality, scoring, history
//! - `notation`: scripted-test mini-language

pub mod board;
pub mod grid;
pub mod line;
pub mod notation;

pub use board::Board;
pub use grid::{AxisIter, Bounds, Grid, Walk};
pub use line::{forms_line, Line};
pub use notation::{parse_play, parse_script, replay, replay_script, ScriptedTurn};
