//! Player strategies.
//!
//! A strategy looks at a board and a hand and decides what to do with the
//! turn: place tiles, or discard when nothing scores. Strategies own any
//! randomness they need as an injected, seeded `GameRng`.
//!
//! - `MaxStrategy`: a uniformly random play among those tied for best
//! - `HarmonyStrategy`: near-best plays that keep the board's lines even
//! - `discard`: the shared discard policy

pub mod discard;
pub mod harmony;
pub mod max;

pub use discard::{discard_set, largest_group};
pub use harmony::{line_length_deviation, HarmonyStrategy};
pub use max::MaxStrategy;

use crate::board::Board;
use crate::core::{Piece, Play};

/// What a strategy chose to do with its turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Place these tiles.
    Play(Play),
    /// Return these pieces to the bag.
    Discard(Vec<Piece>),
}

impl Decision {
    #[must_use]
    pub fn is_play(&self) -> bool {
        matches!(self, Decision::Play(_))
    }

    /// The chosen play, if any.
    #[must_use]
    pub fn as_play(&self) -> Option<&Play> {
        match self {
            Decision::Play(play) => Some(play),
            Decision::Discard(_) => None,
        }
    }
}

/// A decision-making policy for one player.
pub trait Strategy: Send {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Choose a play or a discard for `hand` on `board`.
    fn decide(&mut self, board: &Board, hand: &[Piece]) -> Decision;
}
