//! Highest-score strategy.

use log::debug;

use crate::board::Board;
use crate::core::{GameRng, Piece};
use crate::search::{enumerate_moves, rank_plays, SearchConfig};

use super::discard::discard_set;
use super::{Decision, Strategy};

/// Plays for the most points, picking uniformly among ties.
///
/// Discards when no play scores.
#[derive(Clone, Debug)]
pub struct MaxStrategy {
    rng: GameRng,
    search: SearchConfig,
}

impl MaxStrategy {
    /// Create with a seeded RNG and an unlimited search.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create from an existing RNG (e.g. a fork of a table RNG).
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            rng,
            search: SearchConfig::unlimited(),
        }
    }

    /// Use a custom search configuration.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

impl Strategy for MaxStrategy {
    fn name(&self) -> &str {
        "max"
    }

    fn decide(&mut self, board: &Board, hand: &[Piece]) -> Decision {
        let moves = enumerate_moves(board, hand, &self.search);
        let ranked = rank_plays(board, moves.into_plays());

        if ranked.best_score() == 0 {
            debug!("{}: nothing scores, discarding", self.name());
            return Decision::Discard(discard_set(hand));
        }

        let top = ranked.top();
        let pick = &top[self.rng.gen_index(top.len())];
        debug!(
            "{}: {} play(s) tied at {}, chose [{}]",
            self.name(),
            top.len(),
            pick.score,
            pick.play
        );
        Decision::Play(pick.play.clone())
    }
}
