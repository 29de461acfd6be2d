//! Harmony-biased strategy.
//!
//! Gives up to `bias` points against the best available score in exchange for
//! a board whose lines are closer to one another in length. Long lines next
//! to stubs leave openings for the opponent; an even board leaves fewer.

use log::debug;

use crate::board::Board;
use crate::core::Piece;
use crate::search::{enumerate_moves, rank_plays, SearchConfig};

use super::discard::discard_set;
use super::{Decision, Strategy};

/// Population standard deviation of the lengths of every multi-tile line.
///
/// Zero for boards with fewer than two such lines.
#[must_use]
pub fn line_length_deviation(board: &Board) -> f64 {
    let lengths: Vec<f64> = board
        .lines()
        .iter()
        .filter(|line| line.len() > 1)
        .map(|line| line.len() as f64)
        .collect();
    if lengths.len() < 2 {
        return 0.0;
    }
    let n = lengths.len() as f64;
    let mean = lengths.iter().sum::<f64>() / n;
    let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Picks the most even board among plays within `bias` of the best score.
#[derive(Clone, Debug)]
pub struct HarmonyStrategy {
    bias: u32,
    search: SearchConfig,
}

impl HarmonyStrategy {
    /// Create with the given score allowance and an unlimited search.
    #[must_use]
    pub fn new(bias: u32) -> Self {
        Self {
            bias,
            search: SearchConfig::unlimited(),
        }
    }

    /// Use a custom search configuration.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    #[must_use]
    pub fn bias(&self) -> u32 {
        self.bias
    }
}

impl Strategy for HarmonyStrategy {
    fn name(&self) -> &str {
        "harmony"
    }

    fn decide(&mut self, board: &Board, hand: &[Piece]) -> Decision {
        let moves = enumerate_moves(board, hand, &self.search);
        let ranked = rank_plays(board, moves.into_plays());

        if ranked.best_score() == 0 {
            debug!("{}: nothing scores, discarding", self.name());
            return Decision::Discard(discard_set(hand));
        }

        let choice = ranked
            .within(self.bias)
            .iter()
            .filter(|entry| !entry.play.is_empty())
            .filter_map(|entry| {
                let next = board.play(&entry.play).ok()?;
                Some((entry, line_length_deviation(&next)))
            })
            .min_by(|(_, a), (_, b)| a.total_cmp(b));

        match choice {
            Some((entry, deviation)) => {
                debug!(
                    "{}: chose [{}] for {} (deviation {:.3})",
                    self.name(),
                    entry.play,
                    entry.score,
                    deviation
                );
                Decision::Play(entry.play.clone())
            }
            None => Decision::Discard(discard_set(hand)),
        }
    }
}
