//! Exhaustive move enumeration.
//!
//! Depth-first search over partial plays. A state is the set of placements
//! made so far plus the pieces still in hand; each branch places one more
//! piece somewhere legal on the board as it would look with the partial play
//! on it, while keeping the whole play on one gap-free line.
//!
//! ## Deduplication
//!
//! Placing the same tiles in a different order reaches the same partial play.
//! Every state is recorded by value in a visited set and expanded at most
//! once, which caps the search at the number of distinct reachable partial
//! plays instead of every ordering of them.
//!
//! ## Budget
//!
//! With a budget, the search checks elapsed time before each descent and stops
//! once 90% of the budget is spent. The result is then best-effort, but never
//! empty while any legal play exists.

use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use crate::board::Board;
use crate::core::{Piece, Placement, Play};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Plays found by one enumeration, in `Play` order.
#[derive(Clone, Debug, Default)]
pub struct MoveSet {
    plays: Vec<Play>,
    stats: SearchStats,
}

impl MoveSet {
    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    #[must_use]
    pub fn into_plays(self) -> Vec<Play> {
        self.plays
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    #[must_use]
    pub fn contains(&self, play: &Play) -> bool {
        self.plays.binary_search(play).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Play> + '_ {
        self.plays.iter()
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }
}

/// Enumerate every maximal play `hand` can make on `board`.
#[must_use]
pub fn enumerate_moves(board: &Board, hand: &[Piece], config: &SearchConfig) -> MoveSet {
    MoveEnumerator::new(board, config.clone()).run(hand)
}

/// Search context for one enumeration.
pub struct MoveEnumerator<'a> {
    board: &'a Board,
    config: SearchConfig,
    visited: FxHashSet<Play>,
    results: BTreeSet<Play>,
    stats: SearchStats,
    start: Instant,
    soft_limit: Option<Duration>,
}

impl<'a> MoveEnumerator<'a> {
    /// Create a search over `board`.
    #[must_use]
    pub fn new(board: &'a Board, config: SearchConfig) -> Self {
        let soft_limit = config.soft_limit();
        Self {
            board,
            config,
            visited: FxHashSet::default(),
            results: BTreeSet::new(),
            stats: SearchStats::default(),
            start: Instant::now(),
            soft_limit,
        }
    }

    /// Run the search for a hand, consuming the context.
    #[must_use]
    pub fn run(mut self, hand: &[Piece]) -> MoveSet {
        debug!(
            "enumerating moves: {} piece(s) in hand, {} on board, budget {:?}",
            hand.len(),
            self.board.len(),
            self.config.budget
        );
        self.start = Instant::now();

        let root = Play::empty();
        self.visited.insert(root.clone());
        self.explore(&root, hand);

        self.stats.time_us = u64::try_from(self.start.elapsed().as_micros()).unwrap_or(u64::MAX);
        if self.stats.truncated {
            debug!("search truncated by budget after {} state(s)", self.stats.states_visited);
        }
        debug!(
            "found {} play(s): {} state(s), {} duplicate(s) skipped, {}us",
            self.results.len(),
            self.stats.states_visited,
            self.stats.duplicates_skipped,
            self.stats.time_us
        );

        MoveSet {
            plays: self.results.into_iter().collect(),
            stats: self.stats,
        }
    }

    fn over_budget(&self) -> bool {
        self.soft_limit
            .is_some_and(|limit| self.start.elapsed() >= limit)
    }

    /// Every (piece, location) that can extend `played`.
    fn branches(&self, played: &Play, to_play: &[Piece]) -> Vec<Placement> {
        let hypothetical = self.board.with_placements(played.iter());
        let distinct: BTreeSet<Piece> = to_play.iter().copied().collect();
        distinct
            .into_iter()
            .flat_map(|piece| hypothetical.get_legal_placements(piece))
            .filter(|&placement| self.board.spans_one_line(&played.with(placement)))
            .collect()
    }

    fn explore(&mut self, played: &Play, to_play: &[Piece]) {
        self.stats.states_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(played.len());

        let branches = self.branches(played, to_play);
        trace!("state [{}]: {} branch(es)", played, branches.len());

        if branches.is_empty() {
            if !played.is_empty() {
                self.stats.leaves += 1;
                self.results.insert(played.clone());
            }
            return;
        }
        if self.config.shorties && !played.is_empty() {
            self.results.insert(played.clone());
        }

        for placement in branches {
            if self.over_budget() {
                self.stats.truncated = true;
                if self.results.is_empty() {
                    let fallback = if played.is_empty() {
                        Play::single(placement)
                    } else {
                        played.clone()
                    };
                    self.results.insert(fallback);
                }
                return;
            }

            let next = played.with(placement);
            if !self.visited.insert(next.clone()) {
                self.stats.duplicates_skipped += 1;
                continue;
            }
            let remaining = without_one(to_play, placement.piece);
            self.explore(&next, &remaining);
        }
    }
}

/// `pieces` with one copy of `piece` removed.
fn without_one(pieces: &[Piece], piece: Piece) -> Vec<Piece> {
    let mut remaining = pieces.to_vec();
    if let Some(index) = remaining.iter().position(|&p| p == piece) {
        remaining.remove(index);
    }
    remaining
}
