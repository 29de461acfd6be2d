//! Move ranking.
//!
//! Scores candidate plays by committing each one hypothetically and orders
//! them best first. Equal scores fall back to the `Play` ordering (shorter
//! first, then lexicographic) so rankings are reproducible. The empty play is
//! always present with score 0, so "nothing to play" is a concrete entry.

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::board::Board;
use crate::core::Play;

/// A play and the points it would score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlay {
    pub play: Play,
    pub score: u32,
}

/// Candidate plays ordered by descending score.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RankedPlays {
    entries: Vec<RankedPlay>,
}

/// Score and order candidate plays against `board`.
///
/// Duplicates are ranked once. Candidates the board rejects are dropped.
pub fn rank_plays<I>(board: &Board, plays: I) -> RankedPlays
where
    I: IntoIterator<Item = Play>,
{
    let mut unique: BTreeSet<Play> = plays.into_iter().collect();
    unique.insert(Play::empty());

    let mut entries: Vec<RankedPlay> = unique
        .into_iter()
        .filter_map(|play| {
            if play.is_empty() {
                return Some(RankedPlay { play, score: 0 });
            }
            match board.play(&play) {
                Ok(next) => Some(RankedPlay {
                    score: next.score(),
                    play,
                }),
                Err(err) => {
                    warn!("dropping unplayable candidate: {err}");
                    None
                }
            }
        })
        .collect();

    entries.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.play.cmp(&b.play)));
    RankedPlays { entries }
}

impl RankedPlays {
    /// Entries, best first.
    #[must_use]
    pub fn entries(&self) -> &[RankedPlay] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedPlay> + '_ {
        self.entries.iter()
    }

    /// Scores in ranked order.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.score).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a ranking built by `rank_plays`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The highest score (0 if nothing scores).
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.entries.first().map_or(0, |e| e.score)
    }

    /// Every entry tied for the best score.
    #[must_use]
    pub fn top(&self) -> &[RankedPlay] {
        let best = self.best_score();
        let end = self.entries.iter().take_while(|e| e.score == best).count();
        &self.entries[..end]
    }

    /// Entries scoring at least `best_score - bias`, best first.
    #[must_use]
    pub fn within(&self, bias: u32) -> &[RankedPlay] {
        let floor = self.best_score().saturating_sub(bias);
        let end = self.entries.iter().take_while(|e| e.score >= floor).count();
        &self.entries[..end]
    }
}

impl<'a> IntoIterator for &'a RankedPlays {
    type Item = &'a RankedPlay;
    type IntoIter = std::slice::Iter<'a, RankedPlay>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
