//! Move search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one enumeration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Distinct partial plays expanded.
    pub states_visited: u64,

    /// Branches skipped because their partial play was already visited.
    pub duplicates_skipped: u64,

    /// Maximal plays found.
    pub leaves: u64,

    /// Most placements in any explored play.
    pub max_depth: usize,

    /// The budget ran out before the search finished.
    pub truncated: bool,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate states expanded per second.
    #[must_use]
    pub fn states_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.states_visited as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Share of generated branches that converged on an already-seen play.
    #[must_use]
    pub fn duplicate_ratio(&self) -> f64 {
        let total = self.states_visited + self.duplicates_skipped;
        if total == 0 {
            0.0
        } else {
            self.duplicates_skipped as f64 / total as f64
        }
    }
}
