//! Move search configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Share of the budget the search may spend before it stops descending.
pub const BUDGET_SOFT_LIMIT: f64 = 0.9;

/// Move search configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Approximate wall-clock budget (`None` = unlimited).
    /// The search stops descending at 90% of this and may overrun slightly.
    pub budget: Option<Duration>,

    /// Keep every legal partial play visited, not only maximal ones.
    pub shorties: bool,
}

impl SearchConfig {
    /// An exhaustive search with no time limit.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Set a time budget.
    #[must_use]
    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = Some(budget);
        self
    }

    /// Keep or drop non-maximal plays.
    #[must_use]
    pub fn with_shorties(mut self, shorties: bool) -> Self {
        self.shorties = shorties;
        self
    }

    /// Elapsed time after which the search stops descending.
    #[must_use]
    pub fn soft_limit(&self) -> Option<Duration> {
        self.budget.map(|b| b.mul_f64(BUDGET_SOFT_LIMIT))
    }
}
