use thiserror::Error;

use crate::stats::Stats;

/// Error produced when a search fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The reachable state space was exhausted without finding a goal.
    ///
    /// This is an expected outcome, not a fault: a walled-off maze has no
    /// answer to give. The statistics collected up to exhaustion ride
    /// along for reporting.
    #[error("no solution found after expanding {} states", .0.generated())]
    Exhausted(Stats),
}

impl SearchError {
    /// Statistics collected before the search gave up.
    pub fn stats(&self) -> &Stats {
        match self {
            SearchError::Exhausted(stats) => stats,
        }
    }
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
