//! Search strategies over an abstract problem state.
//!
//! A problem domain describes itself by implementing [SearchState]: how to
//! validate a configuration, recognize a goal, enumerate action indices
//! and produce successors. Every strategy in this crate works through that
//! contract alone, so the same engine drives a grid maze and a
//! river-crossing puzzle without knowing about either.
//!
//! Strategies return a [Solution] carrying the action sequence together
//! with the [Stats] collected while searching, or
//! [SearchError::Exhausted] when the reachable state space contains no
//! goal.

pub mod algorithm;
mod errors;
mod solution;
mod stats;
mod traits;

pub use errors::Result;
pub use errors::SearchError;
pub use solution::Solution;
pub use stats::comparison;
pub use stats::Stats;
pub use traits::Action;
pub use traits::Heuristic;
pub use traits::Reversible;
pub use traits::SearchState;

pub use algorithm::basic::bfs;
pub use algorithm::basic::dfs;
pub use algorithm::bidirectional::bidirectional;
pub use algorithm::bound::best_bound;
pub use algorithm::bound::branch_and_bound;
pub use algorithm::cheapest::ucs;
pub use algorithm::ordered::dfs_ordered;
pub use algorithm::ordered::dfs_ordered_by;

#[cfg(test)]
pub(crate) mod testgrid;
