use crate::stats::Stats;
use crate::traits::Action;

/// A successful search: the action sequence that reaches a goal, plus the
/// statistics collected while finding it.
///
/// Replaying the actions in order from the initial state via
/// `make_move` visits only valid states and ends in a finished one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    actions: Vec<Action>,
    stats: Stats,
}

impl Solution {
    pub(crate) fn new(actions: Vec<Action>, stats: Stats) -> Self {
        Solution { actions, stats }
    }

    /// The action sequence, in replay order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Number of actions in the solution.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True when the initial state was already a goal.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }
}
