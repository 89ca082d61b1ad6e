//! Meet-in-the-middle search from both ends of a problem.

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::errors::{Result, SearchError};
use crate::solution::Solution;
use crate::stats::Stats;
use crate::traits::{Action, Reversible};

/// One search front: a breadth-first queue plus a record of every state
/// this side has reached and the actions that reached it from this side's
/// origin.
#[derive(Debug)]
struct Front<S> {
    queue: VecDeque<(S, Vec<Action>)>,
    seen: HashMap<S, Vec<Action>>,
}

impl<S> Front<S>
where
    S: Reversible,
{
    fn seeded(origin: S) -> Self {
        let mut front = Front {
            queue: VecDeque::new(),
            seen: HashMap::new(),
        };
        front.seen.insert(origin.clone(), Vec::new());
        front.queue.push_back((origin, Vec::new()));
        front
    }

    /// Push every applicable, valid successor this side has not reached
    /// yet, recording its path as it is admitted. Returns how many states
    /// were admitted.
    fn expand(&mut self, state: &S, path: &[Action]) -> usize {
        let mut admitted = 0;
        for action in 0..state.actions() {
            if let Some(next) = state.make_move(action) {
                if next.valid() && !self.seen.contains_key(&next) {
                    let mut reached = path.to_vec();
                    reached.push(action);
                    self.seen.insert(next.clone(), reached.clone());
                    self.queue.push_back((next, reached));
                    admitted += 1;
                }
            }
        }
        admitted
    }
}

/// Join the two half-paths at their meeting state.
///
/// The backward half was discovered outward from the goal, so replaying
/// it from the meeting point means undoing it: reverse the order and
/// invert each action.
fn splice<S>(meeting: &S, forward_path: &[Action], backward_path: &[Action]) -> Vec<Action>
where
    S: Reversible,
{
    let mut actions = forward_path.to_vec();
    actions.extend(
        backward_path
            .iter()
            .rev()
            .map(|&action| meeting.invert_action(action)),
    );
    actions
}

/// Bidirectional search.
///
/// Runs one breadth-first front out of the initial state and another out
/// of an explicitly supplied goal state, expanding one node per side per
/// round in strict alternation. The first state popped on either side
/// that the opposite side has already reached becomes the meeting point,
/// and the two half-paths are spliced into a single initial-to-goal
/// action sequence. The splice is a correct path whenever a meeting
/// occurs, but the meeting need not sit on a globally shortest route.
pub fn bidirectional<S>(origin: S, goal: S) -> Result<Solution>
where
    S: Reversible,
{
    if !origin.valid() || !goal.valid() {
        return Err(SearchError::Exhausted(Stats::new(0, 1, 0)));
    }

    let mut forward = Front::seeded(origin);
    let mut backward = Front::seeded(goal);
    // Both seeds already count as reached.
    let mut generated = 2;
    let mut deepest = 0;

    while !(forward.queue.is_empty() && backward.queue.is_empty()) {
        if let Some((state, path)) = forward.queue.pop_front() {
            deepest = deepest.max(path.len());
            if let Some(back_path) = backward.seen.get(&state) {
                debug!(
                    "fronts met after reaching {} states, {} forward + {} backward actions",
                    generated,
                    path.len(),
                    back_path.len()
                );
                let actions = splice(&state, &path, back_path);
                let stats = Stats::new(actions.len(), deepest + 1, generated);
                return Ok(Solution::new(actions, stats));
            }
            generated += forward.expand(&state, &path);
        }

        if let Some((state, path)) = backward.queue.pop_front() {
            deepest = deepest.max(path.len());
            if let Some(forward_path) = forward.seen.get(&state) {
                debug!(
                    "fronts met after reaching {} states, {} forward + {} backward actions",
                    generated,
                    forward_path.len(),
                    path.len()
                );
                let actions = splice(&state, forward_path, &path);
                let stats = Stats::new(actions.len(), deepest + 1, generated);
                return Ok(Solution::new(actions, stats));
            }
            generated += backward.expand(&state, &path);
        }
    }

    Err(SearchError::Exhausted(Stats::new(0, deepest + 1, generated)))
}
