//! Branch and bound, in its queue-based and backtracking forms.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use log::debug;

use crate::algorithm::{Frontier, Node, Search};
use crate::errors::{Result, SearchError};
use crate::solution::Solution;
use crate::stats::Stats;
use crate::traits::{Action, Heuristic, SearchState};

/// Heap entry ordered by the heuristic estimate computed when the node
/// was admitted, with insertion order breaking ties. Reversed so the heap
/// pops the smallest estimate.
#[derive(Debug)]
struct Estimated<S>
where
    S: Heuristic,
{
    estimate: S::Estimate,
    seq: usize,
    node: Node<S>,
}

impl<S> PartialEq for Estimated<S>
where
    S: Heuristic,
{
    fn eq(&self, other: &Self) -> bool {
        self.estimate == other.estimate && self.seq == other.seq
    }
}

impl<S> Eq for Estimated<S> where S: Heuristic {}

impl<S> Ord for Estimated<S>
where
    S: Heuristic,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimate
            .cmp(&other.estimate)
            .then(self.seq.cmp(&other.seq))
            .reverse()
    }
}

impl<S> PartialOrd for Estimated<S>
where
    S: Heuristic,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority frontier that always releases the node whose state claims
/// to be closest to a goal.
#[derive(Debug)]
pub(crate) struct BestBoundFrontier<S>
where
    S: Heuristic,
{
    heap: BinaryHeap<Estimated<S>>,
    admitted: usize,
}

impl<S> Default for BestBoundFrontier<S>
where
    S: Heuristic,
{
    fn default() -> Self {
        BestBoundFrontier {
            heap: BinaryHeap::new(),
            admitted: 0,
        }
    }
}

impl<S> Frontier<S> for BestBoundFrontier<S>
where
    S: Heuristic,
{
    fn pop(&mut self) -> Option<Node<S>> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn push(&mut self, node: Node<S>) {
        let seq = self.admitted;
        self.admitted += 1;
        self.heap.push(Estimated {
            estimate: node.state.estimate(),
            seq,
            node,
        });
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Best-bound queue search.
///
/// Orders the frontier by the heuristic estimate alone and never prunes
/// against an incumbent, so despite the family name this behaves as
/// greedy best-first search: it commits to whichever state claims to be
/// closest to a goal and offers no optimality guarantee in exchange for
/// reaching *a* goal quickly.
pub fn best_bound<S>(origin: S) -> Result<Solution>
where
    S: Heuristic,
{
    Search::<S, BestBoundFrontier<S>>::new(origin).run()
}

/// Backtracking branch and bound.
#[derive(Debug)]
struct Backtracker<S>
where
    S: SearchState,
{
    active: HashSet<S>,
    best: Option<Vec<Action>>,
    generated: usize,
    deepest: usize,
}

impl<S> Backtracker<S>
where
    S: SearchState,
{
    fn explore(&mut self, state: &S, path: &mut Vec<Action>, depth: usize) {
        // Bounding step: a prefix already as long as the incumbent cannot
        // lead anywhere better.
        if let Some(best) = &self.best {
            if depth >= best.len() {
                return;
            }
        }

        if state.finished() {
            debug!("incumbent improved: {} actions", path.len());
            self.best = Some(path.clone());
            return;
        }

        // The guard set covers the active path only. Every early return
        // above happens before this insert, so the single removal at the
        // bottom releases the state on every way out; a later, cheaper
        // route through it stays explorable.
        if !self.active.insert(state.clone()) {
            return;
        }
        self.generated += 1;
        self.deepest = self.deepest.max(depth);

        for action in 0..state.actions() {
            if let Some(next) = state.make_move(action) {
                if next.valid() {
                    path.push(action);
                    self.explore(&next, path, depth + 1);
                    path.pop();
                }
            }
        }

        self.active.remove(state);
    }
}

/// Backtracking branch and bound.
///
/// Exhaustive depth-first exploration with an incumbent: the first
/// solution found becomes the bound, every prefix that reaches the bound
/// is pruned, and each improvement tightens it. With unit transition
/// costs the surviving incumbent is a minimal-length solution. Recursion
/// depth follows the longest unpruned path, so enormous state spaces are
/// better served by [bfs](crate::bfs).
pub fn branch_and_bound<S>(origin: S) -> Result<Solution>
where
    S: SearchState,
{
    let mut search = Backtracker {
        active: HashSet::new(),
        best: None,
        generated: 0,
        deepest: 0,
    };

    if origin.valid() {
        let mut path = Vec::new();
        search.explore(&origin, &mut path, 0);
    }

    match search.best.take() {
        Some(actions) => {
            let stats = Stats::new(actions.len(), search.deepest + 1, search.generated);
            Ok(Solution::new(actions, stats))
        }
        None => Err(SearchError::Exhausted(Stats::new(
            0,
            search.deepest + 1,
            search.generated,
        ))),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::basic::bfs;
    use crate::testgrid::{replay, Walk};

    const FORKED: &str = "
        S....
        .###.
        ....G";

    #[test]
    fn best_bound_reaches_the_goal() {
        let maze = Walk::parse(FORKED);
        let solution = best_bound(maze.clone()).unwrap();
        assert!(replay(&maze, solution.actions()).finished());
    }

    #[test]
    fn best_bound_is_direct_on_a_corridor() {
        let solution = best_bound(Walk::parse("S....G")).unwrap();
        assert_eq!(solution.actions(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn backtracking_matches_breadth_first_length() {
        let maze = Walk::parse(FORKED);
        let bounded = branch_and_bound(maze.clone()).unwrap();
        let shortest = bfs(maze.clone()).unwrap();

        assert_eq!(bounded.len(), shortest.len());
        assert!(replay(&maze, bounded.actions()).finished());
    }

    #[test]
    fn backtracking_finds_the_short_branch() {
        // The greedy-looking first branch is a dead end; pruning still
        // has to let the search back out and take the detour.
        let maze = Walk::parse(
            "
            S.#.
            #.#.
            ..#.
            .##.
            ...G",
        );
        let bounded = branch_and_bound(maze.clone()).unwrap();
        let shortest = bfs(maze).unwrap();
        assert_eq!(bounded.len(), shortest.len());
    }

    #[test]
    fn backtracking_exhausts_split_maze() {
        let maze = Walk::parse(
            "
            S#.
            .#G",
        );
        match branch_and_bound(maze) {
            Err(SearchError::Exhausted(stats)) => assert!(stats.generated() > 0),
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn backtracking_generates_at_least_the_path() {
        let solution = branch_and_bound(Walk::parse(FORKED)).unwrap();
        assert!(solution.stats().generated() >= solution.len());
    }
}
