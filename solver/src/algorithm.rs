//! Building blocks shared by the search strategies.
//!
//! Most strategies are one loop with one knob: the order in which the
//! frontier releases nodes. [Search] owns that loop and a generic
//! [Frontier] decides the order, so breadth-first, depth-first,
//! uniform-cost, heuristic-ordered and best-bound searches are each a
//! frontier implementation plus a thin entry point. The two strategies
//! that do not fit the single-frontier shape (backtracking branch and
//! bound, bidirectional search) live in their own modules.

use std::collections::HashSet;

use log::debug;

use crate::errors::{Result, SearchError};
use crate::solution::Solution;
use crate::stats::Stats;
use crate::traits::{Action, SearchState};

pub(crate) mod basic;
pub(crate) mod bidirectional;
pub(crate) mod bound;
pub(crate) mod cheapest;
pub(crate) mod ordered;

/// One not-yet-expanded candidate: a state plus the actions that reached
/// it from the origin. Depth equals the path length and doubles as the
/// accumulated cost, since every transition costs one.
#[derive(Debug, Clone)]
pub(crate) struct Node<S> {
    pub(crate) state: S,
    pub(crate) path: Vec<Action>,
    pub(crate) depth: usize,
}

impl<S> Node<S> {
    fn origin(state: S) -> Self {
        Node {
            state,
            path: Vec::new(),
            depth: 0,
        }
    }

    fn child(&self, state: S, action: Action) -> Self {
        let mut path = self.path.clone();
        path.push(action);
        Node {
            state,
            path,
            depth: self.depth + 1,
        }
    }
}

/// The collection of nodes awaiting expansion.
///
/// The release order is the whole personality of a strategy; everything
/// else in [Search] is shared.
pub(crate) trait Frontier<S> {
    fn pop(&mut self) -> Option<Node<S>>;

    fn push(&mut self, node: Node<S>);

    fn len(&self) -> usize;

    /// Admit one expansion's worth of successors. The default preserves
    /// action enumeration order; frontiers that rank siblings against
    /// each other override this.
    fn extend(&mut self, batch: Vec<Node<S>>) {
        for node in batch {
            self.push(node);
        }
    }
}

/// Implementation of search, using generic components.
///
/// Pops a node, returns its path if it is a goal, otherwise marks it
/// visited and hands every applicable, valid, unvisited successor back to
/// the frontier. The visited set is scoped to one invocation and only
/// ever grows.
#[derive(Debug)]
pub(crate) struct Search<S, F>
where
    S: SearchState,
    F: Frontier<S>,
{
    frontier: F,
    visited: HashSet<S>,
    generated: usize,
    deepest: usize,
}

impl<S, F> Search<S, F>
where
    S: SearchState,
    F: Frontier<S> + Default,
{
    pub(crate) fn new(origin: S) -> Self {
        Search::with_frontier(F::default(), origin)
    }
}

impl<S, F> Search<S, F>
where
    S: SearchState,
    F: Frontier<S>,
{
    /// Seed a search with an explicit frontier. An invalid origin seeds
    /// nothing, so the search reports exhaustion immediately.
    pub(crate) fn with_frontier(mut frontier: F, origin: S) -> Self {
        if origin.valid() {
            frontier.push(Node::origin(origin));
        }
        Search {
            frontier,
            visited: HashSet::new(),
            generated: 0,
            deepest: 0,
        }
    }

    fn stats(&self, solution_length: usize) -> Stats {
        Stats::new(solution_length, self.deepest + 1, self.generated)
    }

    /// Run the search to completion.
    pub(crate) fn run(mut self) -> Result<Solution> {
        while let Some(node) = self.frontier.pop() {
            if node.state.finished() {
                let stats = self.stats(node.path.len());
                return Ok(Solution::new(node.path, stats));
            }

            // insert also answers "seen before?": a false return means a
            // duplicate reached the frontier ahead of this copy.
            if !self.visited.insert(node.state.clone()) {
                continue;
            }
            self.generated += 1;
            self.deepest = self.deepest.max(node.depth);

            if self.generated % 10_000 == 0 {
                debug!(
                    "expanded {} states, frontier {}, depth {}",
                    self.generated,
                    self.frontier.len(),
                    node.depth
                );
            }

            let mut batch = Vec::with_capacity(node.state.actions());
            for action in 0..node.state.actions() {
                if let Some(next) = node.state.make_move(action) {
                    if next.valid() && !self.visited.contains(&next) {
                        batch.push(node.child(next, action));
                    }
                }
            }
            self.frontier.extend(batch);
        }

        Err(SearchError::Exhausted(self.stats(0)))
    }
}
