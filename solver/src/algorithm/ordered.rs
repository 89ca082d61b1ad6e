//! Depth-first search steered by a goal-distance estimate.

use std::cmp::Reverse;
use std::collections::VecDeque;
use std::marker::PhantomData;

use crate::algorithm::{Frontier, Node, Search};
use crate::errors::Result;
use crate::solution::Solution;
use crate::traits::{Heuristic, SearchState};

/// Stack frontier which ranks each expansion batch before pushing it.
///
/// Siblings are pushed worst-estimate first; since the stack releases the
/// last push first, the successor judged closest to the goal is always
/// explored ahead of its siblings.
#[derive(Debug)]
struct RankedStack<S, R, K> {
    stack: VecDeque<Node<S>>,
    rate: R,
    marker: PhantomData<K>,
}

impl<S, R, K> Frontier<S> for RankedStack<S, R, K>
where
    S: SearchState,
    R: Fn(&S) -> K,
    K: Ord,
{
    fn pop(&mut self) -> Option<Node<S>> {
        self.stack.pop_front()
    }

    fn push(&mut self, node: Node<S>) {
        self.stack.push_front(node);
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn extend(&mut self, mut batch: Vec<Node<S>>) {
        let rate = &self.rate;
        batch.sort_by_cached_key(|node| Reverse(rate(&node.state)));
        for node in batch {
            self.stack.push_front(node);
        }
    }
}

/// Heuristic-ordered depth-first search using the state's own estimate.
///
/// Same discipline as [dfs](crate::dfs), except that the successors of
/// each expanded state are visited best-estimate first. Still a greedy
/// depth-first walk, not A*: the estimate picks among siblings and
/// nothing else, so neither completeness nor optimality improves.
pub fn dfs_ordered<S>(origin: S) -> Result<Solution>
where
    S: Heuristic,
{
    dfs_ordered_by(origin, S::estimate)
}

/// Heuristic-ordered depth-first search with an external scoring
/// function, for domains (or callers) that want to rank states without
/// implementing [Heuristic].
pub fn dfs_ordered_by<S, K, R>(origin: S, rate: R) -> Result<Solution>
where
    S: SearchState,
    K: Ord,
    R: Fn(&S) -> K,
{
    let frontier = RankedStack {
        stack: VecDeque::new(),
        rate,
        marker: PhantomData,
    };
    Search::with_frontier(frontier, origin).run()
}
