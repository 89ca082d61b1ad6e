//! Uniform-cost search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::algorithm::{Frontier, Node, Search};
use crate::errors::Result;
use crate::solution::Solution;
use crate::traits::SearchState;

/// Heap entry ordered by accumulated cost, breaking ties by insertion
/// order so equal-cost nodes leave the frontier in the order they
/// arrived. The ordering is reversed because [BinaryHeap] pops its
/// maximum.
#[derive(Debug)]
struct Costed<S> {
    node: Node<S>,
    seq: usize,
}

impl<S> PartialEq for Costed<S> {
    fn eq(&self, other: &Self) -> bool {
        self.node.depth == other.node.depth && self.seq == other.seq
    }
}

impl<S> Eq for Costed<S> {}

impl<S> Ord for Costed<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .depth
            .cmp(&other.node.depth)
            .then(self.seq.cmp(&other.seq))
            .reverse()
    }
}

impl<S> PartialOrd for Costed<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority frontier that always releases the cheapest path found so
/// far.
#[derive(Debug)]
pub(crate) struct CheapestFrontier<S> {
    heap: BinaryHeap<Costed<S>>,
    admitted: usize,
}

impl<S> Default for CheapestFrontier<S> {
    fn default() -> Self {
        CheapestFrontier {
            heap: BinaryHeap::new(),
            admitted: 0,
        }
    }
}

impl<S> Frontier<S> for CheapestFrontier<S> {
    fn pop(&mut self) -> Option<Node<S>> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn push(&mut self, node: Node<S>) {
        let seq = self.admitted;
        self.admitted += 1;
        self.heap.push(Costed { node, seq });
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Uniform-cost search.
///
/// Expands states in non-decreasing accumulated cost. Every transition
/// costs one here, so the first goal popped carries a minimal path; the
/// visited set is marked on pop, not on push, which is what guarantees
/// the first pop of a state is its cheapest.
pub fn ucs<S>(origin: S) -> Result<Solution>
where
    S: SearchState,
{
    Search::<S, CheapestFrontier<S>>::new(origin).run()
}
