pub use breadth::bfs;
pub use depth::dfs;

mod breadth {
    use std::collections::VecDeque;

    use crate::algorithm::{Frontier, Node, Search};
    use crate::errors::Result;
    use crate::solution::Solution;
    use crate::traits::SearchState;

    /// First-in, first-out frontier: states are expanded in discovery
    /// order, one level at a time.
    #[derive(Debug)]
    pub(crate) struct BreadthFrontier<S> {
        queue: VecDeque<Node<S>>,
    }

    impl<S> Default for BreadthFrontier<S> {
        fn default() -> Self {
            BreadthFrontier {
                queue: VecDeque::new(),
            }
        }
    }

    impl<S> Frontier<S> for BreadthFrontier<S> {
        fn pop(&mut self) -> Option<Node<S>> {
            self.queue.pop_front()
        }

        fn push(&mut self, node: Node<S>) {
            self.queue.push_back(node);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    /// Breadth-first search.
    ///
    /// Expands states in non-decreasing depth order, so the first goal
    /// reached is reached by a shortest action sequence. Complete on any
    /// finite state space.
    pub fn bfs<S>(origin: S) -> Result<Solution>
    where
        S: SearchState,
    {
        Search::<S, BreadthFrontier<S>>::new(origin).run()
    }
}

mod depth {
    use std::collections::VecDeque;

    use crate::algorithm::{Frontier, Node, Search};
    use crate::errors::Result;
    use crate::solution::Solution;
    use crate::traits::SearchState;

    /// Last-in, first-out frontier: the most recently discovered state is
    /// expanded first.
    #[derive(Debug)]
    pub(crate) struct DepthFrontier<S> {
        stack: VecDeque<Node<S>>,
    }

    impl<S> Default for DepthFrontier<S> {
        fn default() -> Self {
            DepthFrontier {
                stack: VecDeque::new(),
            }
        }
    }

    impl<S> Frontier<S> for DepthFrontier<S> {
        fn pop(&mut self) -> Option<Node<S>> {
            self.stack.pop_front()
        }

        fn push(&mut self, node: Node<S>) {
            self.stack.push_front(node);
        }

        fn len(&self) -> usize {
            self.stack.len()
        }
    }

    /// Depth-first search.
    ///
    /// Finds *a* solution if one is reachable, with no optimality
    /// guarantee; memory follows the current branch rather than the
    /// frontier width. Deliberately iterative: an explicit stack survives
    /// state spaces deep enough to exhaust the call stack of a recursive
    /// formulation.
    pub fn dfs<S>(origin: S) -> Result<Solution>
    where
        S: SearchState,
    {
        Search::<S, DepthFrontier<S>>::new(origin).run()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::SearchError;
    use crate::testgrid::{replay, Walk};
    use crate::traits::SearchState;

    const OPEN_SQUARE: &str = "
        S.
        .G";

    const SPLIT: &str = "
        S#.
        .#.
        .#G";

    #[test]
    fn bfs_returns_shortest_path() {
        let maze = Walk::parse(OPEN_SQUARE);
        let solution = bfs(maze.clone()).unwrap();

        assert_eq!(solution.len(), 2);
        assert!(replay(&maze, solution.actions()).finished());
    }

    #[test]
    fn bfs_counts_generated_states() {
        let solution = bfs(Walk::parse(OPEN_SQUARE)).unwrap();
        assert!(solution.stats().generated() >= solution.len());
        assert_eq!(solution.stats().solution_length(), solution.len());
    }

    #[test]
    fn bfs_on_finished_origin_is_empty() {
        let solution = bfs(Walk::parse("S")).unwrap();
        assert!(solution.is_empty());
        assert_eq!(solution.stats().generated(), 0);
    }

    #[test]
    fn bfs_exhausts_split_maze() {
        match bfs(Walk::parse(SPLIT)) {
            Err(SearchError::Exhausted(stats)) => {
                // Only the left column is reachable.
                assert_eq!(stats.generated(), 3);
            }
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn bfs_rejects_invalid_origin() {
        let mut maze = Walk::parse(SPLIT);
        maze.at = (0, 1);

        match bfs(maze) {
            Err(SearchError::Exhausted(stats)) => assert_eq!(stats.generated(), 0),
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn dfs_finds_some_path() {
        let maze = Walk::parse(OPEN_SQUARE);
        let solution = dfs(maze.clone()).unwrap();

        // Without revisits a 2x2 grid only admits paths of 2 or 3 moves.
        assert!(solution.len() <= 3);
        assert!(replay(&maze, solution.actions()).finished());
    }

    #[test]
    fn dfs_exhausts_split_maze() {
        assert!(dfs(Walk::parse(SPLIT)).is_err());
    }

    #[test]
    fn dfs_handles_longer_grids() {
        let maze = Walk::parse(
            "
            S....
            .###.
            ...#.
            .#.#.
            .#..G",
        );
        let solution = dfs(maze.clone()).unwrap();
        assert!(replay(&maze, solution.actions()).finished());
    }
}
