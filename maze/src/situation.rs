use std::fmt;
use std::hash::{Hash, Hasher};

use solver::{Action, Heuristic, Reversible, SearchState};

use crate::grid::Grid;

/// Row/column coordinates. Signed, so a step off the grid is
/// representable and rejected by the validity check instead of by
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: i64,
    pub col: i64,
}

impl Point {
    pub fn new(row: i64, col: i64) -> Point {
        Point { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Row/column deltas for the four actions: right, down, up, left.
const MOVES: [(i64, i64); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];

/// The robot's place in a maze it is trying to cross.
///
/// Identity is the robot's position alone: the grid and the goal are the
/// same for every state of one search, and keeping them out of
/// equality/hash is what lets the visited set do its job.
#[derive(Debug, Clone)]
pub struct Situation<'m> {
    grid: &'m Grid,
    position: Point,
    goal: Point,
}

impl<'m> Situation<'m> {
    pub fn new(grid: &'m Grid, position: Point, goal: Point) -> Situation<'m> {
        Situation {
            grid,
            position,
            goal,
        }
    }

    /// Start in the top-left corner, aiming for the bottom-right one.
    pub fn across(grid: &'m Grid) -> Situation<'m> {
        let goal = Point::new(grid.height() as i64 - 1, grid.width() as i64 - 1);
        Situation::new(grid, Point::new(0, 0), goal)
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The matching goal state, for searches that run from both ends.
    pub fn at_goal(&self) -> Situation<'m> {
        Situation::new(self.grid, self.goal, self.goal)
    }
}

impl<'m> PartialEq for Situation<'m> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<'m> Eq for Situation<'m> {}

impl<'m> Hash for Situation<'m> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

impl<'m> SearchState for Situation<'m> {
    fn valid(&self) -> bool {
        let Point { row, col } = self.position;
        row >= 0
            && col >= 0
            && (row as usize) < self.grid.height()
            && (col as usize) < self.grid.width()
            && !self.grid.is_wall(row as usize, col as usize)
    }

    fn finished(&self) -> bool {
        self.position == self.goal
    }

    fn actions(&self) -> usize {
        MOVES.len()
    }

    fn make_move(&self, action: Action) -> Option<Self> {
        let (dr, dc) = MOVES[action];
        let position = Point::new(self.position.row + dr, self.position.col + dc);
        Some(Situation::new(self.grid, position, self.goal))
    }
}

impl<'m> Heuristic for Situation<'m> {
    type Estimate = u64;

    /// Squared straight-line distance to the goal.
    fn estimate(&self) -> u64 {
        let dr = self.position.row - self.goal.row;
        let dc = self.position.col - self.goal.col;
        (dr * dr + dc * dc) as u64
    }
}

impl<'m> Reversible for Situation<'m> {
    fn invert_action(&self, action: Action) -> Action {
        // Actions 0 and 3 step along the column axis, 1 and 2 along the
        // row axis, each pair in opposite directions.
        3 - action
    }
}

impl<'m> fmt::Display for Situation<'m> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.height() {
            for col in 0..self.grid.width() {
                let here = Point::new(row as i64, col as i64);
                let tile = if here == self.position {
                    'R'
                } else if here == self.goal {
                    'G'
                } else if self.grid.is_wall(row, col) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
