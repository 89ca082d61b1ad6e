//! A small grid world used to exercise the strategies in tests.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::traits::{Action, Heuristic, Reversible, SearchState};

/// Row/column deltas for the four actions: right, down, up, left.
const MOVES: [(i64, i64); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];

/// A walker on a shared grid of blocked and open cells.
///
/// Identity is the walker's position alone; the layout and the goal are
/// shared by every state of one search.
#[derive(Clone)]
pub(crate) struct Walk {
    blocked: Rc<Vec<Vec<bool>>>,
    pub(crate) at: (i64, i64),
    goal: (i64, i64),
}

impl Walk {
    /// Build a walk from a drawing: `#` blocked, `.` open, `S` start,
    /// `G` goal. Without an explicit `G` the start doubles as the goal.
    pub(crate) fn parse(layout: &str) -> Walk {
        let mut blocked = Vec::new();
        let mut start = (0, 0);
        let mut goal = None;

        for (row, line) in layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
        {
            let mut cells = Vec::new();
            for (col, tile) in line.chars().enumerate() {
                match tile {
                    '#' => cells.push(true),
                    '.' => cells.push(false),
                    'S' => {
                        cells.push(false);
                        start = (row as i64, col as i64);
                    }
                    'G' => {
                        cells.push(false);
                        goal = Some((row as i64, col as i64));
                    }
                    other => panic!("unknown tile {:?}", other),
                }
            }
            blocked.push(cells);
        }

        Walk {
            blocked: Rc::new(blocked),
            at: start,
            goal: goal.unwrap_or(start),
        }
    }

    /// The matching goal state, for searches that run from both ends.
    pub(crate) fn at_goal(&self) -> Walk {
        let mut state = self.clone();
        state.at = self.goal;
        state
    }

    pub(crate) fn distance_squared(&self) -> u64 {
        let dr = self.at.0 - self.goal.0;
        let dc = self.at.1 - self.goal.1;
        (dr * dr + dc * dc) as u64
    }
}

impl fmt::Debug for Walk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Walk({}, {})", self.at.0, self.at.1)
    }
}

impl PartialEq for Walk {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl Eq for Walk {}

impl Hash for Walk {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.at.hash(state);
    }
}

impl SearchState for Walk {
    fn valid(&self) -> bool {
        let (row, col) = self.at;
        if row < 0 || col < 0 {
            return false;
        }
        match self.blocked.get(row as usize).and_then(|r| r.get(col as usize)) {
            Some(blocked) => !blocked,
            None => false,
        }
    }

    fn finished(&self) -> bool {
        self.at == self.goal
    }

    fn actions(&self) -> usize {
        MOVES.len()
    }

    fn make_move(&self, action: Action) -> Option<Self> {
        let (dr, dc) = MOVES[action];
        let mut next = self.clone();
        next.at = (self.at.0 + dr, self.at.1 + dc);
        Some(next)
    }
}

impl Heuristic for Walk {
    type Estimate = u64;

    fn estimate(&self) -> u64 {
        self.distance_squared()
    }
}

impl Reversible for Walk {
    fn invert_action(&self, action: Action) -> Action {
        3 - action
    }
}

/// Replay an action sequence, checking that every intermediate state is
/// valid, and return the final state.
pub(crate) fn replay<S>(origin: &S, actions: &[Action]) -> S
where
    S: SearchState,
{
    let mut state = origin.clone();
    for &action in actions {
        state = state
            .make_move(action)
            .expect("replayed action was applicable");
        assert!(state.valid(), "replayed into an invalid state");
    }
    state
}
