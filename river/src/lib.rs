//! The river-crossing domain: a wolf, a goat and a cabbage must be
//! ferried to the right bank in a one-passenger boat, and nothing may be
//! left alone with its lunch.
//!
//! [Crossing] implements the solver's state contract, so any strategy in
//! the `solver` crate can plan the trips. Load actions have no
//! structural opposite, so the domain deliberately does not implement
//! `Reversible` and cannot be handed to bidirectional search.

use std::fmt;

use bitflags::bitflags;

use solver::{Action, Heuristic, SearchState};

bitflags! {
    /// A set of the three passengers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Entities: u8 {
        const WOLF = 1;
        const GOAT = 1 << 1;
        const CABBAGE = 1 << 2;
    }
}

/// Passenger for each load action index.
const PASSENGERS: [Entities; 3] = [Entities::WOLF, Entities::GOAT, Entities::CABBAGE];

/// Which side of the river the boat is docked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    Left,
    Right,
}

/// The one action that moves the boat: everything it carries is unloaded
/// onto the opposite bank. Actions `0..=2` load the wolf, goat or
/// cabbage from the left bank; `3..=5` load the same passengers from the
/// right bank.
pub const CROSS: Action = 6;

/// One configuration of the puzzle: who stands on each bank, who sits in
/// the boat, and where the boat is docked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crossing {
    left: Entities,
    right: Entities,
    boat: Entities,
    bank: Bank,
}

impl Crossing {
    /// Everyone on the left bank, boat empty and docked left.
    pub fn start() -> Crossing {
        Crossing::new(Entities::all(), Entities::empty(), Entities::empty(), Bank::Left)
    }

    pub fn new(left: Entities, right: Entities, boat: Entities, bank: Bank) -> Crossing {
        Crossing {
            left,
            right,
            boat,
            bank,
        }
    }

    pub fn left(&self) -> Entities {
        self.left
    }

    pub fn right(&self) -> Entities {
        self.right
    }

    pub fn boat(&self) -> Entities {
        self.boat
    }

    pub fn bank(&self) -> Bank {
        self.bank
    }

    /// A bank is safe while the boat is docked there; otherwise neither
    /// predator pair may be left on it together.
    fn bank_is_safe(side: Entities, guarded: bool) -> bool {
        if guarded {
            return true;
        }
        if side.contains(Entities::WOLF | Entities::GOAT) {
            return false;
        }
        !side.contains(Entities::GOAT | Entities::CABBAGE)
    }
}

impl SearchState for Crossing {
    fn valid(&self) -> bool {
        Crossing::bank_is_safe(self.left, self.bank == Bank::Left)
            && Crossing::bank_is_safe(self.right, self.bank == Bank::Right)
    }

    fn finished(&self) -> bool {
        self.left.is_empty() && self.boat.is_empty() && self.bank == Bank::Right
    }

    fn actions(&self) -> usize {
        7
    }

    fn make_move(&self, action: Action) -> Option<Self> {
        let mut next = *self;
        match action {
            0..=2 => {
                let passenger = PASSENGERS[action];
                if self.bank != Bank::Left || !self.left.contains(passenger) || !self.boat.is_empty()
                {
                    return None;
                }
                next.left &= !passenger;
                next.boat = passenger;
            }
            3..=5 => {
                let passenger = PASSENGERS[action - 3];
                if self.bank != Bank::Right
                    || !self.right.contains(passenger)
                    || !self.boat.is_empty()
                {
                    return None;
                }
                next.right &= !passenger;
                next.boat = passenger;
            }
            CROSS => match self.bank {
                Bank::Left => {
                    next.bank = Bank::Right;
                    next.right |= self.boat;
                    next.boat = Entities::empty();
                }
                Bank::Right => {
                    next.bank = Bank::Left;
                    next.left |= self.boat;
                    next.boat = Entities::empty();
                }
            },
            _ => return None,
        }
        Some(next)
    }
}

impl Heuristic for Crossing {
    type Estimate = u32;

    /// Fewer passengers still to ferry means closer to done.
    fn estimate(&self) -> u32 {
        3 - self.right.bits().count_ones()
    }
}

fn describe(set: Entities) -> String {
    let mut names = Vec::new();
    if set.contains(Entities::WOLF) {
        names.push("wolf");
    }
    if set.contains(Entities::GOAT) {
        names.push("goat");
    }
    if set.contains(Entities::CABBAGE) {
        names.push("cabbage");
    }
    if names.is_empty() {
        String::from("nobody")
    } else {
        names.join(", ")
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Left bank:  {}", describe(self.left))?;
        writeln!(f, "Right bank: {}", describe(self.right))?;
        writeln!(
            f,
            "Boat:       {} (docked {})",
            describe(self.boat),
            match self.bank {
                Bank::Left => "left",
                Bank::Right => "right",
            }
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use solver::{bfs, branch_and_bound, dfs_ordered, ucs, Solution};

    fn replay(solution: &Solution) -> Crossing {
        let mut state = Crossing::start();
        for &action in solution.actions() {
            state = state.make_move(action).unwrap();
            assert!(state.valid(), "replayed into an unsafe bank arrangement");
        }
        state
    }

    #[test]
    fn start_is_valid_and_unfinished() {
        let start = Crossing::start();
        assert!(start.valid());
        assert!(!start.finished());
    }

    #[test]
    fn goat_and_cabbage_cannot_be_abandoned() {
        // The wolf was ferried first; goat and cabbage share the left
        // bank with the boat away.
        let state = Crossing::new(
            Entities::GOAT | Entities::CABBAGE,
            Entities::WOLF,
            Entities::empty(),
            Bank::Right,
        );
        assert!(!state.valid());
    }

    #[test]
    fn wolf_and_goat_cannot_be_abandoned() {
        let state = Crossing::new(
            Entities::CABBAGE,
            Entities::WOLF | Entities::GOAT,
            Entities::empty(),
            Bank::Left,
        );
        assert!(!state.valid());
    }

    #[test]
    fn the_boat_guards_its_own_bank() {
        let state = Crossing::new(
            Entities::WOLF | Entities::GOAT,
            Entities::CABBAGE,
            Entities::empty(),
            Bank::Left,
        );
        assert!(state.valid());
    }

    #[test]
    fn loading_needs_the_boat_docked_and_empty() {
        let start = Crossing::start();

        // Loading from the far bank is not a move.
        assert!(start.make_move(3).is_none());

        // A second passenger will not fit.
        let loaded = start.make_move(1).unwrap();
        assert!(loaded.make_move(0).is_none());
    }

    #[test]
    fn crossing_unloads_on_the_far_side() {
        let over = Crossing::start()
            .make_move(1)
            .and_then(|state| state.make_move(CROSS))
            .unwrap();

        assert_eq!(over.right(), Entities::GOAT);
        assert!(over.boat().is_empty());
        assert_eq!(over.bank(), Bank::Right);
    }

    #[test]
    fn crossing_empty_is_always_possible() {
        let idle = Crossing::start().make_move(CROSS).unwrap();
        assert_eq!(idle.bank(), Bank::Right);
        assert!(idle.right().is_empty());
    }

    #[test]
    fn out_of_range_actions_are_inapplicable() {
        assert!(Crossing::start().make_move(7).is_none());
    }

    #[test]
    fn breadth_first_finds_the_seven_crossing_plan() {
        let solution = bfs(Crossing::start()).unwrap();

        // The classic plan crosses seven times; with explicit load
        // actions (three goat trips, one each for wolf and cabbage) the
        // minimal sequence is twelve actions long.
        assert_eq!(solution.len(), 12);
        let crossings = solution
            .actions()
            .iter()
            .filter(|&&action| action == CROSS)
            .count();
        assert_eq!(crossings, 7);
        assert!(replay(&solution).finished());
    }

    #[test]
    fn cost_ordered_and_bounded_plans_are_minimal_too() {
        assert_eq!(ucs(Crossing::start()).unwrap().len(), 12);
        assert_eq!(branch_and_bound(Crossing::start()).unwrap().len(), 12);
    }

    #[test]
    fn greedy_ordering_still_ferries_everyone() {
        let solution = dfs_ordered(Crossing::start()).unwrap();
        assert!(replay(&solution).finished());
    }

    #[test]
    fn statistics_cover_the_whole_plan() {
        let solution = bfs(Crossing::start()).unwrap();
        assert!(solution.stats().generated() >= solution.len());
        assert!(solution.stats().max_depth() >= solution.len());
    }
}
