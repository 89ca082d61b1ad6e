use std::fmt::Debug;
use std::hash::Hash;

/// An opaque index into a state's action space.
///
/// What an index means is entirely up to the domain; strategies only ever
/// enumerate `0..actions()` and pass each index back to
/// [SearchState::make_move].
pub type Action = usize;

/// The capability surface every search strategy works through.
///
/// States are value objects: transitions produce new states and never
/// touch the receiver. Equality and hashing must agree (equal states hash
/// equally) because strategies rely on them to deduplicate visited
/// states.
pub trait SearchState: Clone + Eq + Hash + Debug {
    /// True when the state satisfies every domain constraint.
    fn valid(&self) -> bool;

    /// True when the state is a goal state.
    fn finished(&self) -> bool;

    /// Number of action indices that may be attempted; legal indices are
    /// `0..actions()`. Passing an index outside that range to
    /// [SearchState::make_move] is a caller error.
    fn actions(&self) -> usize;

    /// The successor reached by `action`, or `None` when the action is
    /// structurally inapplicable in this state.
    ///
    /// A structurally produced successor may still violate domain
    /// constraints; callers must check it with [SearchState::valid]
    /// before exploring it.
    fn make_move(&self, action: Action) -> Option<Self>;
}

/// States which can estimate how far they are from a goal.
///
/// Smaller estimates are judged closer. The estimate only has to order
/// candidates consistently; it makes no admissibility promise, and the
/// strategies that use it ([dfs_ordered](crate::dfs_ordered),
/// [best_bound](crate::best_bound)) stay greedy rather than optimal.
pub trait Heuristic: SearchState {
    type Estimate: Debug + Clone + Ord;

    fn estimate(&self) -> Self::Estimate;
}

/// States whose every action has a structural opposite.
///
/// [bidirectional](crate::bidirectional) search needs this to turn a path
/// discovered backward from the goal into forward actions. Domains
/// without a well-defined inverse (the river crossing, for one) simply do
/// not implement this and are rejected at compile time.
pub trait Reversible: SearchState {
    /// The action that undoes `action`.
    fn invert_action(&self, action: Action) -> Action;
}
