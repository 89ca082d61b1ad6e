//! The grid-maze domain: a robot navigating a walled grid.
//!
//! [Grid] owns the immutable wall layout; [Situation] is the robot's
//! place in one grid and implements the solver's state contract, so any
//! strategy in the `solver` crate can drive the robot. [generate] carves
//! random mazes to try the strategies on.

mod generator;
mod grid;
mod situation;

pub use generator::generate;
pub use grid::Grid;
pub use grid::GridError;
pub use situation::Point;
pub use situation::Situation;
