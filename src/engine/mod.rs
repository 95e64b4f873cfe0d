//! Decision engine: partitioning, scoring, selection, and the solver state
//! machine

mod bucket;
mod score;
mod select;
mod solver;

pub use bucket::BucketTable;
pub use score::{Metric, expected_remaining, shannon_entropy};
pub use select::{Selection, select_best};
pub use solver::{OPENING_GUESS, Solver, SolverError, TURN_BUDGET};
