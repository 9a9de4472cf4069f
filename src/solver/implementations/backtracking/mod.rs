//! Exhaustive spanning tree search with pruning.

mod solver;
mod state;

pub use solver::*;
pub use state::*;
