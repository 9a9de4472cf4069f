//! Greedy (Kruskal-style) spanning tree solver.

mod solver;
pub use solver::*;
