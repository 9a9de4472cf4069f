//! railspan solver module.
//!
//! Two solvers build minimum spanning trees over a tunnel network:
//! [`GreedySolver`] and [`BacktrackingSolver`].  Both implement the
//! [`SpanningTreeSolver`] trait and are given the candidate tunnels as a
//! slice of [`Edge`](crate::graph::Edge) values.  [`SupportedSolver`]
//! wraps either behind one type.
//!
//! Results are reported through [`SpanningSolution`], whose
//! [`SolverStatus`] distinguishes a spanning tree from a network that
//! cannot be spanned.

// internal module structure
pub(crate) mod core;
pub mod implementations;

//user facing types required to interact with solvers
pub use crate::solver::core::traits::SpanningTreeSolver;
pub use crate::solver::core::{
    DisjointSet, SettingsError, SolveInfo, SolverCore, SolverSettings, SolverSettingsBuilder,
    SolverSettingsBuilderError, SolverStatus, SpanningSolution,
};

pub use crate::solver::implementations::backtracking::{BacktrackingSolver, SearchState};
pub use crate::solver::implementations::greedy::GreedySolver;
pub use crate::solver::implementations::{SolverKind, SupportedSolver};
