//! Spanning tree solver implementations.
//!
//! - [`greedy`]: Kruskal-style scan over the weight-sorted candidates.
//! - [`backtracking`]: exhaustive include/exclude search with pruning.
//!
//! [`SupportedSolver`] wraps either one behind the common
//! [`SpanningTreeSolver`] interface.

pub mod backtracking;
pub mod greedy;

use crate::algebra::*;
// signatures of the dispatched traits name these types
use crate::graph::{Edge, StationIndex};
use crate::io::ConfigurablePrintTarget;
use crate::solver::core::{traits::SpanningTreeSolver, SolverSettings, SpanningSolution};
use crate::timers::Timers;
use backtracking::BacktrackingSolver;
use enum_dispatch::*;
use greedy::GreedySolver;

/// The closed set of available solvers.
#[enum_dispatch(SpanningTreeSolver<W>, ConfigurablePrintTarget)]
#[derive(Debug)]
pub enum SupportedSolver<W>
where
    W: WeightT,
{
    Greedy(GreedySolver<W>),
    Backtracking(BacktrackingSolver<W>),
}

/// Selector for [`SupportedSolver::new`].
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SolverKind {
    Greedy,
    Backtracking,
}

impl<W> SupportedSolver<W>
where
    W: WeightT,
{
    pub fn new(kind: SolverKind, settings: SolverSettings) -> Self {
        match kind {
            SolverKind::Greedy => GreedySolver::new(settings).into(),
            SolverKind::Backtracking => BacktrackingSolver::new(settings).into(),
        }
    }

    /// One solver of each kind, greedy first.
    pub fn all(settings: &SolverSettings) -> Vec<Self> {
        [SolverKind::Greedy, SolverKind::Backtracking]
            .into_iter()
            .map(|kind| Self::new(kind, settings.clone()))
            .collect()
    }
}
