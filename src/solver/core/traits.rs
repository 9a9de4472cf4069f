//! The solver contract.
//!
//! Every strategy for building a minimum spanning tree implements
//! [`SpanningTreeSolver`].  The set of strategies is closed; the
//! [`SupportedSolver`](crate::solver::SupportedSolver) enum dispatches to
//! each of them.

use super::{SolverSettings, SpanningSolution};
use crate::algebra::*;
use crate::graph::{Edge, StationIndex};
use crate::timers::Timers;
use enum_dispatch::*;

#[enum_dispatch]
pub trait SpanningTreeSolver<W>
where
    W: WeightT,
{
    /// Human readable algorithm name.
    fn name(&self) -> &'static str;

    /// Build a spanning tree over the stations appearing in `candidates`.
    ///
    /// Per-solve state from any previous call is discarded.  The returned
    /// slice is the accepted edge set, also available through
    /// [`solution`](SpanningTreeSolver::solution) along with the status
    /// and metrics.
    fn solve(&mut self, candidates: &[Edge<W>]) -> &[Edge<W>];

    /// Result of the most recent solve.
    fn solution(&self) -> &SpanningSolution<W>;

    /// Station universe of the most recent solve, in first-seen order.
    fn stations(&self) -> &StationIndex;

    fn settings(&self) -> &SolverSettings;

    /// Phase timers of the most recent solve.
    fn timers(&self) -> &Timers;

    /// Weight of the spanning tree, or `None` if the last solve did not
    /// produce one.
    fn total_weight(&self) -> Option<W> {
        self.solution().weight()
    }

    /// Number of decisions evaluated by the last solve.
    fn step_metric(&self) -> u64 {
        self.solution().steps
    }

    /// Write the result of the last solve to the solver's print target.
    fn report(&mut self) -> std::io::Result<()>;
}
