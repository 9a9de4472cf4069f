use crate::algebra::*;
use crate::graph::{Edge, StationIndex};
use crate::solver::core::{
    impl_print_target, traits::SpanningTreeSolver, DisjointSet, SolverCore, SolverSettings,
    SolverStatus, SpanningSolution,
};
use crate::timers::*;

/// Kruskal-style solver without a priority queue.
///
/// Candidates are stable-sorted by weight and scanned once.  Each tunnel
/// joining two different components is accepted, until the tree spans
/// every station or the candidates run out.
///
/// Complexity: O(E log E) for the sort plus O(E α(N)) for the scan.
#[derive(Debug)]
pub struct GreedySolver<W> {
    core: SolverCore<W>,
}

impl<W> GreedySolver<W>
where
    W: WeightT,
{
    pub fn new(settings: SolverSettings) -> Self {
        Self {
            core: SolverCore::new(settings),
        }
    }
}

impl<W> Default for GreedySolver<W>
where
    W: WeightT,
{
    fn default() -> Self {
        Self::new(SolverSettings::default())
    }
}

impl<W> SpanningTreeSolver<W> for GreedySolver<W>
where
    W: WeightT,
{
    fn name(&self) -> &'static str {
        "Greedy"
    }

    fn solve(&mut self, candidates: &[Edge<W>]) -> &[Edge<W>] {
        let name = self.name();
        self.core.begin(name, candidates);

        let core = &mut self.core;
        let mut sorted = candidates.to_vec();
        let mut connectivity;

        timeit! {core.timers => "setup"; {
            // stable, so equal weights keep their input order
            sorted.sort_by(Edge::cmp_weight);
            connectivity = DisjointSet::new(core.stations.len());
        }}

        let target = core.stations.len().saturating_sub(1);
        let mut edges = Vec::with_capacity(target);

        timeit! {core.timers => "scan"; {
            for edge in sorted {
                if edges.len() >= target {
                    break;
                }
                core.info.step();

                let (a, b) = core.stations.endpoints(&edge);
                if connectivity.union(a, b) {
                    edges.push(edge);
                }
            }
        }}

        let status = match checked_weight_sum(edges.iter().map(|e| e.weight)) {
            Some(total) => {
                core.solution.total_weight = total;
                core.connectivity_status(connectivity.number_of_sets())
            }
            None => {
                core.solution.total_weight = W::max_value();
                SolverStatus::WeightOverflow
            }
        };
        core.solution.edges = edges;
        core.finish(status);

        &self.core.solution.edges
    }

    fn solution(&self) -> &SpanningSolution<W> {
        &self.core.solution
    }

    fn stations(&self) -> &StationIndex {
        &self.core.stations
    }

    fn settings(&self) -> &SolverSettings {
        &self.core.settings
    }

    fn timers(&self) -> &Timers {
        &self.core.timers
    }

    fn report(&mut self) -> std::io::Result<()> {
        let name = self.name();
        self.core.report(name)
    }
}

impl_print_target!(GreedySolver);
