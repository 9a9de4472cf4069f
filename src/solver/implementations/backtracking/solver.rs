use super::SearchState;
use crate::algebra::*;
use crate::graph::{Edge, StationIndex};
use crate::solver::core::{
    impl_print_target, traits::SpanningTreeSolver, SolverCore, SolverSettings, SolverStatus,
    SpanningSolution,
};
use crate::timers::*;

/// Exhaustive include/exclude search over the candidate tunnels.
///
/// At each candidate the search first tries to include it, provided it
/// joins two different components and keeps the accumulated weight
/// strictly below the best complete tree found so far, then tries to
/// exclude it.  Every visited node counts as one step.
///
/// The weight bound is only sound for non-negative weights.  If any
/// candidate is negative the search is not run and the solve ends with
/// [`SolverStatus::NegativeWeight`].
///
/// Complexity: O(2^N · N) in the number of candidates; pruning shrinks
/// the explored tree in practice but not the bound.
#[derive(Debug)]
pub struct BacktrackingSolver<W> {
    core: SolverCore<W>,
}

impl<W> BacktrackingSolver<W>
where
    W: WeightT,
{
    pub fn new(settings: SolverSettings) -> Self {
        Self {
            core: SolverCore::new(settings),
        }
    }
}

impl<W> Default for BacktrackingSolver<W>
where
    W: WeightT,
{
    fn default() -> Self {
        Self::new(SolverSettings::default())
    }
}

// The search driver.  Owns the best solution found so far; recursive
// frames only see it through `&mut self` and it changes only at
// terminal nodes.
struct Search<'a, W> {
    candidates: &'a [Edge<W>],
    endpoints: Vec<(usize, usize)>,
    best: Option<Vec<Edge<W>>>,
    best_weight: W,
    steps: u64,
    // an include branch was cut because its weight overflowed
    overflowed: bool,
}

impl<'a, W> Search<'a, W>
where
    W: WeightT,
{
    fn new(candidates: &'a [Edge<W>], stations: &StationIndex) -> Self {
        Self {
            candidates,
            endpoints: candidates.iter().map(|e| stations.endpoints(e)).collect(),
            best: None,
            // sentinel until a spanning tree is found
            best_weight: W::max_value(),
            steps: 0,
            overflowed: false,
        }
    }

    fn explore(&mut self, state: &mut SearchState<W>) {
        self.steps += 1;

        let position = state.position();

        if position == self.candidates.len() {
            self.record_if_better(state);
            return;
        }

        let weight = state.accumulated_weight();
        let edge = self.candidates[position];
        let (a, b) = self.endpoints[position];

        // include
        if state.joins_components(a, b) {
            if let Some(next_weight) = self.within_bound(weight, edge.weight) {
                let snapshot = state.include(edge, (a, b), next_weight);
                self.explore(state);
                state.undo(snapshot, position, weight);
            }
        }

        // exclude
        state.set_position(position + 1);
        self.explore(state);
        state.set_position(position);
    }

    // accumulated + w, if strictly below the best known weight.  There is
    // no bound until a first tree has been recorded.
    fn within_bound(&mut self, accumulated: W, w: W) -> Option<W> {
        let Some(next) = accumulated.checked_add(&w) else {
            self.overflowed = true;
            return None;
        };
        (self.best.is_none() || next < self.best_weight).then_some(next)
    }

    fn record_if_better(&mut self, state: &SearchState<W>) {
        if state.connectivity().number_of_sets() != 1 {
            return;
        }

        // ties found later replace earlier ones
        let weight = state.accumulated_weight();
        if self.best.is_none() || weight <= self.best_weight {
            self.best_weight = weight;
            self.best = Some(state.partial_solution().to_vec());
        }
    }
}

impl<W> SpanningTreeSolver<W> for BacktrackingSolver<W>
where
    W: WeightT,
{
    fn name(&self) -> &'static str {
        "Backtracking"
    }

    fn solve(&mut self, candidates: &[Edge<W>]) -> &[Edge<W>] {
        let name = self.name();
        self.core.begin(name, candidates);

        let core = &mut self.core;

        if candidates.iter().any(|e| e.weight < W::zero()) {
            core.solution.total_weight = W::max_value();
            core.finish(SolverStatus::NegativeWeight);
            return &self.core.solution.edges;
        }

        let mut search;
        let mut state;

        timeit! {core.timers => "setup"; {
            search = Search::new(candidates, &core.stations);
            state = SearchState::new(core.stations.len());
        }}

        timeit! {core.timers => "search"; {
            search.explore(&mut state);
        }}

        core.info.steps = search.steps;

        let status = match search.best {
            Some(edges) => {
                core.solution.edges = edges;
                core.solution.total_weight = search.best_weight;
                SolverStatus::Solved
            }
            None => {
                core.solution.total_weight = W::max_value();
                if core.stations.is_empty() {
                    SolverStatus::EmptyNetwork
                } else if search.overflowed {
                    SolverStatus::WeightOverflow
                } else {
                    SolverStatus::Disconnected
                }
            }
        };
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

impl_print_target!(BacktrackingSolver);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ConfigurablePrintTarget;

    fn quiet() -> BacktrackingSolver<u32> {
        let mut solver = BacktrackingSolver::new(SolverSettings {
            verbose: false,
            ..SolverSettings::default()
        });
        solver.print_to_sink();
        solver
    }

    #[test]
    fn test_triangle() {
        let edges = [Edge::new(0, 1, 4), Edge::new(1, 2, 2), Edge::new(0, 2, 5)];
        let mut solver = quiet();
        let mut tree = solver.solve(&edges).to_vec();
        tree.sort_by(Edge::cmp_weight);

        assert_eq!(tree, vec![Edge::new(1, 2, 2), Edge::new(0, 1, 4)]);
        assert_eq!(solver.total_weight(), Some(6));
        assert_eq!(solver.solution().status, SolverStatus::Solved);
    }

    #[test]
    fn test_step_metric_counts_visited_nodes() {
        // a single edge: root, include leaf, exclude leaf
        let mut solver = quiet();
        solver.solve(&[Edge::new(0, 1, 3)]);
        assert_eq!(solver.step_metric(), 3);
        assert_eq!(solver.total_weight(), Some(3));

        // two parallel edges of equal weight.  With the first edge taken the
        // second closes a cycle; without it the second fails the strict
        // bound 0 + 3 < 3.  Nodes: root, include e0, exclude e1 (leaf),
        // exclude e0, exclude e1 (leaf).
        solver.solve(&[Edge::new(0, 1, 3), Edge::new(0, 1, 3)]);
        assert_eq!(solver.step_metric(), 5);
        assert_eq!(solver.solution().edges, vec![Edge::new(0, 1, 3)]);
    }

    #[test]
    fn test_lighter_tree_found_later_replaces_best() {
        let edges = [Edge::new(0, 1, 5), Edge::new(0, 1, 2)];
        let mut solver = quiet();
        solver.solve(&edges);
        assert_eq!(solver.solution().edges, vec![Edge::new(0, 1, 2)]);
        assert_eq!(solver.total_weight(), Some(2));
    }

    #[test]
    fn test_disconnected_returns_sentinel() {
        let edges = [Edge::new(0, 1, 1), Edge::new(2, 3, 1)];
        let mut solver = quiet();
        assert!(solver.solve(&edges).is_empty());
        assert_eq!(solver.solution().status, SolverStatus::Disconnected);
        assert_eq!(solver.solution().total_weight, u32::MAX);
        assert_eq!(solver.total_weight(), None);
    }

    #[test]
    fn test_empty_network() {
        let mut solver = quiet();
        assert!(solver.solve(&[]).is_empty());
        assert_eq!(solver.solution().status, SolverStatus::EmptyNetwork);
        // the root is still visited
        assert_eq!(solver.step_metric(), 1);
    }

    #[test]
    fn test_tree_at_weight_limit() {
        // the only tree weighs exactly u8::MAX
        let edges = [Edge::new(0, 1, 200u8), Edge::new(1, 2, 55)];
        let mut solver = BacktrackingSolver::<u8>::new(SolverSettings {
            verbose: false,
            ..SolverSettings::default()
        });
        solver.solve(&edges);
        assert_eq!(solver.solution().status, SolverStatus::Solved);
        assert_eq!(solver.total_weight(), Some(u8::MAX));

        solver.solve(&[Edge::new(0, 1, u8::MAX)]);
        assert_eq!(solver.total_weight(), Some(u8::MAX));
    }

    #[test]
    fn test_weight_overflow() {
        let edges = [Edge::new(0, 1, 200u8), Edge::new(1, 2, 100)];
        let mut solver = BacktrackingSolver::<u8>::new(SolverSettings {
            verbose: false,
            ..SolverSettings::default()
        });
        assert!(solver.solve(&edges).is_empty());
        assert_eq!(solver.solution().status, SolverStatus::WeightOverflow);
        assert_eq!(solver.total_weight(), None);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let edges = [Edge::new(0, 1, -5i64), Edge::new(1, 2, 3)];
        let mut solver = BacktrackingSolver::<i64>::new(SolverSettings {
            verbose: false,
            ..SolverSettings::default()
        });
        assert!(solver.solve(&edges).is_empty());
        assert_eq!(solver.solution().status, SolverStatus::NegativeWeight);
        assert_eq!(solver.total_weight(), None);
        assert_eq!(solver.step_metric(), 0);
    }

    #[test]
    fn test_phase_timers() {
        let mut solver = quiet();
        solver.solve(&[Edge::new(0, 1, 4), Edge::new(1, 2, 2)]);
        let solve = solver.timers().elapsed("solve").unwrap();
        assert_eq!(solver.timers().total_time(), solve);
    }

    #[test]
    fn test_single_station() {
        let mut solver = quiet();
        assert!(solver.solve(&[Edge::new(4, 4, 9)]).is_empty());
        assert_eq!(solver.solution().status, SolverStatus::Solved);
        assert_eq!(solver.total_weight(), Some(0));
    }
}
