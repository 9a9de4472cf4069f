use crate::algebra::*;
use crate::graph::Edge;
use crate::solver::core::DisjointSet;

/// Mutable state of the backtracking search.
///
/// Created once per solve and mutated in place along the recursion.
/// Including an edge hands back a snapshot of the connectivity taken
/// before the union; passing it to [`undo`](SearchState::undo) rewinds the
/// state exactly.
#[derive(Debug, Clone)]
pub struct SearchState<W> {
    position: usize,
    accumulated_weight: W,
    partial_solution: Vec<Edge<W>>,
    connectivity: DisjointSet,
}

impl<W> SearchState<W>
where
    W: WeightT,
{
    pub fn new(nstations: usize) -> Self {
        Self {
            position: 0,
            accumulated_weight: W::zero(),
            partial_solution: Vec::new(),
            connectivity: DisjointSet::new(nstations),
        }
    }

    /// Index of the next candidate to decide on.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    pub fn accumulated_weight(&self) -> W {
        self.accumulated_weight
    }

    pub fn partial_solution(&self) -> &[Edge<W>] {
        &self.partial_solution
    }

    pub fn connectivity(&self) -> &DisjointSet {
        &self.connectivity
    }

    /// True if stations `a` and `b` are in different components.
    pub fn joins_components(&mut self, a: usize, b: usize) -> bool {
        !self.connectivity.in_same_set(a, b)
    }

    /// Accept `edge` joining stations `a` and `b` and move to the next
    /// candidate.  Returns the connectivity as it was before the union.
    pub fn include(&mut self, edge: Edge<W>, (a, b): (usize, usize), weight: W) -> DisjointSet {
        let snapshot = self.connectivity.clone();
        self.connectivity.union(a, b);
        self.partial_solution.push(edge);
        self.accumulated_weight = weight;
        self.position += 1;
        snapshot
    }

    /// Reverse the most recent [`include`](SearchState::include).
    pub fn undo(&mut self, snapshot: DisjointSet, position: usize, weight: W) {
        self.connectivity = snapshot;
        self.partial_solution.pop();
        self.position = position;
        self.accumulated_weight = weight;
    }
}
