use super::SolverStatus;
use crate::algebra::*;
use crate::graph::Edge;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Result of a spanning tree solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "W: Serialize + DeserializeOwned"))]
pub struct SpanningSolution<W> {
    /// accepted tunnels, in acceptance order
    pub edges: Vec<Edge<W>>,
    /// sum of the accepted tunnel weights.  Holds `W::max_value()` when a
    /// backtracking search finds no spanning tree.
    pub total_weight: W,
    /// final solver status
    pub status: SolverStatus,
    /// step metric: number of decisions evaluated
    pub steps: u64,
    /// solve time in seconds
    pub solve_time: f64,
}

impl<W> SpanningSolution<W>
where
    W: WeightT,
{
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: W::zero(),
            status: SolverStatus::Unsolved,
            steps: 0,
            solve_time: 0f64,
        }
    }

    /// The spanning tree, if one was found.
    pub fn spanning_tree(&self) -> Option<&[Edge<W>]> {
        self.status.is_solved().then_some(self.edges.as_slice())
    }

    /// Weight of the spanning tree, if one was found.
    pub fn weight(&self) -> Option<W> {
        self.status.is_solved().then_some(self.total_weight)
    }
}

impl<W> Default for SpanningSolution<W>
where
    W: WeightT,
{
    fn default() -> Self {
        Self::new()
    }
}

#[test]
fn test_optional_results() {
    let mut solution = SpanningSolution::<u32>::new();
    solution.edges.push(Edge::new(0, 1, 3));
    solution.total_weight = 3;
    assert_eq!(solution.weight(), None);
    assert!(solution.spanning_tree().is_none());

    solution.status = SolverStatus::Solved;
    assert_eq!(solution.weight(), Some(3));
    assert_eq!(solution.spanning_tree().unwrap().len(), 1);
}
