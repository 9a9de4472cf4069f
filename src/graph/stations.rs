use super::{Edge, StationId};
use std::collections::HashMap;

/// The station universe of a network, in first-seen order.
///
/// Stations are collected by scanning the edges in order and taking the
/// origin then the destination of each.  The position of a station in
/// this ordering is its index into the connectivity structures used by
/// the solvers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StationIndex {
    ids: Vec<StationId>,
    positions: HashMap<StationId, usize>,
}

impl StationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_edges<W>(edges: &[Edge<W>]) -> Self {
        let mut index = Self::new();
        for edge in edges {
            index.insert(edge.origin);
            index.insert(edge.destination);
        }
        index
    }

    /// Add a station if not yet present and return its index.
    pub fn insert(&mut self, id: StationId) -> usize {
        let next = self.ids.len();
        let ids = &mut self.ids;
        *self.positions.entry(id).or_insert_with(|| {
            ids.push(id);
            next
        })
    }

    /// Connectivity indices of both endpoints of an edge.
    ///
    /// # Panics
    /// If either endpoint is not part of this station universe.
    pub fn endpoints<W>(&self, edge: &Edge<W>) -> (usize, usize) {
        (self.positions[&edge.origin], self.positions[&edge.destination])
    }

    pub fn ids(&self) -> &[StationId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[test]
fn test_first_seen_order() {
    let edges = [
        Edge::new(7, 3, 1u32),
        Edge::new(3, 9, 2),
        Edge::new(1, 7, 3),
    ];
    let index = StationIndex::from_edges(&edges);
    assert_eq!(index.ids(), &[7, 3, 9, 1]);
    assert_eq!(index.endpoints(&edges[2]), (3, 0));
}

#[test]
fn test_insert_is_idempotent() {
    let mut index = StationIndex::new();
    assert_eq!(index.insert(5), 0);
    assert_eq!(index.insert(6), 1);
    assert_eq!(index.insert(5), 0);
    assert_eq!(index.len(), 2);
}
