use crate::algebra::*;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Integer identifier of a station.
pub type StationId = u32;

/// A weighted tunnel between two stations.
///
/// Edges are stored with an origin and a destination but connectivity is
/// symmetric: the two endpoints are interchangeable when testing component
/// membership.  Equality is structural over all three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "W: Serialize + DeserializeOwned"))]
pub struct Edge<W> {
    pub origin: StationId,
    pub destination: StationId,
    pub weight: W,
}

impl<W> Edge<W>
where
    W: WeightT,
{
    pub fn new(origin: StationId, destination: StationId, weight: W) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }

    /// Order by weight only.  Used for the greedy stable sort, where
    /// ties must keep their input order.
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }

    /// Render the edge as `{prefix}{origin}-{prefix}{destination}`.
    pub fn label(&self, prefix: &str) -> String {
        format!(
            "{}{}-{}{}",
            prefix, self.origin, prefix, self.destination
        )
    }
}

impl<W> From<(StationId, StationId, W)> for Edge<W> {
    fn from((origin, destination, weight): (StationId, StationId, W)) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.origin, self.destination, self.weight)
    }
}

#[test]
fn test_edge_label() {
    let e = Edge::new(3, 12, 7u32);
    assert_eq!(e.label("S"), "S3-S12");
    assert_eq!(e.label("E"), "E3-E12");
    assert_eq!(format!("{}", e), "3 -> 12 (7)");
}

#[test]
fn test_edge_equality_is_structural() {
    let a = Edge::new(0, 1, 4u32);
    assert_eq!(a, Edge::from((0, 1, 4)));
    assert_ne!(a, Edge::new(1, 0, 4));
    assert_ne!(a, Edge::new(0, 1, 5));
}
