//! Tunnel network data model.
//!
//! A network is supplied to the solvers as an ordered list of [`Edge`]
//! values.  The set of stations is never given explicitly; it is derived
//! from the edge list by [`StationIndex`].

mod edge;
mod stations;

pub use edge::*;
pub use stations::*;
