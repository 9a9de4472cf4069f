//! __railspan__ computes minimum spanning trees over networks of stations
//! joined by weighted tunnels.
//!
//! Two independent strategies are provided:
//!
//! * __Greedy__: a Kruskal-style scan of the candidate tunnels in order of
//!   increasing weight, accepting each tunnel that joins two components.
//!
//! * __Backtracking__: an exhaustive include/exclude search over the
//!   candidates, pruned by cycle avoidance and by a bound against the best
//!   complete tree found so far.
//!
//! Both report the tree they found, its total weight and a step metric
//! counting the decisions they evaluated, so their cost can be compared
//! empirically.
//!
//! # Example
//!
//! ```
//! use railspan::graph::Edge;
//! use railspan::solver::*;
//!
//! let tunnels = [Edge::new(0, 1, 4u32), Edge::new(1, 2, 2), Edge::new(0, 2, 5)];
//! let settings = SolverSettingsBuilder::default().verbose(false).build().unwrap();
//!
//! for mut solver in SupportedSolver::all(&settings) {
//!     solver.solve(&tunnels);
//!     assert_eq!(solver.total_weight(), Some(6));
//! }
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod graph;
pub mod io;
pub mod solver;
pub mod timers;
