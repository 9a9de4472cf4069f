//! Input and output for tunnel networks and solver reports.
//!
//! - [`PrintTarget`] and [`ConfigurablePrintTarget`] route verbose solver
//!   output and reports to stdout, a file, an arbitrary stream, an
//!   in-memory buffer, or nowhere.
//! - [`read_edge_list`] parses the `;`-delimited edge list format.
//! - With the `serde` feature, networks and settings can be stored as JSON.

mod edgelist;
#[cfg(feature = "serde")]
mod json;
mod print_target;

pub use edgelist::*;
#[cfg(feature = "serde")]
pub use json::*;
pub use print_target::*;
