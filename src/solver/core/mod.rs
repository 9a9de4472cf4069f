// package together all of the following and re-export
// in a flattened structure :
// : the solver trait
// : connectivity tracking
// : user settings
// : progress information, printing and results
// : shared solver state

pub mod traits;

mod disjoint_set;
mod info;
mod info_print;
mod settings;
mod solution;
mod solver;

pub use disjoint_set::*;
pub use info::*;
pub use settings::*;
pub use solution::*;
pub use solver::*;
pub(crate) use solver::impl_print_target;
