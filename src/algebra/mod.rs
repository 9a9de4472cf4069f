//! Numeric traits for tunnel weights.
//!
//! Solvers in this crate are generic over the weight type of the tunnels
//! they connect.  Any type implementing [`WeightT`] can be used; blanket
//! implementations cover the primitive integer types.

mod weights;
pub use weights::*;
