use num_traits::{Bounded, CheckedAdd, FromPrimitive, Num, NumAssign};
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// Core traits for tunnel weights.
///
/// Weights must be totally ordered so that candidate tunnels can be
/// sorted and compared against the best known network.  The maximum
/// representable value doubles as the "no solution" sentinel of the
/// backtracking search, and sums are accumulated with checked addition.
///
/// `WeightT` relies on [`num_traits`](num_traits) for most of its
/// constituent trait bounds.
pub trait WeightT:
    'static
    + Send
    + Sync
    + Copy
    + Num
    + NumAssign
    + CheckedAdd
    + Bounded
    + FromPrimitive
    + FromStr
    + Ord
    + Default
    + Display
    + Debug
    + Sized
{
}

impl<T> WeightT for T where
    T: 'static
        + Send
        + Sync
        + Copy
        + Num
        + NumAssign
        + CheckedAdd
        + Bounded
        + FromPrimitive
        + FromStr
        + Ord
        + Default
        + Display
        + Debug
        + Sized
{
}

/// Sum of a sequence of weights, or `None` if the sum is not representable.
pub fn checked_weight_sum<W, I>(weights: I) -> Option<W>
where
    W: WeightT,
    I: IntoIterator<Item = W>,
{
    weights
        .into_iter()
        .try_fold(W::zero(), |acc, w| acc.checked_add(&w))
}

#[test]
fn test_checked_weight_sum() {
    assert_eq!(checked_weight_sum::<u32, _>([1, 2, 3]), Some(6));
    assert_eq!(checked_weight_sum::<u32, _>([]), Some(0));
    assert_eq!(checked_weight_sum::<u8, _>([200, 100]), None);
}
