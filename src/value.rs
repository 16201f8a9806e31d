use std::fmt::Debug;
use std::hash::Hash;

use num::ToPrimitive;

pub type Weight = f64;

pub type DefaultFace = i32;

/// Anything that can sit on a die: comparable, hashable and cheap enough to clone
/// into result tables.
pub trait Face: Sized + Send + Sync + Debug + Clone + Eq + Hash + Ord {}

impl<T> Face for T where T: Sized + Send + Sync + Debug + Clone + Eq + Hash + Ord {}

/// Converts a caller supplied weight into a finite `f64`.
///
/// `None` means the value has no numeric meaning as a weight (not representable,
/// NaN or infinite). Sign is checked by the caller.
pub(crate) fn to_weight<W>(value: W) -> Option<Weight>
where
    W: ToPrimitive,
{
    value.to_f64().filter(|w| w.is_finite())
}
