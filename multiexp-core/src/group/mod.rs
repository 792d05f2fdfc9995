use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign};

use ark_ff::Field;
use ark_std::One;

pub mod ark;
pub mod normalize;
#[cfg(test)]
pub(crate) mod z13;

pub use normalize::{batch_to_special, batch_to_special_all_non_zeros};

/// Per-element normalization factor, e.g. the projective `z` coordinate.
pub trait Invertible: Copy + Send + Sync + Mul<Output = Self> + MulAssign {
    fn one() -> Self;

    /// `None` iff the value is zero.
    fn inverse(&self) -> Option<Self>;
}

impl<F: Field> Invertible for F {
    #[inline]
    fn one() -> Self {
        <F as One>::one()
    }

    #[inline]
    fn inverse(&self) -> Option<Self> {
        Field::inverse(self)
    }
}

/// Group elements an MSM can be evaluated over.
///
/// An element is held either in a *general* representation or a *special* one
/// (e.g. affine coordinates inside a projective type). Adding a special element
/// to a general one with [`MultiExpGroup::mixed_add`] is cheaper than `+`. The
/// identity always counts as special. `==` compares group values, never the
/// representation.
pub trait MultiExpGroup:
    Copy + Eq + Debug + Send + Sync + Add<Output = Self> + AddAssign
{
    type Factor: Invertible;

    /// Thresholds on the number of scalars for each fixed-base window width:
    /// entry `i` is the smallest batch for which width `i + 1` pays off, `0`
    /// meaning "never". Empty means the cost model decides.
    const FIXED_BASE_EXP_WINDOW_TABLE: &'static [usize] = &[];

    fn zero() -> Self;

    fn is_zero(&self) -> bool;

    fn double(&self) -> Self;

    /// `self + other`, where `other` must be special. Passing a general
    /// `other` is a logic error with an unspecified result.
    fn mixed_add(&self, other: &Self) -> Self;

    fn is_special(&self) -> bool;

    fn to_special(&mut self);

    /// The value whose inverse [`MultiExpGroup::to_special_with_inverse`]
    /// consumes. Must be invertible for every non-identity element.
    fn normalization_factor(&self) -> Self::Factor;

    fn to_special_with_inverse(&mut self, factor_inv: &Self::Factor);
}
