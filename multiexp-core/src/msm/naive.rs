use super::AdditionMode;
use crate::field::{MultiExpScalar, ScalarBits};
use crate::group::MultiExpGroup;

/// MSB-first double-and-add.
#[inline]
pub(crate) fn double_and_add<G: MultiExpGroup, R: ScalarBits>(
    base: &G,
    scalar: &R,
    mode: AdditionMode,
) -> G {
    let mut result = G::zero();
    for i in (0..scalar.num_bits()).rev() {
        result = result.double();
        if scalar.get_bit(i) {
            result = mode.add(&result, base);
        }
    }
    result
}

/// `scalar · base`, using mixed addition when `base` is special.
pub fn scalar_mul<G: MultiExpGroup, R: ScalarBits>(base: &G, scalar: &R) -> G {
    double_and_add(base, scalar, AdditionMode::Mixed)
}

/// `scalar · base` with the generic `+` only.
pub fn plain_scalar_mul<G: MultiExpGroup, R: ScalarBits>(base: &G, scalar: &R) -> G {
    double_and_add(base, scalar, AdditionMode::Plain)
}

/// Multiplies each base by its scalar and adds up the results.
///
/// # Panics
///
/// Panics if `bases` and `scalars` have different lengths.
pub fn naive_exp<G: MultiExpGroup, F: MultiExpScalar>(bases: &[G], scalars: &[F]) -> G {
    assert_eq!(bases.len(), scalars.len(), "bases and scalars must have equal length");
    bases
        .iter()
        .zip(scalars)
        .fold(G::zero(), |acc, (base, scalar)| {
            acc + scalar_mul(base, &scalar.to_repr())
        })
}

/// [`naive_exp`] restricted to the generic `+` operator; the reference the
/// other algorithms are checked against.
///
/// # Panics
///
/// Panics if `bases` and `scalars` have different lengths.
pub fn naive_plain_exp<G: MultiExpGroup, F: MultiExpScalar>(bases: &[G], scalars: &[F]) -> G {
    assert_eq!(bases.len(), scalars.len(), "bases and scalars must have equal length");
    bases
        .iter()
        .zip(scalars)
        .fold(G::zero(), |acc, (base, scalar)| {
            acc + plain_scalar_mul(base, &scalar.to_repr())
        })
}
