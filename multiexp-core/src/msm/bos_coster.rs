//! Bos-Coster multi-exponentiation.
//!
//! Repeatedly takes the two largest scalars `x >= y` with bases `A`, `B` and
//! rewrites `x·A + y·B` as `(x - y)·A + y·(A + B)`, which costs one group
//! addition per step. See Bos and Coster, "Addition chain heuristics",
//! CRYPTO '89, and Bernstein et al., "High-speed high-security signatures",
//! CHES '11.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::naive::double_and_add;
use super::AdditionMode;
use crate::field::{MultiExpScalar, ScalarBits};
use crate::group::MultiExpGroup;

/// Cap on the bit gap the direct-exponentiation rule considers.
pub const DIRECT_EXP_BIT_GAP: usize = 20;

/// Whether `x` (the largest scalar) should be exponentiated directly instead
/// of reduced by `y` (the runner-up).
///
/// Reducing across a gap of `k` bits takes about `2^k` subtractions, which
/// loses to one double-and-add as soon as `2^k` exceeds `bits(y)`.
#[inline]
fn prefer_direct_exp<R: ScalarBits>(x: &R, y: &R) -> bool {
    let (xbits, ybits) = (x.num_bits(), y.num_bits());
    let limit = DIRECT_EXP_BIT_GAP.min(xbits - ybits);
    ybits < 1usize << limit
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OrderedExponent<R> {
    scalar: R,
    index: usize,
}

// Ties on the scalar go to the higher index.
impl<R: Ord> Ord for OrderedExponent<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.scalar
            .cmp(&other.scalar)
            .then(self.index.cmp(&other.index))
    }
}

impl<R: Ord> PartialOrd for OrderedExponent<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `Σ scalars[i] · bases[i]` on a single thread with the Bos-Coster heap.
///
/// With [`AdditionMode::Mixed`] every addition whose right-hand operand is
/// still special uses [`MultiExpGroup::mixed_add`].
///
/// # Panics
///
/// Panics if `bases` and `scalars` have different lengths.
pub fn multi_exp_inner<G: MultiExpGroup, F: MultiExpScalar>(
    bases: &[G],
    scalars: &[F],
    mode: AdditionMode,
) -> G {
    assert_eq!(bases.len(), scalars.len(), "bases and scalars must have equal length");

    let mut heap = BinaryHeap::with_capacity(bases.len());
    let mut g = Vec::with_capacity(bases.len());
    for (base, scalar) in bases.iter().zip(scalars) {
        let scalar = scalar.to_repr();
        if scalar.is_zero() || base.is_zero() {
            continue;
        }
        heap.push(OrderedExponent {
            scalar,
            index: g.len(),
        });
        g.push(*base);
    }

    let mut result = G::zero();
    let mut num_additions = 0usize;
    let mut num_direct_exps = 0usize;

    while let Some(mut a) = heap.pop() {
        let Some(b) = heap.peek() else {
            result += double_and_add(&g[a.index], &a.scalar, mode);
            num_direct_exps += 1;
            break;
        };

        if prefer_direct_exp(&a.scalar, &b.scalar) {
            result += double_and_add(&g[a.index], &a.scalar, mode);
            num_direct_exps += 1;
            continue;
        }

        // x A + y B => (x - y) A + y (A + B)
        g[b.index] = mode.add(&g[b.index], &g[a.index]);
        a.scalar.sub_assign_smaller(&b.scalar);
        num_additions += 1;

        if a.scalar.is_zero() {
            continue;
        }
        if a.scalar.is_one() {
            result = mode.add(&result, &g[a.index]);
            num_additions += 1;
            continue;
        }
        heap.push(a);
    }

    tracing::trace!(
        n = bases.len(),
        num_additions,
        num_direct_exps,
        "bos-coster reduction done"
    );
    result
}
