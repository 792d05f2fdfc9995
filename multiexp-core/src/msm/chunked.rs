use std::ops::Range;

use rayon::prelude::*;

use super::{multi_exp_inner, naive_exp, AdditionMode};
use crate::field::{MultiExpScalar, ScalarBits};
use crate::group::MultiExpGroup;

/// Splits `[0, n)` into `chunks` contiguous ranges of `n / chunks` elements;
/// the last range absorbs the remainder.
///
/// # Panics
///
/// Panics if `chunks == 0`.
pub fn chunk_ranges(n: usize, chunks: usize) -> Vec<Range<usize>> {
    assert!(chunks > 0, "chunks must be positive");
    let one = n / chunks;
    (0..chunks)
        .map(|i| {
            let end = if i == chunks - 1 { n } else { (i + 1) * one };
            i * one..end
        })
        .collect()
}

/// `Σ scalars[i] · bases[i]`.
///
/// The input is split into `chunks` ranges evaluated in parallel, with the
/// Bos-Coster heuristic when `use_multiexp` is set and with [`naive_exp`]
/// otherwise; the partial sums are then added up.
///
/// # Panics
///
/// Panics if the lengths differ or `chunks == 0`.
#[tracing::instrument(skip_all, fields(n = bases.len(), chunks, use_multiexp))]
pub fn multi_exp<G: MultiExpGroup, F: MultiExpScalar>(
    bases: &[G],
    scalars: &[F],
    chunks: usize,
    use_multiexp: bool,
) -> G {
    chunked_multi_exp(bases, scalars, chunks, use_multiexp, AdditionMode::Plain)
}

/// Variant of [`multi_exp`] built around [`MultiExpGroup::mixed_add`].
///
/// Zero scalars are skipped and bases with scalar one are folded in with a
/// single mixed addition each; the rest goes through the chunked evaluation
/// with mixed additions enabled. Bases are expected in special form, e.g.
/// after [`crate::group::batch_to_special`]; general bases are still correct
/// but fall back to `+`.
///
/// # Panics
///
/// Panics if the lengths differ or `chunks == 0`.
#[tracing::instrument(skip_all, fields(n = bases.len(), chunks, use_multiexp))]
pub fn multi_exp_with_mixed_addition<G: MultiExpGroup, F: MultiExpScalar>(
    bases: &[G],
    scalars: &[F],
    chunks: usize,
    use_multiexp: bool,
) -> G {
    assert_eq!(bases.len(), scalars.len(), "bases and scalars must have equal length");

    let span = tracing::span!(tracing::Level::DEBUG, "process_scalar_vector");
    let _guard = span.enter();
    let mut acc = G::zero();
    let mut p = Vec::new();
    let mut g = Vec::new();
    let mut num_skip = 0usize;
    let mut num_add = 0usize;
    for (base, scalar) in bases.iter().zip(scalars) {
        let repr = scalar.to_repr();
        if repr.is_zero() {
            num_skip += 1;
        } else if repr.is_one() {
            acc = AdditionMode::Mixed.add(&acc, base);
            num_add += 1;
        } else {
            p.push(*scalar);
            g.push(*base);
        }
    }
    tracing::debug!(num_skip, num_add, num_other = p.len(), "processed scalar vector");
    drop(_guard);
    drop(span);

    acc + chunked_multi_exp(&g, &p, chunks, use_multiexp, AdditionMode::Mixed)
}

fn chunked_multi_exp<G: MultiExpGroup, F: MultiExpScalar>(
    bases: &[G],
    scalars: &[F],
    chunks: usize,
    use_multiexp: bool,
    mode: AdditionMode,
) -> G {
    assert_eq!(bases.len(), scalars.len(), "bases and scalars must have equal length");
    assert!(chunks > 0, "chunks must be positive");

    let run = |range: Range<usize>| {
        if use_multiexp {
            multi_exp_inner(&bases[range.clone()], &scalars[range], mode)
        } else {
            naive_exp(&bases[range.clone()], &scalars[range])
        }
    };

    let total = bases.len();
    if chunks == 1 || total < chunks {
        return run(0..total);
    }

    chunk_ranges(total, chunks)
        .into_par_iter()
        .map(run)
        .reduce(G::zero, |a, b| a + b)
}
