//! Fixed-base exponentiation with precomputed window tables.
//!
//! Row `i` of a table holds `d · 2^(window·i) · g` for every nonzero digit
//! `d < 2^window`, so evaluating a scalar costs one addition per nonzero
//! digit and no doublings.

use rayon::prelude::*;

use super::AdditionMode;
use crate::field::{MultiExpScalar, ScalarBits};
use crate::group::{batch_to_special, MultiExpGroup};
use crate::utils::math::Math;

/// `table[i][d - 1] = d · 2^(window·i) · g`.
pub type WindowTable<G> = Vec<Vec<G>>;

/// Widest window the cost model considers.
pub const MAX_EXP_WINDOW: usize = 22;

// Relative cost of a group addition and a doubling.
const ADDITION_COST: u128 = 4;
const DOUBLING_COST: u128 = 3;

/// Estimated group-operation cost of building a table of width `window` and
/// evaluating `num_scalars` scalars against it.
fn fixed_base_cost(scalar_size: usize, window: usize, num_scalars: usize) -> u128 {
    let rows = scalar_size.div_ceil(window) as u128;
    let table = rows * ((window.pow2() as u128 - 1) * ADDITION_COST + window as u128 * DOUBLING_COST);
    table + num_scalars as u128 * rows * ADDITION_COST
}

/// Smallest window width minimizing [`fixed_base_cost`]. Non-decreasing in
/// `num_scalars`; `1` when there is nothing to evaluate.
pub fn exp_window_size_for(scalar_size: usize, num_scalars: usize) -> usize {
    let scalar_size = scalar_size.max(1);
    let mut best_window = 1;
    let mut best_cost = fixed_base_cost(scalar_size, 1, num_scalars);
    for window in 2..=MAX_EXP_WINDOW {
        let cost = fixed_base_cost(scalar_size, window, num_scalars);
        if cost < best_cost {
            best_window = window;
            best_cost = cost;
        }
    }
    best_window
}

/// Largest `i + 1` whose threshold `table[i]` is set and reached.
pub fn window_size_from_table(table: &[usize], num_scalars: usize) -> usize {
    table
        .iter()
        .enumerate()
        .rev()
        .find(|(_, &threshold)| threshold != 0 && num_scalars >= threshold)
        .map_or(1, |(i, _)| i + 1)
}

/// Window width for `num_scalars` fixed-base exponentiations in `G` with
/// scalars of type `F`. Uses `G::FIXED_BASE_EXP_WINDOW_TABLE` when the group
/// provides one.
pub fn exp_window_size<G: MultiExpGroup, F: MultiExpScalar>(num_scalars: usize) -> usize {
    let table = G::FIXED_BASE_EXP_WINDOW_TABLE;
    if table.is_empty() {
        exp_window_size_for(F::NUM_BITS, num_scalars)
    } else {
        window_size_from_table(table, num_scalars)
    }
}

fn assert_window(window: usize) {
    assert!(
        window > 0 && window < usize::BITS as usize,
        "window must be in [1, {}), got {window}",
        usize::BITS
    );
}

/// Builds the `ceil(scalar_size / window)`-row table for `g`.
///
/// # Panics
///
/// Panics if `window` is `0` or not smaller than the bit width of `usize`.
#[tracing::instrument(skip_all, fields(scalar_size, window))]
pub fn get_window_table<G: MultiExpGroup>(
    scalar_size: usize,
    window: usize,
    g: G,
) -> WindowTable<G> {
    assert_window(window);
    let in_window = window.pow2();
    let outerc = scalar_size.div_ceil(window);

    // g_outers = [2^{outer * window} g for outer in 0..outerc]
    let mut g_outers = Vec::with_capacity(outerc);
    let mut g_outer = g;
    for _ in 0..outerc {
        g_outers.push(g_outer);
        for _ in 0..window {
            g_outer = g_outer.double();
        }
    }

    g_outers
        .into_par_iter()
        .map(|g_outer| {
            let mut row = Vec::with_capacity(in_window - 1);
            let mut g_inner = g_outer;
            for _ in 1..in_window {
                row.push(g_inner);
                g_inner += g_outer;
            }
            row
        })
        .collect()
}

/// `pow · g` from the table of `g`.
///
/// # Panics
///
/// Panics on an invalid `window` or a table with fewer than
/// `ceil(scalar_size / window)` rows.
pub fn windowed_exp<G: MultiExpGroup, F: MultiExpScalar>(
    scalar_size: usize,
    window: usize,
    powers_of_g: &[Vec<G>],
    pow: &F,
) -> G {
    assert_window(window);
    let outerc = scalar_size.div_ceil(window);
    assert!(
        powers_of_g.len() >= outerc,
        "window table has {} rows, {outerc} required",
        powers_of_g.len()
    );

    let pow = pow.to_repr();
    powers_of_g
        .iter()
        .take(outerc)
        .enumerate()
        .fold(G::zero(), |res, (outer, row)| {
            match pow.window_digit(window, outer) {
                0 => res,
                digit => AdditionMode::Mixed.add(&res, &row[digit - 1]),
            }
        })
}

/// [`windowed_exp`] for every scalar in `v`, in parallel.
#[tracing::instrument(skip_all, fields(num_scalars = v.len()))]
pub fn batch_exp<G: MultiExpGroup, F: MultiExpScalar>(
    scalar_size: usize,
    window: usize,
    table: &[Vec<G>],
    v: &[F],
) -> Vec<G> {
    v.par_iter()
        .map(|pow| windowed_exp(scalar_size, window, table, pow))
        .collect()
}

/// [`batch_exp`] on `coeff · v[i]`.
#[tracing::instrument(skip_all, fields(num_scalars = v.len()))]
pub fn batch_exp_with_coeff<G: MultiExpGroup, F: MultiExpScalar>(
    scalar_size: usize,
    window: usize,
    table: &[Vec<G>],
    coeff: &F,
    v: &[F],
) -> Vec<G> {
    v.par_iter()
        .map(|pow| windowed_exp(scalar_size, window, table, &(*coeff * *pow)))
        .collect()
}

/// `[s · g for s in scalars]` in special form: picks the window, builds and
/// normalizes the table, evaluates every scalar and normalizes the outputs.
#[tracing::instrument(skip_all, fields(num_scalars = scalars.len()))]
pub fn fixed_base_exp<G: MultiExpGroup, F: MultiExpScalar>(g: G, scalars: &[F]) -> Vec<G> {
    let window = exp_window_size::<G, F>(scalars.len());
    let scalar_size = F::NUM_BITS;
    tracing::debug!(window, scalar_size, "fixed-base window");

    let mut table = get_window_table(scalar_size, window, g);
    table.par_iter_mut().for_each(|row| batch_to_special(row));

    let mut res = batch_exp(scalar_size, window, &table, scalars);
    batch_to_special(&mut res);
    res
}
