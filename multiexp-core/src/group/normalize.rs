use itertools::zip_eq;

use super::{Invertible, MultiExpGroup};
use crate::utils::par_batch_inverse;

/// Converts every element to special form, sharing one inversion per block
/// of elements.
///
/// The caller guarantees that no element is the identity; the result is
/// unspecified otherwise (in practice the batch inversion panics).
#[tracing::instrument(skip_all, fields(n = vec.len()))]
pub fn batch_to_special_all_non_zeros<G: MultiExpGroup>(vec: &mut [G]) {
    normalize_all(vec.iter_mut().collect());
}

/// Converts every element to special form. Identity elements stay the
/// identity; elements that are already special are left untouched.
#[tracing::instrument(skip_all, fields(n = vec.len()))]
pub fn batch_to_special<G: MultiExpGroup>(vec: &mut [G]) {
    let mut general = Vec::new();
    for g in vec.iter_mut() {
        if g.is_zero() {
            g.to_special();
        } else if !g.is_special() {
            general.push(g);
        }
    }
    tracing::trace!(general = general.len(), "normalizing");
    if !general.is_empty() {
        normalize_all(general);
    }
}

fn normalize_all<G: MultiExpGroup>(elements: Vec<&mut G>) {
    let factors: Vec<G::Factor> = elements.iter().map(|g| g.normalization_factor()).collect();
    let mut factor_invs = vec![<G::Factor as Invertible>::one(); factors.len()];
    par_batch_inverse(&factors, &mut factor_invs);
    zip_eq(elements, &factor_invs).for_each(|(g, factor_inv)| g.to_special_with_inverse(factor_inv));
}
