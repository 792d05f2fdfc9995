use crate::group::Invertible;
use rayon::prelude::*;
use std::iter::zip;

const PAR_BLOCK_SIZE: usize = 4096;

/// Inverses all `src` values into `dst` using Montgomery batch inversion.
///
/// # Panics
///
/// Panics if the lengths differ or if one of the values is zero.
pub fn batch_inverse<F: Invertible>(src: &[F], dst: &mut [F]) {
    assert_eq!(src.len(), dst.len());
    let mut acc = F::one();
    zip(src, &mut *dst).for_each(|(src_v, dst_v)| {
        *dst_v = acc;
        acc *= *src_v;
    });
    let mut acc_inv = acc
        .inverse()
        .expect("batch inversion of a zero element");
    zip(src, &mut *dst).rev().for_each(|(src_v, dst_v)| {
        *dst_v = acc_inv * *dst_v;
        acc_inv *= *src_v;
    });
}

/// Same as [`batch_inverse`], one inversion per block of 4096 elements with
/// blocks processed in parallel.
pub fn par_batch_inverse<F: Invertible>(src: &[F], dst: &mut [F]) {
    assert_eq!(src.len(), dst.len());
    (src.par_chunks(PAR_BLOCK_SIZE), dst.par_chunks_mut(PAR_BLOCK_SIZE))
        .into_par_iter()
        .for_each(|(src_chunk, dst_chunk)| batch_inverse(src_chunk, dst_chunk));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_ff::{AdditiveGroup, Field};
    use ark_std::{test_rng, UniformRand};
    use std::array;

    #[test]
    fn test_batch_inverse() {
        let vals: [Fr; 10] = array::from_fn(|i| Fr::from(i as i32 + 1));

        let mut inv_vals = [Fr::ZERO; 10];
        batch_inverse(&vals, &mut inv_vals);

        assert_eq!(inv_vals, vals.map(|v| Field::inverse(&v).unwrap()));
    }

    #[test]
    fn test_par_batch_inverse() {
        let mut rng = test_rng();
        let vals: Vec<Fr> = (0..(2 * PAR_BLOCK_SIZE + 17))
            .map(|_| Fr::rand(&mut rng))
            .collect();

        let mut inv_vals = vec![Fr::ZERO; vals.len()];
        par_batch_inverse(&vals, &mut inv_vals);

        for (v, inv) in vals.iter().zip(&inv_vals) {
            assert_eq!(*v * inv, Fr::ONE);
        }
    }

    #[test]
    fn test_empty_batch() {
        let mut dst: [Fr; 0] = [];
        batch_inverse::<Fr>(&[], &mut dst);
    }

    #[test]
    #[should_panic]
    fn test_zero_panics() {
        let vals = [Fr::from(3u64), Fr::ZERO];
        let mut dst = [Fr::ZERO; 2];
        batch_inverse(&vals, &mut dst);
    }
}
