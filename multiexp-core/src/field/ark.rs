use ark_ff::{BigInt, BigInteger, PrimeField};

use super::{MultiExpScalar, ScalarBits};

impl<F: PrimeField> MultiExpScalar for F
where
    F::BigInt: ScalarBits,
{
    type Repr = F::BigInt;

    const NUM_BITS: usize = F::MODULUS_BIT_SIZE as usize;

    #[inline]
    fn to_repr(&self) -> Self::Repr {
        self.into_bigint()
    }
}

impl<const N: usize> ScalarBits for BigInt<N> {
    #[inline]
    fn is_zero(&self) -> bool {
        BigInteger::is_zero(self)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0[0] == 1 && self.0[1..].iter().all(|limb| *limb == 0)
    }

    #[inline]
    fn num_bits(&self) -> usize {
        BigInteger::num_bits(self) as usize
    }

    #[inline]
    fn get_bit(&self, i: usize) -> bool {
        i < 64 * N && BigInteger::get_bit(self, i)
    }

    #[inline]
    fn sub_assign_smaller(&mut self, other: &Self) {
        let borrow = self.sub_with_borrow(other);
        debug_assert!(!borrow, "subtrahend larger than minuend");
    }

    fn window_digit(&self, window: usize, row: usize) -> usize {
        debug_assert!(window > 0 && window < 64);
        let bit_offset = window * row;
        let limb_idx = bit_offset / 64;
        let bit_idx = bit_offset % 64;
        if limb_idx >= N {
            return 0;
        }
        // The window may straddle two limbs.
        let mut bit_buf = self.0[limb_idx] >> bit_idx;
        if bit_idx + window > 64 && limb_idx + 1 < N {
            bit_buf |= self.0[limb_idx + 1] << (64 - bit_idx);
        }
        (bit_buf & ((1u64 << window) - 1)) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_std::{test_rng, UniformRand};

    fn digit_from_bits(x: &BigInt<4>, window: usize, row: usize) -> usize {
        let start = window * row;
        (0..window)
            .rev()
            .fold(0usize, |d, i| (d << 1) | ScalarBits::get_bit(x, start + i) as usize)
    }

    #[test]
    fn digits_across_limb_boundaries() {
        let mut rng = test_rng();
        for _ in 0..20 {
            let x = Fr::rand(&mut rng).to_repr();
            for window in [1, 3, 5, 7, 13, 17, 63] {
                let rows = <Fr as MultiExpScalar>::NUM_BITS.div_ceil(window) + 1;
                for row in 0..rows {
                    assert_eq!(x.window_digit(window, row), digit_from_bits(&x, window, row));
                }
            }
        }
    }

    #[test]
    fn ordering_and_subtraction() {
        let mut a = Fr::from(1u64 << 40).to_repr();
        let b = Fr::from(3u64).to_repr();
        assert!(a > b);
        a.sub_assign_smaller(&b);
        assert_eq!(a, Fr::from((1u64 << 40) - 3).to_repr());
        assert!(Fr::from(1u64).to_repr().is_one());
        assert!(!Fr::from(1u64 << 63).to_repr().is_one());
        assert!(ScalarBits::is_zero(&Fr::from(0u64).to_repr()));
        assert_eq!(ScalarBits::num_bits(&b), 2);
    }

    #[test]
    fn num_bits_matches_modulus() {
        assert_eq!(<Fr as MultiExpScalar>::NUM_BITS, 254);
    }
}
