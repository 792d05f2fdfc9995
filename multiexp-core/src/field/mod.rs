use std::fmt::Debug;
use std::ops::Mul;

pub mod ark;

/// Canonical little-endian integer view of a scalar.
///
/// Ordering is by magnitude, which is what the Bos-Coster heap keys on.
pub trait ScalarBits: Copy + Ord + Debug + Send + Sync {
    fn is_zero(&self) -> bool;

    fn is_one(&self) -> bool;

    /// Index of the highest set bit plus one; `0` for zero.
    fn num_bits(&self) -> usize;

    /// Bits past the width of the representation read as `false`.
    fn get_bit(&self, i: usize) -> bool;

    /// `self -= other`. The caller guarantees `other <= self`.
    fn sub_assign_smaller(&mut self, other: &Self);

    /// The `row`-th little-endian digit of width `window`, i.e.
    /// bits `[window * row, window * (row + 1))`.
    fn window_digit(&self, window: usize, row: usize) -> usize {
        debug_assert!(window > 0 && window < usize::BITS as usize);
        let start = window * row;
        (0..window).rev().fold(0usize, |digit, i| {
            (digit << 1) | self.get_bit(start + i) as usize
        })
    }
}

/// Scalars an MSM can be evaluated against.
pub trait MultiExpScalar: Copy + PartialEq + Debug + Send + Sync + Mul<Output = Self> {
    type Repr: ScalarBits;

    /// Bit length of the largest scalar; the default `scalar_size` for
    /// fixed-base tables.
    const NUM_BITS: usize;

    fn to_repr(&self) -> Self::Repr;
}

impl ScalarBits for u64 {
    #[inline]
    fn is_zero(&self) -> bool {
        *self == 0
    }

    #[inline]
    fn is_one(&self) -> bool {
        *self == 1
    }

    #[inline]
    fn num_bits(&self) -> usize {
        (u64::BITS - self.leading_zeros()) as usize
    }

    #[inline]
    fn get_bit(&self, i: usize) -> bool {
        i < 64 && (*self >> i) & 1 == 1
    }

    #[inline]
    fn sub_assign_smaller(&mut self, other: &Self) {
        debug_assert!(*other <= *self);
        *self -= *other;
    }

    #[inline]
    fn window_digit(&self, window: usize, row: usize) -> usize {
        debug_assert!(window > 0 && window < 64);
        let start = window * row;
        if start >= 64 {
            return 0;
        }
        ((*self >> start) & ((1u64 << window) - 1)) as usize
    }
}
