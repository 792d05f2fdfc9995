//! Integers mod 13 under addition, for tests.
//!
//! Elements are stored as fractions `num / den` so that the special form
//! (`den = 1`) and batch normalization do real work.

use std::ops::{Add, AddAssign, Mul, MulAssign};

use super::{Invertible, MultiExpGroup};
use crate::field::MultiExpScalar;

pub const MODULUS: u64 = 13;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct F13(pub u64);

impl F13 {
    pub fn new(value: u64) -> Self {
        F13(value % MODULUS)
    }
}

impl Mul for F13 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        F13(self.0 * rhs.0 % MODULUS)
    }
}

impl MulAssign for F13 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Invertible for F13 {
    fn one() -> Self {
        F13(1)
    }

    fn inverse(&self) -> Option<Self> {
        // a^(p - 2)
        (self.0 != 0).then(|| (0..MODULUS - 2).fold(F13(1), |acc, _| acc * *self))
    }
}

impl MultiExpScalar for F13 {
    type Repr = u64;

    const NUM_BITS: usize = 4;

    fn to_repr(&self) -> u64 {
        self.0
    }
}

pub fn scalars(values: &[u64]) -> Vec<F13> {
    values.iter().map(|v| F13::new(*v)).collect()
}

#[derive(Clone, Copy, Debug)]
pub struct Z13 {
    num: u64,
    den: u64,
}

impl Z13 {
    pub fn new(value: u64) -> Self {
        Z13 {
            num: value % MODULUS,
            den: 1,
        }
    }

    /// `num / den` in general form.
    pub fn fraction(num: u64, den: u64) -> Self {
        assert_ne!(den % MODULUS, 0);
        Z13 {
            num: num % MODULUS,
            den: den % MODULUS,
        }
    }

    pub fn value(&self) -> u64 {
        let den_inv = F13(self.den).inverse().unwrap();
        (F13(self.num) * den_inv).0
    }

    pub fn den(&self) -> u64 {
        self.den
    }
}

pub fn elements(values: &[u64]) -> Vec<Z13> {
    values.iter().map(|v| Z13::new(*v)).collect()
}

impl PartialEq for Z13 {
    fn eq(&self, other: &Self) -> bool {
        self.num * other.den % MODULUS == other.num * self.den % MODULUS
    }
}

impl Eq for Z13 {}

impl Add for Z13 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Z13 {
            num: (self.num * rhs.den + rhs.num * self.den) % MODULUS,
            den: self.den * rhs.den % MODULUS,
        }
    }
}

impl AddAssign for Z13 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl MultiExpGroup for Z13 {
    type Factor = F13;

    fn zero() -> Self {
        Z13::new(0)
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }

    fn double(&self) -> Self {
        Z13 {
            num: 2 * self.num % MODULUS,
            den: self.den,
        }
    }

    fn mixed_add(&self, other: &Self) -> Self {
        assert_eq!(other.den, 1, "mixed addition against a general element");
        Z13 {
            num: (self.num + other.num * self.den) % MODULUS,
            den: self.den,
        }
    }

    fn is_special(&self) -> bool {
        self.den == 1
    }

    fn to_special(&mut self) {
        *self = Z13::new(self.value());
    }

    fn normalization_factor(&self) -> F13 {
        F13(self.den)
    }

    fn to_special_with_inverse(&mut self, factor_inv: &F13) {
        self.num = (F13(self.num) * *factor_inv).0;
        self.den = 1;
    }
}
