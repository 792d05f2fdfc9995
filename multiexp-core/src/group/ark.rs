use ark_ec::short_weierstrass::{Affine, Projective, SWCurveConfig};
use ark_ec::{AdditiveGroup, CurveGroup};
use ark_ff::{Field, One, Zero};

use super::MultiExpGroup;

/// Special form is the Jacobian `z = 1` representation, so mixed addition
/// maps onto arkworks' projective-plus-affine addition.
impl<P: SWCurveConfig> MultiExpGroup for Projective<P> {
    type Factor = P::BaseField;

    #[inline]
    fn zero() -> Self {
        <Self as Zero>::zero()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    #[inline]
    fn double(&self) -> Self {
        AdditiveGroup::double(self)
    }

    #[inline]
    fn mixed_add(&self, other: &Self) -> Self {
        debug_assert!(MultiExpGroup::is_special(other));
        if Zero::is_zero(other) {
            return *self;
        }
        let mut sum = *self;
        sum += &Affine::<P>::new_unchecked(other.x, other.y);
        sum
    }

    #[inline]
    fn is_special(&self) -> bool {
        Zero::is_zero(self) || self.z.is_one()
    }

    fn to_special(&mut self) {
        *self = self.into_affine().into();
    }

    #[inline]
    fn normalization_factor(&self) -> P::BaseField {
        self.z
    }

    #[inline]
    fn to_special_with_inverse(&mut self, z_inv: &P::BaseField) {
        // (X / Z^2, Y / Z^3, 1)
        let z_inv_sq = z_inv.square();
        self.x *= z_inv_sq;
        self.y *= z_inv_sq * z_inv;
        self.z = P::BaseField::one();
    }
}
