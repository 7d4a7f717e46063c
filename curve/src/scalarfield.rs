//! Scalar field of secp256k1: integers modulo the group order
//! `n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141`.

use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use std::sync::OnceLock;

use crate::field::prime_field;
use crate::group::ScalarBits;

/// Big-endian encoding of the group order `n`.
pub const MODULUS_BYTES: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

prime_field!(
    /// Scalar modulo the order of the secp256k1 generator.
    ScalarField,
    MODULUS_BYTES
);

impl ScalarField {
    /// `floor(n / 2)`, the largest "low" scalar.
    pub fn half_modulus() -> &'static BigUint {
        static HALF: OnceLock<BigUint> = OnceLock::new();
        HALF.get_or_init(|| Self::modulus() >> 1usize)
    }

    /// Whether the scalar lies in the upper half of the field, `s > n / 2`.
    #[inline]
    pub fn is_high(&self) -> bool {
        self.as_biguint() > Self::half_modulus()
    }
}

impl ScalarBits for ScalarField {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.as_biguint().to_u64_limbs()
    }
}

impl Distribution<ScalarField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ScalarField {
        loop {
            let bytes: [u8; 32] = rng.random();
            if let Ok(scalar) = ScalarField::from_be_bytes(&bytes) {
                if !scalar.is_zero() {
                    return scalar;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert_eq!(ScalarField::zero() + ScalarField::zero(), ScalarField::zero());
        assert_eq!(ScalarField::one() * ScalarField::one(), ScalarField::one());
        assert_eq!(ScalarField::zero() * ScalarField::one(), ScalarField::zero());
    }

    #[test]
    fn test_subtraction_underflow() {
        let a = ScalarField::from_u64(3);
        let b = ScalarField::from_u64(10);
        let c = &a - &b;
        assert_eq!(&c + &b, a);
        assert_eq!(
            c.as_biguint(),
            &(ScalarField::modulus() - BigUint::from(7u32))
        );
    }

    #[test]
    fn test_inverse() {
        let a = ScalarField::from_u64(5);
        assert_eq!(&a * &a.inverse(), ScalarField::one());
    }

    #[test]
    fn test_modulus_reduces_to_zero() {
        assert!(ScalarField::from_biguint_reduced(ScalarField::modulus()).is_zero());
        assert!(ScalarField::from_be_bytes(&MODULUS_BYTES).is_err());
    }

    #[test]
    fn test_is_high() {
        let half = ScalarField::from_biguint(ScalarField::half_modulus().clone()).unwrap();
        assert!(!half.is_high());
        assert!((&half + &ScalarField::one()).is_high());
        assert!(!ScalarField::one().is_high());
        assert!((-ScalarField::one()).is_high());
    }

    #[test]
    fn test_limbs_little_endian() {
        let a = ScalarField::from_u64(0xdead_beef);
        assert_eq!(a.to_u64_limbs(), [0xdead_beef, 0, 0, 0]);
        let top = -ScalarField::one();
        assert_eq!(top.to_u64_limbs()[3], 0xffff_ffff_ffff_ffff);
        assert_eq!(top.to_u64_limbs()[0], 0xbfd2_5e8c_d036_4140);
    }
}
