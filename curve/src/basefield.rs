//! Base field of secp256k1: integers modulo `p = 2^256 - 2^32 - 977`.

use crate::field::prime_field;

/// Big-endian encoding of the field prime `p`.
pub const MODULUS_BYTES: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];

prime_field!(
    /// Element of the secp256k1 coordinate field `F_p`.
    BaseField,
    MODULUS_BYTES
);

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_modulus_value() {
        let two = BigUint::from(2u32);
        let expected = two.pow(256) - two.pow(32) - BigUint::from(977u32);
        assert_eq!(BaseField::modulus(), &expected);
    }

    #[test]
    fn test_modulus_is_three_mod_four() {
        let rem = BaseField::modulus() % BigUint::from(4u32);
        assert_eq!(rem, BigUint::from(3u32));
    }

    #[test]
    fn test_arithmetic() {
        let a = BaseField::from_u64(6);
        let b = BaseField::from_u64(7);
        assert_eq!(&a * &b, BaseField::from_u64(42));
        assert_eq!(&a + &b, BaseField::from_u64(13));
        assert_eq!(&b - &a, BaseField::one());
        assert_eq!(&a - &b, -BaseField::one());
        assert_eq!(&a / &a, BaseField::one());
    }

    #[test]
    fn test_negation_wraps() {
        let a = BaseField::from_u64(5);
        assert_eq!(&a + &(-&a), BaseField::zero());
        assert_eq!(-BaseField::zero(), BaseField::zero());
    }

    #[test]
    fn test_inverse() {
        let a = BaseField::from_u64(123456789);
        assert_eq!(&a * &a.inverse(), BaseField::one());
        assert!(BaseField::zero().try_inverse().is_none());
        assert_eq!(BaseField::zero().inverse(), BaseField::zero());
    }

    #[test]
    fn test_parity() {
        assert!(BaseField::one().is_odd());
        assert!(!BaseField::from_u64(2).is_odd());
        // p - 1 is even, so -1 is even
        assert!(!(-BaseField::one()).is_odd());
    }

    #[test]
    fn test_byte_encoding() {
        let a = BaseField::from_u64(0x0102);
        let bytes = a.to_be_bytes();
        assert_eq!(bytes[30..], [0x01, 0x02]);
        assert!(bytes[..30].iter().all(|&b| b == 0));
        assert_eq!(BaseField::from_be_bytes(&bytes), Ok(a));
    }

    #[test]
    fn test_rejects_modulus() {
        assert_eq!(
            BaseField::from_be_bytes(&MODULUS_BYTES),
            Err(crate::FieldError::OutOfRange)
        );
        assert_eq!(
            BaseField::from_be_bytes(&[1u8; 31]),
            Err(crate::FieldError::InvalidLength {
                expected: 32,
                actual: 31
            })
        );
        assert!(BaseField::from_be_bytes_reduced(&MODULUS_BYTES).is_zero());
    }
}
