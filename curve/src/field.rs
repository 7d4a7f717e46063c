//! Shared prime-field machinery for the secp256k1 base and scalar fields.
//!
//! Both fields wrap a fully reduced [`BigUint`]. Arithmetic never mutates an
//! operand: every operation produces a new element.

use num_bigint::BigUint;
use thiserror::Error;

/// Number of bytes in the big-endian encoding of a field element.
pub const FIELD_BYTES: usize = 32;

/// Errors raised when decoding field elements and curve points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The encoded integer is not smaller than the field modulus.
    #[error("value is not smaller than the field modulus")]
    OutOfRange,
    /// The encoding does not have the expected length.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// The coordinates do not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,
}

/// Left-pads the big-endian bytes of `value` to [`FIELD_BYTES`].
///
/// Callers guarantee `value < 2^256`.
pub(crate) fn to_fixed_be(value: &BigUint) -> [u8; FIELD_BYTES] {
    let bytes = value.to_bytes_be();
    let mut out = [0u8; FIELD_BYTES];
    out[FIELD_BYTES - bytes.len()..].copy_from_slice(&bytes);
    out
}

/// Generates the owned/borrowed operator combinations from the `&a op &b` impl.
macro_rules! forward_binop {
    ($name:ident, $imp:ident, $method:ident) => {
        impl ::core::ops::$imp for $name {
            type Output = $name;

            #[inline]
            fn $method(self, rhs: $name) -> $name {
                ::core::ops::$imp::$method(&self, &rhs)
            }
        }

        impl<'b> ::core::ops::$imp<&'b $name> for $name {
            type Output = $name;

            #[inline]
            fn $method(self, rhs: &'b $name) -> $name {
                ::core::ops::$imp::$method(&self, rhs)
            }
        }

        impl<'a> ::core::ops::$imp<$name> for &'a $name {
            type Output = $name;

            #[inline]
            fn $method(self, rhs: $name) -> $name {
                ::core::ops::$imp::$method(self, &rhs)
            }
        }
    };
}

/// Defines a prime field type over the 32-byte big-endian `$modulus`.
macro_rules! prime_field {
    ($(#[$meta:meta])* $name:ident, $modulus:expr) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
        pub struct $name {
            value: ::num_bigint::BigUint,
        }

        impl $name {
            /// The field modulus.
            pub fn modulus() -> &'static ::num_bigint::BigUint {
                static MODULUS: ::std::sync::OnceLock<::num_bigint::BigUint> =
                    ::std::sync::OnceLock::new();
                MODULUS.get_or_init(|| ::num_bigint::BigUint::from_bytes_be(&$modulus))
            }

            /// The additive identity.
            #[inline]
            pub fn zero() -> Self {
                Self::default()
            }

            /// The multiplicative identity.
            #[inline]
            pub fn one() -> Self {
                Self::from_u64(1)
            }

            /// Creates an element from a small integer.
            pub fn from_u64(val: u64) -> Self {
                Self::from_biguint_reduced(&::num_bigint::BigUint::from(val))
            }

            /// Wraps an integer that must already be smaller than the modulus.
            pub fn from_biguint(
                value: ::num_bigint::BigUint,
            ) -> Result<Self, $crate::field::FieldError> {
                if &value >= Self::modulus() {
                    return Err($crate::field::FieldError::OutOfRange);
                }
                Ok(Self { value })
            }

            /// Reduces an arbitrary integer modulo the field modulus.
            pub fn from_biguint_reduced(value: &::num_bigint::BigUint) -> Self {
                Self {
                    value: value % Self::modulus(),
                }
            }

            /// Decodes a 32-byte big-endian integer, rejecting values `>=` the modulus.
            pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, $crate::field::FieldError> {
                if bytes.len() != $crate::field::FIELD_BYTES {
                    return Err($crate::field::FieldError::InvalidLength {
                        expected: $crate::field::FIELD_BYTES,
                        actual: bytes.len(),
                    });
                }
                Self::from_biguint(::num_bigint::BigUint::from_bytes_be(bytes))
            }

            /// Interprets any byte string as a big-endian integer and reduces it.
            pub fn from_be_bytes_reduced(bytes: &[u8]) -> Self {
                Self::from_biguint_reduced(&::num_bigint::BigUint::from_bytes_be(bytes))
            }

            /// Big-endian encoding, zero-padded to 32 bytes.
            #[inline]
            pub fn to_be_bytes(&self) -> [u8; $crate::field::FIELD_BYTES] {
                $crate::field::to_fixed_be(&self.value)
            }

            /// The canonical integer representative.
            #[inline]
            pub fn as_biguint(&self) -> &::num_bigint::BigUint {
                &self.value
            }

            #[inline]
            pub fn is_zero(&self) -> bool {
                self.value.bits() == 0
            }

            #[inline]
            pub fn is_odd(&self) -> bool {
                self.value.bit(0)
            }

            #[inline]
            pub fn square(&self) -> Self {
                self * self
            }

            /// Modular exponentiation by an arbitrary non-negative exponent.
            pub fn pow(&self, exp: &::num_bigint::BigUint) -> Self {
                Self {
                    value: self.value.modpow(exp, Self::modulus()),
                }
            }

            /// Multiplicative inverse via Fermat's little theorem, `None` for zero.
            pub fn try_inverse(&self) -> Option<Self> {
                if self.is_zero() {
                    return None;
                }
                let exp = Self::modulus() - &::num_bigint::BigUint::from(2u32);
                Some(self.pow(&exp))
            }

            /// Multiplicative inverse, mapping zero to zero.
            pub fn inverse(&self) -> Self {
                self.try_inverse().unwrap_or_default()
            }
        }

        impl<'a, 'b> ::core::ops::Add<&'b $name> for &'a $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: &'b $name) -> $name {
                $name {
                    value: (&self.value + &rhs.value) % $name::modulus(),
                }
            }
        }

        impl<'a, 'b> ::core::ops::Sub<&'b $name> for &'a $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: &'b $name) -> $name {
                $name {
                    value: (&self.value + $name::modulus() - &rhs.value) % $name::modulus(),
                }
            }
        }

        impl<'a, 'b> ::core::ops::Mul<&'b $name> for &'a $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: &'b $name) -> $name {
                $name {
                    value: (&self.value * &rhs.value) % $name::modulus(),
                }
            }
        }

        #[allow(clippy::suspicious_arithmetic_impl)]
        impl<'a, 'b> ::core::ops::Div<&'b $name> for &'a $name {
            type Output = $name;

            #[inline]
            fn div(self, rhs: &'b $name) -> $name {
                self * &rhs.inverse()
            }
        }

        $crate::field::forward_binop!($name, Add, add);
        $crate::field::forward_binop!($name, Sub, sub);
        $crate::field::forward_binop!($name, Mul, mul);
        $crate::field::forward_binop!($name, Div, div);

        impl<'a> ::core::ops::Neg for &'a $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> $name {
                if self.is_zero() {
                    return $name::zero();
                }
                $name {
                    value: $name::modulus() - &self.value,
                }
            }
        }

        impl ::core::ops::Neg for $name {
            type Output = $name;

            #[inline]
            fn neg(self) -> $name {
                -&self
            }
        }

        impl TryFrom<[u8; $crate::field::FIELD_BYTES]> for $name {
            type Error = $crate::field::FieldError;

            fn try_from(bytes: [u8; $crate::field::FIELD_BYTES]) -> Result<Self, Self::Error> {
                Self::from_be_bytes(&bytes)
            }
        }

        impl From<$name> for [u8; $crate::field::FIELD_BYTES] {
            fn from(elem: $name) -> Self {
                elem.to_be_bytes()
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str("0x")?;
                for byte in self.to_be_bytes() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }
    };
}

pub(crate) use forward_binop;
pub(crate) use prime_field;
