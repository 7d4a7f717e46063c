// SEC 2 secp256k1: y^2 = x^3 + 7 over F_p
// p = 2^256 - 2^32 - 977
// n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141 (cofactor 1)
// G = (0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798,
//      0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8)

use crate::{BaseField, FieldError, Group, Projective, ScalarBits, ScalarField};
use core::ops::{Add, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

/// The `b` coefficient of the curve equation (`a` is zero).
pub const CURVE_B: u64 = 7;

/// Size of a SEC1 compressed point: parity prefix and x-coordinate.
pub const COMPRESSED_POINT_SIZE: usize = 33;

/// Size of a SEC1 uncompressed point: `0x04` prefix, x and y.
pub const UNCOMPRESSED_POINT_SIZE: usize = 65;

const GENERATOR_X: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
    0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
];

const GENERATOR_Y: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
    0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8,
];

/// Affine point on the elliptic curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
///
/// Deserialization rejects coordinates that are not on the curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AffineCoords", into = "AffineCoords")]
pub struct Affine {
    /// The x-coordinate of the point
    pub x: BaseField,
    /// The y-coordinate of the point
    pub y: BaseField,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Affine {
    /// Get the 'b' coefficient: 7
    #[inline]
    pub fn curve_b() -> BaseField {
        BaseField::from_u64(CURVE_B)
    }

    /// The point at infinity (identity element)
    pub fn infinity() -> Self {
        Affine {
            x: BaseField::zero(),
            y: BaseField::zero(),
            is_infinity: true,
        }
    }

    /// Create a new affine point.
    pub fn new(x: BaseField, y: BaseField) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check if a point is on the curve: y^2 = x^3 + 7.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }

        let y2 = self.y.square();
        let x3 = &self.x.square() * &self.x;
        let rhs = &x3 + &Self::curve_b();

        y2 == rhs
    }

    /// The SEC 2 base point.
    pub fn generator() -> Self {
        Affine::new(
            BaseField::from_be_bytes_reduced(&GENERATOR_X),
            BaseField::from_be_bytes_reduced(&GENERATOR_Y),
        )
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity {
            return self.clone();
        }

        // If y = 0, then 2P = O
        if self.y.is_zero() {
            return Self::infinity();
        }

        // λ = 3x^2 / (2y)
        let x2 = self.x.square();
        let numerator = &(&x2 + &x2) + &x2;
        let denominator = &self.y + &self.y;
        let lambda = &numerator / &denominator;

        // x_r = λ^2 - 2x
        let x_r = &(&lambda.square() - &self.x) - &self.x;

        // y_r = λ(x - x_r) - y
        let y_r = &(&lambda * &(&self.x - &x_r)) - &self.y;

        Affine::new(x_r, y_r)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return self.clone();
        }
        Affine::new(self.x.clone(), -&self.y)
    }

    /// Multiply the fixed generator using a precomputed table.
    pub fn mul_generator(scalar: &ScalarField) -> Self {
        Projective::mul_generator(scalar).to_affine()
    }

    /// Compute a * G + b * P, where G is the fixed generator.
    pub fn double_scalar_mul_basepoint(a: &ScalarField, b: &ScalarField, point: &Self) -> Self {
        Projective::double_scalar_mul_basepoint(a, b, &Projective::from_affine(point)).to_affine()
    }

    /// SEC1 compressed encoding, `0x02 | parity(y)` followed by x.
    ///
    /// The point at infinity encodes as all zeros.
    pub fn to_compressed(&self) -> [u8; COMPRESSED_POINT_SIZE] {
        let mut out = [0u8; COMPRESSED_POINT_SIZE];
        if self.is_infinity {
            return out;
        }
        out[0] = if self.y.is_odd() { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&self.x.to_be_bytes());
        out
    }

    /// SEC1 uncompressed encoding, `0x04 || x || y`.
    ///
    /// The point at infinity encodes as all zeros.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_POINT_SIZE] {
        let mut out = [0u8; UNCOMPRESSED_POINT_SIZE];
        if self.is_infinity {
            return out;
        }
        out[0] = 0x04;
        out[1..33].copy_from_slice(&self.x.to_be_bytes());
        out[33..].copy_from_slice(&self.y.to_be_bytes());
        out
    }
}

/// Unchecked wire form of [`Affine`].
#[derive(Serialize, Deserialize)]
struct AffineCoords {
    x: BaseField,
    y: BaseField,
    is_infinity: bool,
}

impl TryFrom<AffineCoords> for Affine {
    type Error = FieldError;

    fn try_from(coords: AffineCoords) -> Result<Self, FieldError> {
        if coords.is_infinity {
            return Ok(Affine::infinity());
        }
        let point = Affine::new(coords.x, coords.y);
        if !point.is_on_curve() {
            return Err(FieldError::NotOnCurve);
        }
        Ok(point)
    }
}

impl From<Affine> for AffineCoords {
    fn from(point: Affine) -> Self {
        AffineCoords {
            x: point.x,
            y: point.y,
            is_infinity: point.is_infinity,
        }
    }
}

impl Group for Affine {
    #[inline]
    fn identity() -> Self {
        Self::infinity()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn generator() -> Self {
        Affine::generator()
    }

    #[inline]
    fn mul_generator(scalar: &ScalarField) -> Self {
        Affine::mul_generator(scalar)
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }

    /// Runs in projective coordinates to avoid one inversion per addition.
    fn scalar_mul<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        Projective::from_affine(self).scalar_mul(scalar).to_affine()
    }
}

// Implement addition for affine points
impl<'a, 'b> Add<&'b Affine> for &'a Affine {
    type Output = Affine;

    fn add(self, other: &'b Affine) -> Affine {
        // Handle infinity cases
        if self.is_infinity {
            return other.clone();
        }
        if other.is_infinity {
            return self.clone();
        }

        // Check if points are the same
        if self.x == other.x {
            if self.y == other.y {
                // Point doubling
                return self.double();
            } else {
                // Points are inverses, return infinity
                return Affine::infinity();
            }
        }

        // Regular point addition
        // λ = (y2 - y1) / (x2 - x1)
        let numerator = &other.y - &self.y;
        let denominator = &other.x - &self.x;
        let lambda = &numerator / &denominator;

        // x_r = λ^2 - x1 - x2
        let x_r = &(&lambda.square() - &self.x) - &other.x;

        // y_r = λ(x1 - x_r) - y1
        let y_r = &(&lambda * &(&self.x - &x_r)) - &self.y;

        Affine::new(x_r, y_r)
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self + &other.negate()
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Scalar multiplication
impl Mul<ScalarField> for Affine {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl Mul<&ScalarField> for &Affine {
    type Output = Affine;

    fn mul(self, scalar: &ScalarField) -> Affine {
        <Affine as Group>::scalar_mul(self, scalar)
    }
}

impl Mul<Affine> for ScalarField {
    type Output = Affine;

    fn mul(self, point: Affine) -> Affine {
        <Affine as Group>::scalar_mul(&point, &self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BigUint;

    fn x_hex(point: &Affine) -> String {
        point
            .x
            .to_be_bytes()
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect()
    }

    #[test]
    fn test_infinity() {
        let inf = Affine::infinity();
        assert!(inf.is_infinity());
        assert!(inf.is_on_curve());
    }

    #[test]
    fn test_generator_on_curve() {
        let g = Affine::generator();
        assert!(g.is_on_curve(), "Generator point is not on the curve");
        assert!(!g.is_infinity());
    }

    #[test]
    fn test_point_addition_with_infinity() {
        let g = Affine::generator();
        let inf = Affine::infinity();

        assert_eq!(&g + &inf, g);
        assert_eq!(&inf + &g, g);
        assert_eq!(&inf + &inf, inf);
    }

    #[test]
    fn test_point_doubling() {
        let g = Affine::generator();
        let g2 = g.double();

        assert!(g2.is_on_curve(), "Doubled point is not on the curve");
        assert_eq!(&g + &g, g2);
    }

    #[test]
    fn test_known_multiples() {
        let g = Affine::generator();
        let g2 = g.double();
        let g3 = &g2 + &g;

        assert_eq!(
            x_hex(&g2),
            "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5"
        );
        assert_eq!(
            x_hex(&g3),
            "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9"
        );
        assert!(!g2.y.is_odd());
        assert!(!g3.y.is_odd());
    }

    #[test]
    fn test_point_negation() {
        let g = Affine::generator();
        let neg_g = g.negate();

        assert!(neg_g.is_on_curve());
        assert_eq!(&g + &neg_g, Affine::infinity());
        assert_eq!(g.clone() - g, Affine::infinity());
    }

    #[test]
    fn test_scalar_multiplication() {
        let g = Affine::generator();
        let scalar = ScalarField::from_u64(5);
        let result = &g * &scalar;

        // 5*G = G + G + G + G + G
        let expected = g.clone() + g.clone() + g.clone() + g.clone() + g;
        assert_eq!(result, expected);
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_scalar_mul_zero_and_one() {
        let g = Affine::generator();
        assert_eq!(&g * &ScalarField::zero(), Affine::infinity());
        assert_eq!(&g * &ScalarField::one(), g);
    }

    #[test]
    fn test_group_order() {
        let g = Affine::generator();
        let order: &BigUint = ScalarField::modulus();
        assert!(g.scalar_mul(order).is_infinity());
        assert_eq!(&g * &(-ScalarField::one()), g.negate());
    }

    #[test]
    fn test_mul_generator() {
        let scalar = ScalarField::from_u64(123456);
        let result = Affine::mul_generator(&scalar);
        let expected = Affine::generator().mul_u64(123456);

        assert_eq!(result, expected);
        assert!(result.is_on_curve());
    }

    #[test]
    fn test_double_scalar_mul_basepoint() {
        let g = Affine::generator();
        let p = g.mul_u64(17);
        let a = ScalarField::from_u64(7);
        let b = ScalarField::from_u64(11);

        let result = Affine::double_scalar_mul_basepoint(&a, &b, &p);
        assert_eq!(result, g.mul_u64(7 + 11 * 17));
    }

    #[test]
    fn test_compressed_encoding() {
        let g = Affine::generator();
        let bytes = g.to_compressed();
        assert_eq!(bytes[0], 0x02);
        assert_eq!(&bytes[1..], &g.x.to_be_bytes());

        let neg = g.negate().to_compressed();
        assert_eq!(neg[0], 0x03);

        let full = g.to_uncompressed();
        assert_eq!(full[0], 0x04);
        assert_eq!(&full[33..], &g.y.to_be_bytes());
    }

    #[test]
    fn test_serde_rejects_off_curve_points() {
        let g = Affine::generator();
        let bytes = bincode::serialize(&g).expect("serialize");
        let decoded: Affine = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(decoded, g);

        let bytes = bincode::serialize(&Affine::infinity()).expect("serialize");
        let decoded: Affine = bincode::deserialize(&bytes).expect("deserialize");
        assert!(decoded.is_infinity());

        let off_curve = AffineCoords {
            x: g.x.clone(),
            y: &g.y + &BaseField::one(),
            is_infinity: false,
        };
        let bytes = bincode::serialize(&off_curve).expect("serialize");
        assert!(bincode::deserialize::<Affine>(&bytes).is_err());
        assert_eq!(
            Affine::try_from(off_curve),
            Err(FieldError::NotOnCurve)
        );
    }

    #[test]
    fn test_group_properties() {
        let g = Affine::generator();

        assert_eq!(g.double(), &g + &g);

        let triple1 = g.clone() + g.clone() + g.clone();
        let triple2 = g.mul_u64(3);
        assert_eq!(triple1, triple2);

        let h = g.mul_u64(5);
        let neg_h = -h.clone();
        assert_eq!(h + neg_h, Affine::infinity());
    }
}
