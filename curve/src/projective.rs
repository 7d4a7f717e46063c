use crate::affine::Affine;
use crate::affine::CURVE_B;
use crate::{double_scalar_mul_basepoint, mul_generator, BaseField, Group, ScalarField};
use core::ops::{Add, Mul, Neg, Sub};

/// Projective point on the elliptic curve in homogeneous coordinates.
/// A point (X:Y:Z) stands for the affine point (X/Z, Y/Z).
/// The point at infinity is represented as (0:1:0).
///
/// Addition and doubling use the complete formulas of Renes, Costello and
/// Batina (eprint 2015/1060, algorithms 7 and 9, `a = 0`). They hold for
/// every pair of inputs, including the identity and `P + P`, so the group
/// law itself never branches on the operands.
#[derive(Clone, Debug)]
pub struct Projective {
    pub x: BaseField,
    pub y: BaseField,
    pub z: BaseField,
}

/// `3 * b`, the constant the complete formulas are written in.
fn curve_b3() -> BaseField {
    BaseField::from_u64(3 * CURVE_B)
}

impl Projective {
    /// The point at infinity (identity element): (0:1:0)
    pub fn infinity() -> Self {
        Projective {
            x: BaseField::zero(),
            y: BaseField::one(),
            z: BaseField::zero(),
        }
    }

    /// Create a new projective point.
    pub fn new(x: BaseField, y: BaseField, z: BaseField) -> Self {
        Projective { x, y, z }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Convert to affine coordinates.
    pub fn to_affine(&self) -> Affine {
        if self.is_infinity() {
            return Affine::infinity();
        }

        let z_inv = self.z.inverse();
        Affine::new(&self.x * &z_inv, &self.y * &z_inv)
    }

    /// Convert from affine coordinates.
    pub fn from_affine(point: &Affine) -> Self {
        if point.is_infinity() {
            return Self::infinity();
        }

        Projective::new(point.x.clone(), point.y.clone(), BaseField::one())
    }

    /// Check if a point is on the curve: Y^2 Z = X^3 + 7 Z^3.
    pub fn is_on_curve(&self) -> bool {
        let lhs = &self.y.square() * &self.z;
        let z3 = &self.z.square() * &self.z;
        let rhs = &(&self.x.square() * &self.x) + &(&Affine::curve_b() * &z3);

        lhs == rhs && !(self.is_infinity() && self.y.is_zero())
    }

    /// The SEC 2 base point.
    pub fn generator() -> Self {
        Self::from_affine(&Affine::generator())
    }

    /// Complete point doubling.
    pub fn double(&self) -> Self {
        let b3 = curve_b3();
        let yy = self.y.square();
        let zz = self.z.square();

        let bzz3 = &b3 * &zz;
        let bzz9 = &(&bzz3 + &bzz3) + &bzz3;
        let yy_m_bzz9 = &yy - &bzz9;
        let yy_p_bzz3 = &yy + &bzz3;

        // X3 = 2XY (Y^2 - 9bZ^2)
        let xy = &self.x * &self.y;
        let x3 = &(&xy + &xy) * &yy_m_bzz9;

        // Y3 = (Y^2 - 9bZ^2)(Y^2 + 3bZ^2) + 24b Y^2 Z^2
        let yy_bzz3 = &yy * &bzz3;
        let yy_bzz6 = &yy_bzz3 + &yy_bzz3;
        let yy_bzz12 = &yy_bzz6 + &yy_bzz6;
        let y3 = &(&yy_m_bzz9 * &yy_p_bzz3) + &(&yy_bzz12 + &yy_bzz12);

        // Z3 = 8 Y^3 Z
        let yyyz = &(&yy * &self.y) * &self.z;
        let z2 = &yyyz + &yyyz;
        let z4 = &z2 + &z2;
        let z3 = &z4 + &z4;

        Projective::new(x3, y3, z3)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        Projective::new(self.x.clone(), -&self.y, self.z.clone())
    }

    /// Multiply the fixed generator using a precomputed table.
    pub fn mul_generator(scalar: &ScalarField) -> Self {
        mul_generator(scalar)
    }

    /// Compute a * G + b * P, where G is the fixed generator.
    pub fn double_scalar_mul_basepoint(a: &ScalarField, b: &ScalarField, point: &Self) -> Self {
        double_scalar_mul_basepoint(a, b, point)
    }
}

impl PartialEq for Projective {
    /// Compares the underlying affine points without inverting Z.
    fn eq(&self, other: &Self) -> bool {
        let x_eq = &self.x * &other.z == &other.x * &self.z;
        let y_eq = &self.y * &other.z == &other.y * &self.z;

        x_eq && y_eq
    }
}

impl Eq for Projective {}

impl Group for Projective {
    #[inline]
    fn identity() -> Self {
        Self::infinity()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity()
    }

    #[inline]
    fn generator() -> Self {
        Projective::generator()
    }

    #[inline]
    fn mul_generator(scalar: &ScalarField) -> Self {
        Projective::mul_generator(scalar)
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

// Complete addition, algorithm 7
impl<'a, 'b> Add<&'b Projective> for &'a Projective {
    type Output = Projective;

    fn add(self, other: &'b Projective) -> Projective {
        let b3 = curve_b3();

        let xx = &self.x * &other.x;
        let yy = &self.y * &other.y;
        let zz = &self.z * &other.z;

        let xy = &(&(&self.x + &self.y) * &(&other.x + &other.y)) - &(&xx + &yy);
        let yz = &(&(&self.y + &self.z) * &(&other.y + &other.z)) - &(&yy + &zz);
        let xz = &(&(&self.x + &self.z) * &(&other.x + &other.z)) - &(&xx + &zz);

        let bzz3 = &b3 * &zz;
        let yy_m_bzz3 = &yy - &bzz3;
        let yy_p_bzz3 = &yy + &bzz3;
        let xx3 = &(&xx + &xx) + &xx;

        // X3 = XY (Y^2 - 3bZ^2) - 3b YZ XZ
        let x3 = &(&xy * &yy_m_bzz3) - &(&(&b3 * &yz) * &xz);
        // Y3 = (Y^2 + 3bZ^2)(Y^2 - 3bZ^2) + 9b X^2 XZ
        let y3 = &(&yy_p_bzz3 * &yy_m_bzz3) + &(&(&b3 * &xx3) * &xz);
        // Z3 = YZ (Y^2 + 3bZ^2) + 3X^2 XY
        let z3 = &(&yz * &yy_p_bzz3) + &(&xx3 * &xy);

        Projective::new(x3, y3, z3)
    }
}

impl Add for Projective {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Projective {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self + &other.negate()
    }
}

impl Neg for Projective {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Scalar multiplication
impl Mul<ScalarField> for Projective {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        <Self as Group>::scalar_mul(&self, &scalar)
    }
}

impl Mul<&ScalarField> for &Projective {
    type Output = Projective;

    fn mul(self, scalar: &ScalarField) -> Projective {
        <Projective as Group>::scalar_mul(self, scalar)
    }
}
