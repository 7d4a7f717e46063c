use core::ops::{Add, Neg};
use num_bigint::BigUint;

use crate::ScalarField;

/// Little-endian 64-bit limb view of a multiplier.
pub trait ScalarBits {
    fn to_u64_limbs(&self) -> [u64; 4];
}

/// Plain integers are accepted as multipliers so that `n * P` can be formed
/// even though `n` is zero in the scalar field. Bits above 256 are ignored.
impl ScalarBits for BigUint {
    fn to_u64_limbs(&self) -> [u64; 4] {
        let mut limbs = [0u64; 4];
        for (limb, digit) in limbs.iter_mut().zip(self.to_u64_digits()) {
            *limb = digit;
        }
        limbs
    }
}

pub trait Group: Sized + Clone + PartialEq + Add<Output = Self> + Neg<Output = Self> {
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    #[inline]
    fn mul_generator(scalar: &ScalarField) -> Self {
        Self::generator().scalar_mul(scalar)
    }

    /// Windowed multiplication whose sequence of doublings and additions
    /// does not depend on `scalar` or on `self`.
    #[inline]
    fn scalar_mul<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        windowed_mul(&window_table(self), scalar)
    }

    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::identity();
        let mut temp = self.clone();
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = result + temp.clone();
            }
            temp = temp.double();
            bits >>= 1;
        }

        result
    }
}

/// Multiples `0 * P ..= 15 * P` used by the windowed multipliers.
pub(crate) fn window_table<G: Group>(point: &G) -> Vec<G> {
    let mut table = Vec::with_capacity(16);
    table.push(G::identity());
    table.push(point.clone());

    for i in 2..16 {
        let next = if i % 2 == 0 {
            table[i / 2].double()
        } else {
            table[i - 1].clone() + point.clone()
        };
        table.push(next);
    }

    table
}

/// Fixed 4-bit window multiplication against a [`window_table`], most
/// significant nibble first.
///
/// Every one of the 64 windows costs four doublings and one addition; a zero
/// window adds the identity entry instead of being skipped.
pub(crate) fn windowed_mul<G: Group, S: ScalarBits + ?Sized>(table: &[G], scalar: &S) -> G {
    let scalar_limbs = scalar.to_u64_limbs();
    let mut result = G::identity();

    for &limb in scalar_limbs.iter().rev() {
        for shift in (0..64).step_by(4).rev() {
            result = result.double();
            result = result.double();
            result = result.double();
            result = result.double();

            let window = ((limb >> shift) & 0xF) as usize;
            result = result + table[window].clone();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RandomField;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Integers modulo 2^64 that remember how many group operations built them.
    #[derive(Clone, Debug)]
    struct Counted {
        value: u64,
        ops: u32,
    }

    impl PartialEq for Counted {
        fn eq(&self, other: &Self) -> bool {
            self.value == other.value
        }
    }

    impl Add for Counted {
        type Output = Self;

        fn add(self, other: Self) -> Self {
            Counted {
                value: self.value.wrapping_add(other.value),
                ops: self.ops + 1,
            }
        }
    }

    impl Neg for Counted {
        type Output = Self;

        fn neg(self) -> Self {
            self.negate()
        }
    }

    impl Group for Counted {
        fn identity() -> Self {
            Counted { value: 0, ops: 0 }
        }

        fn is_identity(&self) -> bool {
            self.value == 0
        }

        fn generator() -> Self {
            Counted { value: 3, ops: 0 }
        }

        fn double(&self) -> Self {
            Counted {
                value: self.value.wrapping_add(self.value),
                ops: self.ops + 1,
            }
        }

        fn negate(&self) -> Self {
            Counted {
                value: self.value.wrapping_neg(),
                ops: self.ops,
            }
        }
    }

    #[test]
    fn test_scalar_mul_operation_count_is_fixed() {
        let mut rng = StdRng::seed_from_u64(5);
        let dense = ScalarField::random(&mut rng);
        let g = Counted::generator();

        for scalar in [ScalarField::zero(), ScalarField::one(), -ScalarField::one(), dense] {
            let result = g.scalar_mul(&scalar);
            let low = scalar.to_u64_limbs()[0];

            assert_eq!(result.value, low.wrapping_mul(3));
            // 64 windows of four doublings and one addition
            assert_eq!(result.ops, 64 * 5);
        }
    }

    #[test]
    fn test_scalar_mul_of_identity() {
        let inf = Counted::identity();
        let result = inf.scalar_mul(&ScalarField::from_u64(12345));
        assert!(result.is_identity());
        assert_eq!(result.ops, 64 * 5);
    }
}
