use crate::generator_table::generator_table;
use crate::group::{window_table, ScalarBits};
use crate::{Projective, ScalarField};

/// Compute a * G + b * P with one shared doubling chain and 4-bit windows.
///
/// Zero windows are skipped, so the running time depends on `a` and `b`.
/// Only use it with public scalars, as signature verification and key
/// recovery do.
pub fn double_scalar_mul_basepoint(
    a: &ScalarField,
    b: &ScalarField,
    point: &Projective,
) -> Projective {
    let base_table = generator_table();
    let point_table = window_table(point);

    let a_limbs = a.to_u64_limbs();
    let b_limbs = b.to_u64_limbs();
    let mut result = Projective::infinity();

    for limb_idx in (0..4).rev() {
        let a_limb = a_limbs[limb_idx];
        let b_limb = b_limbs[limb_idx];
        for shift in (0..64).step_by(4).rev() {
            for _ in 0..4 {
                result = result.double();
            }

            let a_window = ((a_limb >> shift) & 0xF) as usize;
            if a_window != 0 {
                result = &result + &base_table[a_window];
            }

            let b_window = ((b_limb >> shift) & 0xF) as usize;
            if b_window != 0 {
                result = &result + &point_table[b_window];
            }
        }
    }

    result
}
