use std::sync::OnceLock;

use crate::group::{window_table, windowed_mul};
use crate::{Projective, ScalarField};

/// Multiples `0 * G ..= 15 * G` of the fixed generator, built on first use.
pub(crate) fn generator_table() -> &'static [Projective] {
    static TABLE: OnceLock<Vec<Projective>> = OnceLock::new();
    TABLE.get_or_init(|| window_table(&Projective::generator()))
}

/// Multiply the fixed generator using the precomputed table.
pub fn mul_generator(scalar: &ScalarField) -> Projective {
    windowed_mul(generator_table(), scalar)
}
