//! Point decompression for a field prime `p ≡ 3 (mod 4)`.

use curve::{Affine, BaseField, BigUint};
use std::sync::OnceLock;

use crate::errors::{Result, SignatureError};

/// `(p + 1) / 4`. For a quadratic residue `a`, `a^((p + 1) / 4)` is a square root.
fn sqrt_exponent() -> &'static BigUint {
    static EXP: OnceLock<BigUint> = OnceLock::new();
    EXP.get_or_init(|| (BaseField::modulus() + &BigUint::from(1u32)) >> 2usize)
}

/// Recovers the y-coordinate belonging to `x` with the requested parity.
///
/// Fails with [`SignatureError::PointNotOnCurve`] when `x^3 + 7` has no
/// square root, or when the only root is zero and an odd `y` was asked for.
pub fn decompress(x: &BaseField, want_odd_y: bool) -> Result<BaseField> {
    let alpha = &(&x.square() * x) + &Affine::curve_b();
    let beta = alpha.pow(sqrt_exponent());

    let y = if beta.is_odd() == want_odd_y { beta } else { -beta };

    if y.is_odd() != want_odd_y || y.square() != alpha {
        return Err(SignatureError::PointNotOnCurve);
    }

    Ok(y)
}

/// [`decompress`], returning the full affine point.
pub fn decompress_point(x: &BaseField, want_odd_y: bool) -> Result<Affine> {
    let y = decompress(x, want_odd_y)?;
    Ok(Affine::new(x.clone(), y))
}
