//! Public-key recovery from compact signatures.
//!
//! A recovery index packs two bits: bit 0 is the parity of `R.y`, bit 1
//! selects `R.x = r + n` for the rare case where the nonce point's
//! x-coordinate exceeded the curve order.

use curve::{Affine, BaseField, BigUint, Group, Projective, ScalarField};

use crate::constants::DIGEST_SIZE;
use crate::errors::{Result, SignatureError};
use crate::decompress::decompress_point;
use crate::keys::VerifyingKey;
use crate::observer::{NoopObserver, SigningEvent, SigningObserver};

/// Number of recovery candidates per signature.
pub const RECOVERY_CANDIDATES: u8 = 4;

/// Borrows `digest` as a fixed 32-byte array.
pub(crate) fn digest_array(digest: &[u8]) -> Result<&[u8; DIGEST_SIZE]> {
    digest
        .try_into()
        .map_err(|_| SignatureError::InvalidDigestLength(digest.len()))
}

/// Interprets `digest` as a big-endian integer and drops the low bits that
/// exceed the bit length of the curve order, then reduces modulo `n`.
pub fn truncate_digest(digest: &[u8]) -> ScalarField {
    let e = BigUint::from_bytes_be(digest);
    let order_bits = ScalarField::modulus().bits();
    let digest_bits = 8 * digest.len() as u64;

    let e = if digest_bits > order_bits {
        e >> (digest_bits - order_bits)
    } else {
        e
    };

    ScalarField::from_biguint_reduced(&e)
}

/// Reconstructs the candidate public key for one recovery index.
///
/// Computes `Q = r^-1 (s R - e G)` where `R` is rebuilt from `r` and the
/// index bits. With `verify_order` set, `R` must also satisfy `n R = O`.
pub fn recover_point(
    r: &ScalarField,
    s: &ScalarField,
    digest: &[u8],
    recovery_index: u8,
    verify_order: bool,
) -> Result<Affine> {
    if recovery_index >= RECOVERY_CANDIDATES {
        return Err(SignatureError::InvalidRecoveryIndex(recovery_index));
    }
    let digest = digest_array(digest)?;
    let r_inv = r.try_inverse().ok_or(SignatureError::InvalidScalar)?;

    let rx = if recovery_index & 2 != 0 {
        r.as_biguint() + ScalarField::modulus()
    } else {
        r.as_biguint().clone()
    };
    let rx = BaseField::from_biguint(rx).map_err(|_| SignatureError::RxOutOfRange)?;

    let big_r = Projective::from_affine(&decompress_point(&rx, recovery_index & 1 == 1)?);

    if verify_order && !big_r.scalar_mul(ScalarField::modulus()).is_infinity() {
        return Err(SignatureError::InvalidRecoveryPoint);
    }

    let e = truncate_digest(digest);
    let term1 = &r_inv * s;
    let term2 = &(-&e) * &r_inv;

    // term2 * G + term1 * R
    let q = Projective::double_scalar_mul_basepoint(&term2, &term1, &big_r);
    if q.is_infinity() {
        return Err(SignatureError::InvalidRecoveryPoint);
    }

    Ok(q.to_affine())
}

/// Finds the recovery index under which `(r, s)` reproduces `expected`.
pub fn solve_recovery_index(
    r: &ScalarField,
    s: &ScalarField,
    digest: &[u8],
    expected: &VerifyingKey,
) -> Result<u8> {
    solve_recovery_index_with(r, s, digest, expected, &NoopObserver)
}

/// [`solve_recovery_index`], reporting each failed candidate to `observer`.
///
/// Candidates are tried in order `0..=3` with the order check enabled and
/// compared by compressed encoding. Per-candidate errors are not fatal.
pub fn solve_recovery_index_with<O: SigningObserver + ?Sized>(
    r: &ScalarField,
    s: &ScalarField,
    digest: &[u8],
    expected: &VerifyingKey,
    observer: &O,
) -> Result<u8> {
    digest_array(digest)?;
    let target = expected.to_compressed();

    for index in 0..RECOVERY_CANDIDATES {
        match recover_point(r, s, digest, index, true) {
            Ok(candidate) if candidate.to_compressed() == target => return Ok(index),
            Ok(_) => observer.on_event(&SigningEvent::CandidateMismatch { index }),
            Err(error) => observer.on_event(&SigningEvent::CandidateRejected { index, error }),
        }
    }

    Err(SignatureError::RecoveryNotFound)
}
