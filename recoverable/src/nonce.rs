//! Deterministic nonces (RFC 6979, HMAC-SHA256).

use curve::ScalarField;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::constants::DIGEST_SIZE;

type HmacSha256 = Hmac<Sha256>;

fn hmac_sha256(key: &[u8; 32], parts: &[&[u8]]) -> [u8; 32] {
    let mut mac = <HmacSha256 as Mac>::new_from_slice(key)
        .expect("HMAC accepts keys of any length");
    for part in parts {
        mac.update(part);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    out
}

/// The digest fed to the nonce generator on a 1-based signing `attempt`.
///
/// The first attempt uses the message digest itself, so it matches plain
/// RFC 6979. Attempt `c > 1` uses `SHA-256(digest || [0x00; c - 1])`.
pub fn attempt_digest(digest: &[u8; DIGEST_SIZE], attempt: u32) -> [u8; DIGEST_SIZE] {
    if attempt <= 1 {
        return *digest;
    }
    let padding = vec![0u8; (attempt - 1) as usize];
    Sha256::new()
        .chain_update(digest)
        .chain_update(&padding)
        .finalize()
        .into()
}

/// Stream of RFC 6979 nonce candidates for one secret key and digest.
///
/// Each call to [`Rfc6979::next_nonce`] yields the next `k` in `[1, n)`;
/// callers that reject a `k` (because `r` or `s` came out zero) simply ask
/// for the next one, which is exactly the RFC's retry step.
#[derive(Clone)]
pub struct Rfc6979 {
    k: [u8; 32],
    v: [u8; 32],
    started: bool,
}

impl Rfc6979 {
    /// Seeds the generator with the secret scalar `x` and `h = digest mod n`
    /// (RFC 6979 section 3.2, steps b to f).
    pub fn new(secret: &ScalarField, digest: &[u8; DIGEST_SIZE]) -> Self {
        let x = secret.to_be_bytes();
        // bits2octets: the digest is exactly qlen bits, so only the reduction applies
        let h = ScalarField::from_be_bytes_reduced(digest).to_be_bytes();

        let v = [0x01u8; 32];
        let k = [0x00u8; 32];
        let k = hmac_sha256(&k, &[&v[..], &[0x00][..], &x[..], &h[..]]);
        let v = hmac_sha256(&k, &[&v[..]]);
        let k = hmac_sha256(&k, &[&v[..], &[0x01][..], &x[..], &h[..]]);
        let v = hmac_sha256(&k, &[&v[..]]);

        Self {
            k,
            v,
            started: false,
        }
    }

    /// The next candidate `k` in `[1, n)` (step h). Candidates outside the
    /// range are skipped internally; every call after the first applies the
    /// `K = HMAC_K(V || 0x00)`, `V = HMAC_K(V)` update before drawing again.
    pub fn next_nonce(&mut self) -> ScalarField {
        loop {
            if self.started {
                self.k = hmac_sha256(&self.k, &[&self.v[..], &[0x00][..]]);
                self.v = hmac_sha256(&self.k, &[&self.v[..]]);
            }
            self.started = true;

            self.v = hmac_sha256(&self.k, &[&self.v[..]]);
            if let Ok(k) = ScalarField::from_be_bytes(&self.v) {
                if !k.is_zero() {
                    return k;
                }
            }
        }
    }
}
