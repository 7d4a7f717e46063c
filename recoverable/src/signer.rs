//! Deterministic signing with a bounded retry loop.

use curve::{Affine, ScalarField};
use sha2::{Digest, Sha256};

use crate::config::SignerConfig;
use crate::constants::DIGEST_SIZE;
use crate::errors::{Result, SignatureError};
use crate::keys::SigningKey;
use crate::nonce::{Rfc6979, attempt_digest};
use crate::observer::{NoopObserver, RejectReason, SigningEvent, SigningObserver};
use crate::recovery::{digest_array, solve_recovery_index_with, truncate_digest};
use crate::signatures::Signature;

/// Produces compact recoverable signatures.
///
/// Each attempt derives an RFC 6979 nonce from the key and an attempt-specific
/// digest, signs, normalizes `s` to the lower half of the order, and keeps the
/// result only if both scalars encode as 32-byte positive DER integers (and,
/// with [`SignerConfig::require_canonical`], if the full encoding passes
/// [`Signature::is_canonical`]). The output is a pure function of the key,
/// the digest and the configuration.
///
/// # Example
///
/// ```
/// use recoverable::{RecordingObserver, Signer, SignerConfig, SigningKey};
///
/// let key = SigningKey::from_bytes(&[7u8; 32]).expect("valid key");
/// let observer = RecordingObserver::new();
/// let signer = Signer::with_observer(SignerConfig::default(), &observer);
///
/// let sig = signer.sign_message(b"hello", &key).expect("signing failed");
/// assert!(sig.is_canonical());
/// assert!(!observer.events().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Signer<O = NoopObserver> {
    config: SignerConfig,
    observer: O,
}

impl Signer {
    pub fn new(config: SignerConfig) -> Self {
        Self {
            config,
            observer: NoopObserver,
        }
    }
}

impl Default for Signer {
    fn default() -> Self {
        Self::new(SignerConfig::default())
    }
}

impl<O: SigningObserver> Signer<O> {
    /// A signer that reports retries and recovery diagnostics to `observer`.
    pub fn with_observer(config: SignerConfig, observer: O) -> Self {
        Self { config, observer }
    }

    pub fn config(&self) -> &SignerConfig {
        &self.config
    }

    /// Signs a 32-byte digest.
    ///
    /// # Errors
    ///
    /// - [`SignatureError::InvalidDigestLength`] if `digest` is not 32 bytes
    /// - [`SignatureError::NonceExhausted`] if no attempt within
    ///   `max_attempts` produced an acceptable signature
    pub fn sign_digest(&self, digest: &[u8], key: &SigningKey) -> Result<Signature> {
        let digest = digest_array(digest)?;
        let public = key.verifying_key();

        for attempt in 1..=self.config.max_attempts {
            let (r, s) = ecdsa_sign(key.as_scalar(), digest, &attempt_digest(digest, attempt));

            if !is_fixed_width(&r) || !is_fixed_width(&s) {
                self.reject(attempt, RejectReason::NotFixedWidth);
                continue;
            }

            let index = solve_recovery_index_with(&r, &s, digest, &public, &self.observer)?;
            let sig = Signature::from_recovery_index(r, s, index)?;

            if self.config.require_canonical && !sig.is_canonical() {
                self.reject(attempt, RejectReason::NonCanonical);
                continue;
            }

            self.observer.on_event(&SigningEvent::Signed {
                attempts: attempt,
                recovery_index: index,
            });
            return Ok(sig);
        }

        Err(SignatureError::NonceExhausted(self.config.max_attempts))
    }

    /// Hashes `msg` with SHA-256 and signs the digest.
    pub fn sign_message(&self, msg: &[u8], key: &SigningKey) -> Result<Signature> {
        self.sign_digest(&Sha256::digest(msg), key)
    }

    fn reject(&self, attempt: u32, reason: RejectReason) {
        self.observer
            .on_event(&SigningEvent::AttemptRejected { attempt, reason });
    }
}

/// One ECDSA signature over `digest` with the nonce stream seeded by
/// `nonce_digest`, with `s` normalized to `s <= n / 2`.
fn ecdsa_sign(
    secret: &ScalarField,
    digest: &[u8; DIGEST_SIZE],
    nonce_digest: &[u8; DIGEST_SIZE],
) -> (ScalarField, ScalarField) {
    let e = truncate_digest(digest);
    let mut nonces = Rfc6979::new(secret, nonce_digest);

    loop {
        let k = nonces.next_nonce();
        let big_r = Affine::mul_generator(&k);
        let r = ScalarField::from_biguint_reduced(big_r.x.as_biguint());
        if r.is_zero() {
            continue;
        }

        let k_inv = k.inverse();
        let s = &k_inv * &(&e + &(secret * &r));
        if s.is_zero() {
            continue;
        }

        let s = if s.is_high() { -s } else { s };
        return (r, s);
    }
}

/// Whether `v` encodes to exactly 32 bytes as a positive DER integer: the
/// leading byte is non-zero and its high bit is clear.
fn is_fixed_width(v: &ScalarField) -> bool {
    let bytes = v.to_be_bytes();
    bytes[0] != 0 && bytes[0] & 0x80 == 0
}
