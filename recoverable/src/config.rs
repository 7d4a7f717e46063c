//! Signer configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_ATTEMPTS;

/// Tunables for [`Signer`](crate::Signer).
///
/// Missing fields fall back to their defaults when deserialized, so the
/// struct can be embedded in a larger application config.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerConfig {
    /// Upper bound on deterministic-nonce attempts before giving up with
    /// [`SignatureError::NonceExhausted`](crate::SignatureError::NonceExhausted).
    pub max_attempts: u32,
    /// Keep retrying until the 65-byte encoding passes
    /// [`Signature::is_canonical`](crate::Signature::is_canonical), not only
    /// the fixed-width check on `r` and `s`.
    pub require_canonical: bool,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            require_canonical: true,
        }
    }
}
