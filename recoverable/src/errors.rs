//! Error types for recoverable signatures.

use thiserror::Error;

/// Errors that can occur while signing, recovering, or decoding signatures.
///
/// Every elliptic-curve failure surfaces here as a typed value; nothing in
/// this crate panics on malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The message digest is not exactly 32 bytes.
    #[error("message digest must be 32 bytes, got {0}")]
    InvalidDigestLength(usize),

    /// The deterministic-nonce retry loop hit its attempt bound.
    #[error("no acceptable signature found within {0} nonce attempts")]
    NonceExhausted(u32),

    /// No y-coordinate with the requested parity satisfies the curve equation.
    #[error("x-coordinate has no curve point with the requested parity")]
    PointNotOnCurve,

    /// A recovery candidate's x-coordinate `r + n` is not below the field prime.
    #[error("reconstructed R.x is not below the field prime")]
    RxOutOfRange,

    /// The candidate R failed the subgroup-order check, or recovery produced
    /// the point at infinity.
    #[error("recovered point is not a valid public key candidate")]
    InvalidRecoveryPoint,

    /// None of the four recovery candidates matched the expected key.
    #[error("no recovery index reproduces the expected public key")]
    RecoveryNotFound,

    #[error("recovery index {0} is outside 0..=3")]
    InvalidRecoveryIndex(u8),

    #[error("recovery byte {0} is outside 27..=34")]
    InvalidRecoveryByte(u8),

    #[error("compact signature must be 65 bytes, got {0}")]
    InvalidSignatureLength(usize),

    /// `r` or `s` is zero or not below the curve order.
    #[error("signature scalar is zero or not below the curve order")]
    InvalidScalar,

    #[error("private key is zero or not below the curve order")]
    InvalidPrivateKey,

    #[error("invalid public key encoding")]
    InvalidPublicKey,

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for SignatureError {
    fn from(e: hex::FromHexError) -> Self {
        Self::InvalidHex(e.to_string())
    }
}

/// Type alias for results that may return a [`SignatureError`].
pub type Result<T> = std::result::Result<T, SignatureError>;
