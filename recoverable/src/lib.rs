//! Recoverable ECDSA signatures over secp256k1 in the 65-byte compact form.
//!
//! This library implements:
//! - Deterministic signing with RFC 6979 nonces and a bounded retry loop that
//!   only accepts fixed-width, canonical encodings
//! - Public-key recovery from `(r, s, recovery index)` and a 32-byte digest
//! - The recovery-index solver that picks which of the four candidates
//!   matches the signer's key
//! - Point decompression for the curve's base field
//!
//! # Example
//!
//! ```
//! use recoverable::{Signature, SigningKey};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let signing_key = SigningKey::random(&mut rng);
//! let verifying_key = signing_key.verifying_key();
//!
//! let signature = signing_key.sign_message(b"transfer 10").expect("signing failed");
//! assert!(signature.is_canonical());
//!
//! // Send the hex string, recover the key on the other side.
//! let received: Signature = signature.to_hex().parse().expect("valid hex");
//! let recovered = received
//!     .recover_public_key_from_message(b"transfer 10")
//!     .expect("recovery failed");
//! assert_eq!(recovered, verifying_key);
//! ```
//!
//! # Security Considerations
//!
//! - Recovery alone does not authenticate: compare the recovered key with
//!   the one you expect, or verify against it
//! - Nonces are derived from the key and digest, so signing needs no RNG
//! - Protect the signing key from unauthorized access

mod config;
mod constants;
mod decompress;
mod errors;
mod keys;
mod nonce;
mod observer;
mod recovery;
mod signatures;
mod signer;


pub use config::SignerConfig;
pub use constants::{
    COMPRESSED_FLAG, DEFAULT_MAX_ATTEMPTS, DIGEST_SIZE, MAX_RECOVERY_BYTE, PK_SIZE,
    RECOVERY_BYTE_BASE, SCALAR_SIZE, SIG_SIZE, SK_SIZE,
};
pub use decompress::{decompress, decompress_point};
pub use errors::{Result, SignatureError};
pub use keys::{SigningKey, VerifyingKey};
pub use nonce::{Rfc6979, attempt_digest};
pub use observer::{NoopObserver, RecordingObserver, RejectReason, SigningEvent, SigningObserver};
pub use recovery::{
    RECOVERY_CANDIDATES, recover_point, solve_recovery_index, solve_recovery_index_with,
    truncate_digest,
};
pub use signatures::Signature;
pub use signer::Signer;
