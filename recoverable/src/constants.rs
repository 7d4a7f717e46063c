//! Sizes and wire constants of the compact signature format.

/// Size of a message digest accepted by the signer and recovery routines.
pub const DIGEST_SIZE: usize = 32;

/// Size of a big-endian `r` or `s` component.
pub const SCALAR_SIZE: usize = 32;

/// Size of a serialized secret signing key in bytes.
pub const SK_SIZE: usize = 32;

/// Size of a compressed public verifying key in bytes.
pub const PK_SIZE: usize = curve::COMPRESSED_POINT_SIZE;

/// Size of a compact signature in bytes.
///
/// A signature consists of:
/// - the recovery byte (1 byte)
/// - `r` (32 bytes, big-endian)
/// - `s` (32 bytes, big-endian)
/// Total: 65 bytes
pub const SIG_SIZE: usize = 1 + 2 * SCALAR_SIZE;

/// Offset added to every recovery byte ("compact" marker).
pub const RECOVERY_BYTE_BASE: u8 = 27;

/// Added to the recovery byte when the signer's key is in compressed form.
/// Signatures produced here always set it.
pub const COMPRESSED_FLAG: u8 = 4;

/// Largest valid recovery byte: base, compressed flag and index 3.
pub const MAX_RECOVERY_BYTE: u8 = RECOVERY_BYTE_BASE + COMPRESSED_FLAG + 3;

/// Default bound on deterministic-nonce attempts per signature.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4096;
