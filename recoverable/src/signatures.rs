//! The 65-byte compact signature and its canonical-form check.

use core::fmt;
use core::str::FromStr;

use curve::ScalarField;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{
    COMPRESSED_FLAG, MAX_RECOVERY_BYTE, RECOVERY_BYTE_BASE, SCALAR_SIZE, SIG_SIZE,
};
use crate::errors::{Result, SignatureError};
use crate::keys::VerifyingKey;
use crate::recovery::recover_point;

/// A recoverable ECDSA signature in compact form.
///
/// # Wire format
///
/// ```text
/// [recovery byte] [r: 32 bytes BE] [s: 32 bytes BE]
/// ```
///
/// The recovery byte is `27 + 4 + index`, where `4` marks a compressed
/// public key and `index` (0 to 3) selects which of the candidate keys
/// recovered from `(r, s)` signed the digest.
///
/// Serialized through serde as the lowercase hex of the 65 bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Signature {
    r: ScalarField,
    s: ScalarField,
    recovery_byte: u8,
}

impl Signature {
    /// Assembles a signature from its components.
    ///
    /// # Errors
    ///
    /// - [`SignatureError::InvalidScalar`] if `r` or `s` is zero
    /// - [`SignatureError::InvalidRecoveryByte`] if `recovery_byte` is outside `27..=34`
    pub fn from_parts(r: ScalarField, s: ScalarField, recovery_byte: u8) -> Result<Self> {
        if r.is_zero() || s.is_zero() {
            return Err(SignatureError::InvalidScalar);
        }
        if !(RECOVERY_BYTE_BASE..=MAX_RECOVERY_BYTE).contains(&recovery_byte) {
            return Err(SignatureError::InvalidRecoveryByte(recovery_byte));
        }
        Ok(Self { r, s, recovery_byte })
    }

    /// Builds a signature for a compressed key from a recovery index in `0..=3`.
    pub fn from_recovery_index(r: ScalarField, s: ScalarField, recovery_index: u8) -> Result<Self> {
        if recovery_index > 3 {
            return Err(SignatureError::InvalidRecoveryIndex(recovery_index));
        }
        Self::from_parts(r, s, RECOVERY_BYTE_BASE + COMPRESSED_FLAG + recovery_index)
    }

    #[inline]
    pub fn r(&self) -> &ScalarField {
        &self.r
    }

    #[inline]
    pub fn s(&self) -> &ScalarField {
        &self.s
    }

    #[inline]
    pub fn recovery_byte(&self) -> u8 {
        self.recovery_byte
    }

    /// The two low bits of the recovery byte after removing the base.
    #[inline]
    pub fn recovery_index(&self) -> u8 {
        (self.recovery_byte - RECOVERY_BYTE_BASE) & 3
    }

    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.recovery_byte - RECOVERY_BYTE_BASE >= COMPRESSED_FLAG
    }

    /// `[recovery byte] || r || s`, with `r` and `s` left-padded to 32 bytes.
    pub fn to_bytes(&self) -> [u8; SIG_SIZE] {
        let mut out = [0u8; SIG_SIZE];
        out[0] = self.recovery_byte;
        out[1..1 + SCALAR_SIZE].copy_from_slice(&self.r.to_be_bytes());
        out[1 + SCALAR_SIZE..].copy_from_slice(&self.s.to_be_bytes());
        out
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Decodes the 65-byte compact form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIG_SIZE {
            return Err(SignatureError::InvalidSignatureLength(bytes.len()));
        }
        let r = ScalarField::from_be_bytes(&bytes[1..1 + SCALAR_SIZE])
            .map_err(|_| SignatureError::InvalidScalar)?;
        let s = ScalarField::from_be_bytes(&bytes[1 + SCALAR_SIZE..])
            .map_err(|_| SignatureError::InvalidScalar)?;
        Self::from_parts(r, s, bytes[0])
    }

    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_bytes(&hex::decode(s)?)
    }

    /// Byte-level canonical-form check over the 65-byte encoding.
    ///
    /// Requires byte 0 non-zero with the high bit clear, byte 1 with the high
    /// bit clear, byte 32 non-zero with the high bit clear, and byte 33 with
    /// the high bit clear.
    pub fn is_canonical(&self) -> bool {
        let c = self.to_bytes();
        c[0] & 0x80 == 0
            && c[0] != 0
            && c[1] & 0x80 == 0
            && c[32] & 0x80 == 0
            && c[32] != 0
            && c[33] & 0x80 == 0
    }

    /// Recovers the signer's key from a 32-byte digest and the embedded index.
    ///
    /// Recovery alone does not prove the signature valid; compare the result
    /// against a known key or call [`VerifyingKey::verify_digest`].
    pub fn recover_public_key(&self, digest: &[u8]) -> Result<VerifyingKey> {
        let point = recover_point(&self.r, &self.s, digest, self.recovery_index(), false)?;
        VerifyingKey::from_affine(point)
    }

    /// Hashes `msg` with SHA-256 and recovers the signer's key.
    pub fn recover_public_key_from_message(&self, msg: &[u8]) -> Result<VerifyingKey> {
        self.recover_public_key(&Sha256::digest(msg))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Signature {
    type Error = SignatureError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Signature> for String {
    fn from(sig: Signature) -> Self {
        sig.to_hex()
    }
}
