//! Signing and verifying keys over secp256k1.

use core::fmt;

use curve::{Affine, BaseField, Projective, RandomField, ScalarField};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::SignerConfig;
use crate::constants::{PK_SIZE, SK_SIZE};
use crate::decompress::decompress_point;
use crate::errors::{Result, SignatureError};
use crate::recovery::{digest_array, truncate_digest};
use crate::signatures::Signature;
use crate::signer::Signer;

/// A secret signing key: a non-zero scalar below the curve order.
///
/// Importing keys from wallet formats is left to the caller; this type only
/// understands the raw 32-byte big-endian scalar.
///
/// # Example
///
/// ```
/// use recoverable::SigningKey;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let signing_key = SigningKey::random(&mut rng);
/// let restored = SigningKey::from_bytes(&signing_key.to_bytes()).expect("valid key");
/// assert_eq!(signing_key, restored);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u8; 32]", into = "[u8; 32]")]
pub struct SigningKey {
    scalar: ScalarField,
}

/// A public verifying key: a point on secp256k1 other than infinity.
///
/// Serialized in SEC1 compressed form, the encoding the recovery solver
/// compares against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct VerifyingKey {
    point: Affine,
}

impl SigningKey {
    /// Generates a random signing key using the provided random number generator.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            scalar: ScalarField::random(rng),
        }
    }

    /// Parses a 32-byte big-endian scalar in `[1, n)`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let scalar =
            ScalarField::from_be_bytes(bytes).map_err(|_| SignatureError::InvalidPrivateKey)?;
        Self::from_scalar(scalar)
    }

    pub fn from_scalar(scalar: ScalarField) -> Result<Self> {
        if scalar.is_zero() {
            return Err(SignatureError::InvalidPrivateKey);
        }
        Ok(Self { scalar })
    }

    pub fn to_bytes(&self) -> [u8; SK_SIZE] {
        self.scalar.to_be_bytes()
    }

    pub fn as_scalar(&self) -> &ScalarField {
        &self.scalar
    }

    /// Derives the public verifying key `d * G`.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey {
            point: Affine::mul_generator(&self.scalar),
        }
    }

    /// Signs a 32-byte digest with the default [`Signer`] configuration.
    pub fn sign_digest(&self, digest: &[u8]) -> Result<Signature> {
        Signer::new(SignerConfig::default()).sign_digest(digest, self)
    }

    /// Hashes `msg` with SHA-256 and signs the digest.
    pub fn sign_message(&self, msg: &[u8]) -> Result<Signature> {
        Signer::new(SignerConfig::default()).sign_message(msg, self)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

impl TryFrom<[u8; SK_SIZE]> for SigningKey {
    type Error = SignatureError;

    fn try_from(bytes: [u8; SK_SIZE]) -> Result<Self> {
        Self::from_bytes(&bytes)
    }
}

impl From<SigningKey> for [u8; SK_SIZE] {
    fn from(key: SigningKey) -> Self {
        key.to_bytes()
    }
}

impl VerifyingKey {
    /// Wraps a curve point, rejecting infinity and points off the curve.
    pub fn from_affine(point: Affine) -> Result<Self> {
        if point.is_infinity() || !point.is_on_curve() {
            return Err(SignatureError::InvalidPublicKey);
        }
        Ok(Self { point })
    }

    /// Parses a SEC1 encoding: 33-byte compressed or 65-byte uncompressed.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        match (bytes.len(), bytes.first()) {
            (PK_SIZE, Some(0x02 | 0x03)) => {
                let x = BaseField::from_be_bytes(&bytes[1..])
                    .map_err(|_| SignatureError::InvalidPublicKey)?;
                let point = decompress_point(&x, bytes[0] == 0x03)
                    .map_err(|_| SignatureError::InvalidPublicKey)?;
                Self::from_affine(point)
            }
            (curve::UNCOMPRESSED_POINT_SIZE, Some(0x04)) => {
                let x = BaseField::from_be_bytes(&bytes[1..33])
                    .map_err(|_| SignatureError::InvalidPublicKey)?;
                let y = BaseField::from_be_bytes(&bytes[33..])
                    .map_err(|_| SignatureError::InvalidPublicKey)?;
                Self::from_affine(Affine::new(x, y))
            }
            _ => Err(SignatureError::InvalidPublicKey),
        }
    }

    pub fn to_compressed(&self) -> [u8; PK_SIZE] {
        self.point.to_compressed()
    }

    pub fn to_uncompressed(&self) -> [u8; curve::UNCOMPRESSED_POINT_SIZE] {
        self.point.to_uncompressed()
    }

    pub fn as_affine(&self) -> &Affine {
        &self.point
    }

    /// Standard ECDSA verification of `sig` over a 32-byte digest.
    ///
    /// Checks `x(u1 * G + u2 * Q) mod n == r` with `u1 = e / s` and
    /// `u2 = r / s`. The recovery byte plays no part in verification.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the signature is valid
    /// - `Ok(false)` if the signature is invalid
    /// - `Err(SignatureError::InvalidDigestLength)` if `digest` is not 32 bytes
    pub fn verify_digest(&self, digest: &[u8], sig: &Signature) -> Result<bool> {
        let digest = digest_array(digest)?;
        let s_inv = sig.s().try_inverse().ok_or(SignatureError::InvalidScalar)?;

        let e = truncate_digest(digest);
        let u1 = &e * &s_inv;
        let u2 = sig.r() * &s_inv;

        let point = Projective::double_scalar_mul_basepoint(
            &u1,
            &u2,
            &Projective::from_affine(&self.point),
        );
        if point.is_infinity() {
            return Ok(false);
        }

        let x = point.to_affine().x;
        Ok(ScalarField::from_biguint_reduced(x.as_biguint()) == *sig.r())
    }

    /// Hashes `msg` with SHA-256 and verifies the digest.
    pub fn verify_message(&self, msg: &[u8], sig: &Signature) -> Result<bool> {
        self.verify_digest(&Sha256::digest(msg), sig)
    }
}

impl From<&SigningKey> for VerifyingKey {
    /// Converts a reference to a signing key into a verifying key.
    ///
    /// This is equivalent to calling `signing_key.verifying_key()`.
    fn from(sk: &SigningKey) -> Self {
        sk.verifying_key()
    }
}

impl TryFrom<Vec<u8>> for VerifyingKey {
    type Error = SignatureError;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_sec1_bytes(&bytes)
    }
}

impl From<VerifyingKey> for Vec<u8> {
    fn from(key: VerifyingKey) -> Self {
        key.to_compressed().to_vec()
    }
}
