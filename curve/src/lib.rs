//! The secp256k1 elliptic curve, `y^2 = x^3 + 7` over `F_p`.
//!
//! This crate provides the base and scalar fields, affine and homogeneous
//! projective points, and the scalar multiplication routines the signature
//! crate is built on. The curve parameters and generator are fixed to the
//! SEC 2 values in the `affine` module.
//!
//! Multiplication by a secret scalar ([`Group::scalar_mul`], [`mul_generator`])
//! performs the same sequence of group operations for every scalar. The
//! `BigUint` field arithmetic underneath is not constant-time.

mod affine;
mod basefield;
mod field;
mod generator_table;
mod group;
mod msm;
mod projective;
mod random;
mod scalarfield;

pub use affine::{Affine, COMPRESSED_POINT_SIZE, CURVE_B, UNCOMPRESSED_POINT_SIZE};
pub use basefield::BaseField;
pub use field::{FieldError, FIELD_BYTES};
pub use generator_table::mul_generator;
pub use group::{Group, ScalarBits};
pub use msm::double_scalar_mul_basepoint;
pub use num_bigint::BigUint;
pub use projective::Projective;
pub use random::RandomField;
pub use scalarfield::ScalarField;
