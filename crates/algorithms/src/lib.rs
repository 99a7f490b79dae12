//! Prime-field arithmetic and elliptic curve group law
//!
//! This crate provides the arithmetic core of k1curve:
//!
//! - [`field::FieldElement`]: elements of a prime field F_p held as reduced
//!   big integers
//! - [`ec::Point`], [`ec::Curve`]: affine points and the group law of a short
//!   Weierstrass curve y² = x³ + ax + b
//! - [`ec::DomainParameters`]: a curve together with a generator of known
//!   order, with the secp256k1 instance available process-wide
//! - [`hash`]: SHA-256 message hashing into big integers
//!
//! The arithmetic is written for clarity. It is not constant-time and must
//! not be used to protect real keys.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Prime field arithmetic
pub mod field;
pub use field::FieldElement;

// Elliptic curve group law and domain parameters
pub mod ec;
pub use ec::{secp256k1, Curve, DomainParameters, Point};

// Message hashing
pub mod hash;
pub use hash::{hash_bytes, hash_message};
