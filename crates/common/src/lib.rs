//! Common implementations and shared functionality for the k1curve library
//!
//! This crate provides the big-integer helpers used by both the curve
//! arithmetic and the signature crates: modular inversion by the extended
//! Euclidean algorithm, a Miller-Rabin probable-prime test, and uniform
//! scalar sampling from a caller-supplied RNG.

pub mod math_common;
pub mod random;

pub use math_common::{is_probable_prime, mod_inv, mod_sub};
pub use random::random_scalar;
