//! ECDSA signatures
//!
//! The textbook Elliptic Curve Digital Signature Algorithm with random
//! nonces drawn from a caller-supplied RNG and Low-S normalisation at
//! signing time. Verification accepts both s and n - s.

pub mod common;
pub mod engine;
pub mod k256;

pub use common::Signature;
pub use engine::Ecdsa;

// Re-export secp256k1 types
pub use k256::{PrivateKey, Secp256k1Ecdsa};
