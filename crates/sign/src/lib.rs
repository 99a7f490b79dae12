//! Digital Signature Schemes
//!
//! ECDSA built on the field and curve arithmetic of `k1curve-algorithms`.
//! The secp256k1 functions live in [`traditional::ecdsa::k256`]; the
//! generic [`Ecdsa`] engine runs the same algorithm over any
//! [`k1curve_algorithms::DomainParameters`].

#![forbid(unsafe_code)]

pub mod traditional;

// Re-exports from traditional schemes
pub use traditional::ecdsa::k256;
pub use traditional::{Ecdsa, PrivateKey, Secp256k1Ecdsa, Signature};
