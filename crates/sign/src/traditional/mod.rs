//! Traditional signature schemes

pub mod ecdsa;

// Re-export ECDSA types
pub use ecdsa::{Ecdsa, PrivateKey, Secp256k1Ecdsa, Signature};
