//! Trait definitions shared across the k1curve crates

pub mod signature;

pub use signature::Signature;
