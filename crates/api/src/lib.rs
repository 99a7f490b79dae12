//! Public API traits and types for the k1curve library
//!
//! This crate provides the public API surface shared by the k1curve crates:
//! the error taxonomy, the `Result` alias and the signature scheme trait.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::Signature;

// Re-export trait modules for direct access
pub use traits::signature;
