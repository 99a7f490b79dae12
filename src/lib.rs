//! # k1curve
//!
//! Prime-field arithmetic, the short Weierstrass group law and ECDSA over
//! secp256k1, written with arbitrary-precision integers for readability.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! k1curve = "0.3"
//! ```
//!
//! ```no_run
//! use k1curve::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let d = k256::generate_private_key(&mut OsRng)?;
//! let q = k256::get_public_key(&d)?;
//! let z = hash_message("hello");
//! let signature = k256::sign(&d, &z, &mut OsRng)?;
//! assert!(k256::verify(&q, &z, &signature));
//! # Ok::<(), k1curve::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `sign` (default): ECDSA signatures
//! - `serde`: `Serialize`/`Deserialize` for field elements, points and
//!   signatures
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`k1curve-api`]: Error type and the `Signature` scheme trait
//! - [`k1curve-common`]: Modular inverse, primality test, scalar sampling
//! - [`k1curve-params`]: secp256k1 and toy curve constants
//! - [`k1curve-algorithms`]: Field elements, points, curves, domain parameters
//! - [`k1curve-sign`]: ECDSA
//!
//! The arithmetic is not constant-time. Do not use it to protect real keys.

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use k1curve_algorithms as algorithms;
pub use k1curve_api as api;
pub use k1curve_common as common;
pub use k1curve_params as params;

// Big integers appear throughout the public API
pub use num_bigint;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use k1curve_sign as sign;

/// Common imports for k1curve users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result, ResultExt};

    // Re-export core traits
    pub use crate::api::Signature as SignatureScheme;

    // Arithmetic
    pub use crate::algorithms::{
        hash_bytes, hash_message, secp256k1, Curve, DomainParameters, FieldElement, Point,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::{k256, Ecdsa, PrivateKey, Secp256k1Ecdsa, Signature};
}
