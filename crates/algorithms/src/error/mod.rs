//! Error handling for field and curve arithmetic
//!
//! The error type itself lives in `k1curve-api` so that every crate in the
//! workspace reports the same taxonomy.

pub use k1curve_api::error::{CurveResult, FieldResult, KeyResult, ResultExt};
pub use k1curve_api::error::{Error, Result};

// Include the validation submodule
pub mod validate;
