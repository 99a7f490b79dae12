//! Error handling for the k1curve ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

// Specialized result types for different operations
pub type FieldResult<T> = Result<T>;
pub type CurveResult<T> = Result<T>;
pub type KeyResult<T> = Result<T>;
pub type SignatureResult<T> = Result<T>;
