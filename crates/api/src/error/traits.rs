//! Error handling traits for the k1curve ecosystem

use super::types::{Error, Result};

/// Extension trait for Result types
pub trait ResultExt<T>: Sized {
    /// Replace the context of the error, if any
    fn with_context(self, context: &'static str) -> Result<T>;

    /// Collapse any error into `false`, keeping a successful boolean as is
    ///
    /// Used by verification paths, which must be total over adversarial input.
    fn or_reject(self) -> bool
    where
        T: Into<bool>;
}

impl<T> ResultExt<T> for core::result::Result<T, Error> {
    fn with_context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn or_reject(self) -> bool
    where
        T: Into<bool>,
    {
        match self {
            Ok(accepted) => accepted.into(),
            Err(_) => false,
        }
    }
}
