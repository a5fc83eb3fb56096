//! Metadata provider errors.

use super::error_code::{self, NullSafeErrorCode};

/// Errors raised when a marked type cannot be resolved into metadata.
/// Each one stops generation for that type only.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("No declaration found for marked type {qualified_name}")]
    TypeNotFound { qualified_name: String },

    #[error("Marked type {qualified_name} is a {kind}, not a class")]
    NotAClass { qualified_name: String, kind: String },
}

impl NullSafeErrorCode for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TypeNotFound { .. } => error_code::TYPE_NOT_FOUND,
            Self::NotAClass { .. } => error_code::NOT_A_CLASS,
        }
    }
}
