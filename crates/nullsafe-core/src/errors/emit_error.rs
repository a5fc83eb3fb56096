//! Emission errors.

use std::path::PathBuf;

use super::error_code::{self, NullSafeErrorCode};

/// Errors that can occur while writing a wrapper class to its target.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Failed to write {class_name} to {path}: {source}")]
    Io {
        class_name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Target rejected {class_name}: {message}")]
    Rejected { class_name: String, message: String },
}

impl EmitError {
    /// Simple name of the wrapper class that failed.
    pub fn class_name(&self) -> &str {
        match self {
            Self::Io { class_name, .. } | Self::Rejected { class_name, .. } => class_name,
        }
    }
}

impl NullSafeErrorCode for EmitError {
    fn error_code(&self) -> &'static str {
        error_code::EMIT_ERROR
    }
}
