//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, NullSafeErrorCode};

/// Errors that can occur while discovering source files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Source root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NullSafeErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
