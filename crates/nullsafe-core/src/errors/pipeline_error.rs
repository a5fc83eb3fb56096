//! Pipeline errors and non-fatal error collection.

use super::error_code::NullSafeErrorCode;
use super::{ConfigError, EmitError, ParseError, ProviderError, ScanError};

/// Errors that can occur during a generation pass.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Metadata error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Emit error: {0}")]
    Emit(#[from] EmitError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl NullSafeErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scan(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Provider(e) => e.error_code(),
            Self::Emit(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result of a generation pass that accumulates non-fatal errors.
/// One failing type never aborts the pass, so partial results are normal.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Non-fatal errors collected during the pass.
    pub errors: Vec<PipelineError>,
}

impl<T: Default> PipelineResult<T> {
    /// Create a new pipeline result with no errors.
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the result.
    pub fn add_error(&mut self, error: impl Into<PipelineError>) {
        self.errors.push(error.into());
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of non-fatal errors.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
