//! NullSafeErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to provide a structured code string
/// for build tooling that greps generator output.
pub trait NullSafeErrorCode {
    /// Returns the error code string (e.g., "EMIT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const GRAMMAR_ERROR: &str = "GRAMMAR_ERROR";
pub const TYPE_NOT_FOUND: &str = "TYPE_NOT_FOUND";
pub const NOT_A_CLASS: &str = "NOT_A_CLASS";
pub const EMIT_ERROR: &str = "EMIT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
