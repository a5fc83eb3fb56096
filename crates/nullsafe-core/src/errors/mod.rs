//! Error handling for the generator.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod emit_error;
pub mod error_code;
pub mod parse_error;
pub mod pipeline_error;
pub mod provider_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use emit_error::EmitError;
pub use error_code::NullSafeErrorCode;
pub use parse_error::ParseError;
pub use pipeline_error::{PipelineError, PipelineResult};
pub use provider_error::ProviderError;
pub use scan_error::ScanError;
