//! Scanner subsystem: Java source discovery under configured roots.

pub mod ignores;
pub mod walker;

pub use ignores::IgnorePatterns;
pub use walker::{ScanResult, SourceFile, SourceScanner};
