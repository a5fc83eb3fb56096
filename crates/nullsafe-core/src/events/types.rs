//! Event payloads emitted during a generation pass.

use std::path::PathBuf;

/// A pass is starting over the listed marked types.
#[derive(Debug, Clone)]
pub struct PassStartedEvent {
    pub marked_types: Vec<String>,
}

/// A wrapper class was written.
#[derive(Debug, Clone)]
pub struct ClassGeneratedEvent {
    pub class_name: String,
    pub origin: String,
    pub method_count: usize,
    pub path: Option<PathBuf>,
}

/// A marked type produced no class (e.g. it has no members).
#[derive(Debug, Clone)]
pub struct TypeSkippedEvent {
    pub qualified_name: String,
    pub reason: String,
}

/// Metadata for a marked type could not be resolved.
#[derive(Debug, Clone)]
pub struct TypeFailedEvent {
    pub qualified_name: String,
    pub error_code: &'static str,
    pub message: String,
}

/// Writing a wrapper class failed.
#[derive(Debug, Clone)]
pub struct EmitFailedEvent {
    pub class_name: String,
    pub error_code: &'static str,
    pub message: String,
}

/// The pass finished.
#[derive(Debug, Clone)]
pub struct PassCompleteEvent {
    pub generated: usize,
    pub skipped: usize,
    pub failed: usize,
}
