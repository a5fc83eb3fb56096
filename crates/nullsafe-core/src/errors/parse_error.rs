//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, NullSafeErrorCode};

/// Errors that can occur while parsing a Java source file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load Java grammar: {message}")]
    Grammar { message: String },

    #[error("Tree-sitter produced no tree for {path}")]
    NoTree { path: PathBuf },

    #[error("Source {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },
}

impl NullSafeErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Grammar { .. } => error_code::GRAMMAR_ERROR,
            _ => error_code::PARSE_ERROR,
        }
    }
}
