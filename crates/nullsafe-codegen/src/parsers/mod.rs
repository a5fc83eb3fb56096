//! Tree-sitter Java parsing: declarations, members, and Javadoc.

pub mod doc_comment;
pub mod error_tolerant;
pub mod java;
pub mod types;

pub use java::JavaParser;
pub use types::{ParsedFile, ParsedType};
