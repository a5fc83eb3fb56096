//! nullsafe-codegen: null-safe wrapper class generation for Java sources
//!
//! For every class carrying the marker annotation, generates a companion
//! `NullSafe<Name>` class whose static methods return `null` as soon as any
//! reference argument is `null`, and otherwise delegate to the original.
//!
//! - Scanner: Java source discovery with gitignore-aware filtering
//! - Parsers: tree-sitter Java declarations, members, and Javadoc
//! - Provider: marked-type metadata with inherited members flattened
//! - Generation: eligibility, signature transcription, class assembly
//! - Emit: Java rendering and file output
//! - Pipeline: the generation pass and its diagnostics

pub mod emit;
pub mod generation;
pub mod parsers;
pub mod pipeline;
pub mod provider;
pub mod scanner;

// Re-exports for convenience
pub use emit::{CodeEmitter, EmittedFile, FileEmitter, InMemoryEmitter, JavaRenderer};
pub use generation::{is_eligible, is_eligible_method, transcribe, WrapperClassBuilder};
pub use parsers::{JavaParser, ParsedFile, ParsedType};
pub use pipeline::{generate, GenerationReport, Generator};
pub use provider::{MetadataProvider, SourceIndex};
pub use scanner::{ScanResult, SourceFile, SourceScanner};
