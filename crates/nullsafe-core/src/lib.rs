//! nullsafe-core: shared foundation for the null-safe wrapper generator.
//!
//! - Model: marked types, member declarations, wrapper classes
//! - Errors: one `thiserror` enum per subsystem
//! - Config: layered TOML configuration
//! - Events: diagnostic side channel for generation passes
//! - Tracing: subscriber setup

pub mod config;
pub mod errors;
pub mod events;
pub mod model;
pub mod tracing;

pub use config::{ConfigOverrides, GenerationConfig, NullSafeConfig, ScanConfig};
pub use errors::{NullSafeErrorCode, PipelineError, PipelineResult};
pub use model::{
    Annotation, ElementKind, MarkedType, Member, MethodDeclaration, Modifier, Modifiers,
    Parameter, PrimitiveType, Statement, TypeDescriptor, TypeKind, WrapperClass, WrapperMethod,
};
