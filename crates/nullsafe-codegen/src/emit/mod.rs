//! Code emission: rendering wrapper classes to Java source and writing them.

pub mod file_emitter;
pub mod java_renderer;
pub mod memory;

pub use file_emitter::FileEmitter;
pub use java_renderer::JavaRenderer;
pub use memory::InMemoryEmitter;

use std::path::PathBuf;

use nullsafe_core::errors::EmitError;
use nullsafe_core::model::WrapperClass;

/// What an emitter produced for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub class_name: String,
    pub qualified_name: String,
    /// Destination on disk, when the emitter writes files.
    pub path: Option<PathBuf>,
    pub bytes: usize,
}

/// Serializes a finished wrapper class to its destination.
pub trait CodeEmitter {
    fn emit(&mut self, class: &WrapperClass) -> Result<EmittedFile, EmitError>;
}

impl<E: CodeEmitter + ?Sized> CodeEmitter for &mut E {
    fn emit(&mut self, class: &WrapperClass) -> Result<EmittedFile, EmitError> {
        (**self).emit(class)
    }
}
