//! In-memory emitter for dry runs and tests.

use nullsafe_core::errors::EmitError;
use nullsafe_core::model::WrapperClass;

use super::{CodeEmitter, EmittedFile, JavaRenderer};

/// Keeps rendered sources in memory, keyed by qualified class name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmitter {
    renderer: JavaRenderer,
    sources: Vec<(String, String)>,
}

impl InMemoryEmitter {
    pub fn new(renderer: JavaRenderer) -> Self {
        Self {
            renderer,
            sources: Vec::new(),
        }
    }

    /// Rendered source for a generated class.
    pub fn source(&self, qualified_name: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|(name, _)| name == qualified_name)
            .map(|(_, source)| source.as_str())
    }

    /// Qualified names in emission order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl CodeEmitter for InMemoryEmitter {
    fn emit(&mut self, class: &WrapperClass) -> Result<EmittedFile, EmitError> {
        let qualified_name = class.qualified_name();
        if self.source(&qualified_name).is_some() {
            return Err(EmitError::Rejected {
                class_name: class.name.clone(),
                message: format!("{qualified_name} was already emitted"),
            });
        }
        let source = self.renderer.render(class);
        let bytes = source.len();
        self.sources.push((qualified_name.clone(), source));
        Ok(EmittedFile {
            class_name: class.name.clone(),
            qualified_name,
            path: None,
            bytes,
        })
    }
}
