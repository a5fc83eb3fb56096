//! Writes rendered wrapper classes under an output directory.

use std::fs;
use std::path::{Path, PathBuf};

use nullsafe_core::errors::EmitError;
use nullsafe_core::model::WrapperClass;

use super::{CodeEmitter, EmittedFile, JavaRenderer};

/// Emits `<out_dir>/<package as dirs>/<Name>.java`.
#[derive(Debug, Clone)]
pub struct FileEmitter {
    out_dir: PathBuf,
    renderer: JavaRenderer,
}

impl FileEmitter {
    pub fn new(out_dir: impl Into<PathBuf>, renderer: JavaRenderer) -> Self {
        Self {
            out_dir: out_dir.into(),
            renderer,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Destination path for a class.
    pub fn path_for(&self, class: &WrapperClass) -> PathBuf {
        let mut path = self.out_dir.clone();
        if let Some(pkg) = &class.package {
            path.extend(pkg.split('.'));
        }
        path.push(format!("{}.java", class.name));
        path
    }
}

impl CodeEmitter for FileEmitter {
    fn emit(&mut self, class: &WrapperClass) -> Result<EmittedFile, EmitError> {
        let path = self.path_for(class);
        let io_err = |source| EmitError::Io {
            class_name: class.name.clone(),
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let source = self.renderer.render(class);
        fs::write(&path, &source).map_err(io_err)?;

        tracing::debug!(class = %class.name, path = %path.display(), "wrote wrapper class");
        Ok(EmittedFile {
            class_name: class.name.clone(),
            qualified_name: class.qualified_name(),
            bytes: source.len(),
            path: Some(path),
        })
    }
}
