//! Source scan configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for source discovery.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Directories holding Java sources. Default: `["src/main/java"]`.
    pub source_roots: Vec<PathBuf>,
    /// Additional gitignore-style patterns to skip.
    pub extra_ignore: Vec<String>,
    /// Maximum file size in bytes. Default: 1 MiB.
    pub max_file_size: Option<u64>,
    /// Honor `.gitignore` files in source roots. Default: true.
    pub respect_gitignore: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective source roots, defaulting to `src/main/java`.
    pub fn effective_source_roots(&self) -> Vec<PathBuf> {
        if self.source_roots.is_empty() {
            vec![PathBuf::from("src/main/java")]
        } else {
            self.source_roots.clone()
        }
    }

    /// Returns the effective max file size, defaulting to 1 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1024 * 1024)
    }

    pub fn effective_respect_gitignore(&self) -> bool {
        self.respect_gitignore.unwrap_or(true)
    }
}
