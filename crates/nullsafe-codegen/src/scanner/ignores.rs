//! Ignore patterns for source discovery.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Directories never holding hand-written sources. Build outputs are
/// anchored to the root: `build` and `out` are legal package names.
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Build outputs (generated wrappers land here too)
    "/build/",
    "/target/",
    "/out/",
    ".gradle/",
    ".m2/",
    // Version control
    ".git",
    ".svn",
    ".hg",
    // IDE/Editor
    ".idea",
    ".vscode",
    ".settings",
];

/// Gitignore-style matcher built from defaults, extra patterns, and the
/// root's own `.gitignore`.
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    pub fn new(root: &Path, extra_patterns: &[String], respect_gitignore: bool) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_DIRS {
            let _ = builder.add_line(None, pattern);
        }

        for pattern in extra_patterns {
            if let Err(e) = builder.add_line(None, pattern) {
                tracing::warn!(pattern = %pattern, error = %e, "ignoring invalid ignore pattern");
            }
        }

        let gitignore = root.join(".gitignore");
        if respect_gitignore && gitignore.exists() {
            if let Some(e) = builder.add(&gitignore) {
                tracing::warn!(path = %gitignore.display(), error = %e, "failed to read .gitignore");
            }
        }

        let gitignore = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to empty ignore set");
            Gitignore::empty()
        });
        Self { gitignore }
    }

    /// Check if a path (relative to the root) should be ignored.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}
