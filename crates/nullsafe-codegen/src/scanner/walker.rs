//! Source walker: collects `.java` files from one or more roots.

use std::fs;
use std::path::{Path, PathBuf};

use nullsafe_core::errors::ScanError;
use nullsafe_core::ScanConfig;

use super::ignores::IgnorePatterns;

/// A Java source file read from disk. Content is raw bytes; decoding is
/// left to the parser stage.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

/// Files found plus non-fatal problems encountered on the way.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub files: Vec<SourceFile>,
    pub errors: Vec<ScanError>,
    pub skipped_too_large: usize,
}

pub struct SourceScanner {
    config: ScanConfig,
}

impl SourceScanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Walk every source root. Missing roots and unreadable files are
    /// recorded as errors; the walk continues. Files come back sorted by path.
    pub fn scan(&self) -> ScanResult {
        let mut result = ScanResult::default();

        for root in self.config.effective_source_roots() {
            if !root.is_dir() {
                result.errors.push(ScanError::RootNotFound { path: root });
                continue;
            }
            let ignores = IgnorePatterns::new(
                &root,
                &self.config.extra_ignore,
                self.config.effective_respect_gitignore(),
            );
            let mut paths = Vec::new();
            self.walk_dir(&root, &root, &ignores, &mut paths, &mut result.errors);
            paths.sort();

            for path in paths {
                match self.read_file(&path) {
                    Ok(Some(content)) => result.files.push(SourceFile { path, content }),
                    Ok(None) => result.skipped_too_large += 1,
                    Err(e) => result.errors.push(e),
                }
            }
        }

        tracing::debug!(
            files = result.files.len(),
            errors = result.errors.len(),
            skipped = result.skipped_too_large,
            "source scan complete"
        );
        result
    }

    fn walk_dir(
        &self,
        root: &Path,
        dir: &Path,
        ignores: &IgnorePatterns,
        files: &mut Vec<PathBuf>,
        errors: &mut Vec<ScanError>,
    ) {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(source) => {
                errors.push(ScanError::Io {
                    path: dir.to_path_buf(),
                    source,
                });
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let relative = path.strip_prefix(root).unwrap_or(&path);

            if path.is_dir() {
                if !ignores.is_ignored(relative, true) {
                    self.walk_dir(root, &path, ignores, files, errors);
                }
            } else if path.is_file()
                && is_java_source(&path)
                && !ignores.is_ignored(relative, false)
            {
                files.push(path);
            }
        }
    }

    fn read_file(&self, path: &Path) -> Result<Option<Vec<u8>>, ScanError> {
        let io_err = |source| ScanError::Io {
            path: path.to_path_buf(),
            source,
        };
        let size = fs::metadata(path).map_err(io_err)?.len();
        if size > self.config.effective_max_file_size() {
            tracing::debug!(path = %path.display(), size, "skipping oversized source file");
            return Ok(None);
        }
        fs::read(path).map(Some).map_err(io_err)
    }
}

fn is_java_source(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("java")
}
