//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{GenerationConfig, ScanConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const CONFIG_FILE_NAME: &str = "nullsafe.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`NULLSAFE_*`)
/// 3. Project config (`nullsafe.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NullSafeConfig {
    pub scan: ScanConfig,
    pub generation: GenerationConfig,
}

/// Programmatic overrides, typically from a build script.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source_roots: Option<Vec<PathBuf>>,
    pub out_dir: Option<PathBuf>,
    pub prefix: Option<String>,
    pub marker: Option<String>,
}

impl NullSafeConfig {
    /// Load configuration for the project rooted at `root`.
    ///
    /// Relative source roots and output directories are resolved against `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;
        config.anchor(root);
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &NullSafeConfig) -> Result<(), ConfigError> {
        if let Some(ref prefix) = config.generation.prefix {
            if !is_java_identifier(prefix) {
                return Err(ConfigError::ValidationFailed {
                    field: "generation.prefix".to_string(),
                    message: format!("`{prefix}` is not a valid Java identifier"),
                });
            }
        }
        if let Some(ref marker) = config.generation.marker {
            if marker.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "generation.marker".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref indent) = config.generation.indent {
            if indent.is_empty() || !indent.chars().all(|c| c == ' ' || c == '\t') {
                return Err(ConfigError::InvalidValue {
                    field: "generation.indent".to_string(),
                    message: "must be spaces or tabs".to_string(),
                });
            }
        }
        if config.scan.max_file_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "scan.max_file_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut NullSafeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: NullSafeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; set values in `other` win.
    fn merge(base: &mut NullSafeConfig, other: &NullSafeConfig) {
        // Scan
        if !other.scan.source_roots.is_empty() {
            base.scan.source_roots = other.scan.source_roots.clone();
        }
        if !other.scan.extra_ignore.is_empty() {
            base.scan.extra_ignore = other.scan.extra_ignore.clone();
        }
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.respect_gitignore.is_some() {
            base.scan.respect_gitignore = other.scan.respect_gitignore;
        }

        // Generation
        if other.generation.prefix.is_some() {
            base.generation.prefix = other.generation.prefix.clone();
        }
        if other.generation.marker.is_some() {
            base.generation.marker = other.generation.marker.clone();
        }
        if other.generation.attribution.is_some() {
            base.generation.attribution = other.generation.attribution.clone();
        }
        if other.generation.indent.is_some() {
            base.generation.indent = other.generation.indent.clone();
        }
        if other.generation.out_dir.is_some() {
            base.generation.out_dir = other.generation.out_dir.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `NULLSAFE_OUT_DIR`, `NULLSAFE_PREFIX`, etc.
    fn apply_env_overrides(config: &mut NullSafeConfig) {
        if let Ok(val) = std::env::var("NULLSAFE_OUT_DIR") {
            config.generation.out_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("NULLSAFE_PREFIX") {
            config.generation.prefix = Some(val);
        }
        if let Ok(val) = std::env::var("NULLSAFE_MARKER") {
            config.generation.marker = Some(val);
        }
        if let Ok(val) = std::env::var("NULLSAFE_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
    }

    /// Apply explicit overrides (highest priority).
    fn apply_overrides(config: &mut NullSafeConfig, overrides: &ConfigOverrides) {
        if let Some(ref v) = overrides.source_roots {
            config.scan.source_roots = v.clone();
        }
        if let Some(ref v) = overrides.out_dir {
            config.generation.out_dir = Some(v.clone());
        }
        if let Some(ref v) = overrides.prefix {
            config.generation.prefix = Some(v.clone());
        }
        if let Some(ref v) = overrides.marker {
            config.generation.marker = Some(v.clone());
        }
    }

    /// Resolve relative paths against the project root.
    fn anchor(&mut self, root: &Path) {
        self.scan.source_roots = self
            .scan
            .effective_source_roots()
            .into_iter()
            .map(|p| if p.is_relative() { root.join(p) } else { p })
            .collect();
        let out_dir = self.generation.effective_out_dir();
        self.generation.out_dir = Some(if out_dir.is_relative() {
            root.join(out_dir)
        } else {
            out_dir
        });
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
