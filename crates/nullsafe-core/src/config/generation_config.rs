//! Wrapper generation configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_PREFIX: &str = "NullSafe";
pub const DEFAULT_MARKER: &str = "NullSafe";
pub const DEFAULT_ATTRIBUTION: &str = "@see {origin}";
pub const DEFAULT_INDENT: &str = "  ";
pub const DEFAULT_OUT_DIR: &str = "build/generated/sources/nullsafe";

/// Configuration for wrapper class assembly and rendering.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GenerationConfig {
    /// Prefix prepended to the origin's simple name. Default: `NullSafe`.
    pub prefix: Option<String>,
    /// Simple name of the marker annotation. Default: `NullSafe`.
    pub marker: Option<String>,
    /// Attribution line appended to the class docs; `{origin}` expands to the
    /// origin's qualified name. Default: `@see {origin}`.
    pub attribution: Option<String>,
    /// Indent unit for rendered source. Default: two spaces.
    pub indent: Option<String>,
    /// Directory generated sources are written under.
    pub out_dir: Option<PathBuf>,
}

impl GenerationConfig {
    pub fn effective_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(DEFAULT_PREFIX)
    }

    pub fn effective_marker(&self) -> &str {
        self.marker.as_deref().unwrap_or(DEFAULT_MARKER)
    }

    pub fn effective_indent(&self) -> &str {
        self.indent.as_deref().unwrap_or(DEFAULT_INDENT)
    }

    pub fn effective_out_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    /// Expand the attribution template for one origin type.
    pub fn attribution_for(&self, origin: &str) -> String {
        self.attribution
            .as_deref()
            .unwrap_or(DEFAULT_ATTRIBUTION)
            .replace("{origin}", origin)
    }
}
