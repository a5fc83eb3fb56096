//! Configuration system.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod generation_config;
pub mod nullsafe_config;
pub mod scan_config;

pub use generation_config::GenerationConfig;
pub use nullsafe_config::{ConfigOverrides, NullSafeConfig};
pub use scan_config::ScanConfig;
