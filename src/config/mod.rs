//! Configuration module for icongen
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ICONGEN_*)
//! 3. Project config (icongen.toml, or --config)
//! 4. User config (~/.config/icongen/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_layered, user_config_path, with_env_overrides, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, GenerateConfig, OutputConfig, PathsConfig, RasterizerConfig, Verbosity};
