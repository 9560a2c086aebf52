//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::IconResult;
use crate::generator::{FailurePolicy, GenerateOptions};
use crate::manifest::{PathLayout, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR};
use crate::rasterizer::{DEFAULT_HEIGHT_FLAG, DEFAULT_PROGRAM};

use super::loader::{self, ConfigWarning};

/// Source and output directories, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_source_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_DIR)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// External tool settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterizerConfig {
    /// Program name looked up on PATH, or a path to it
    #[serde(default = "default_program")]
    pub program: String,

    /// Flag that sets the output height
    #[serde(default = "default_height_flag")]
    pub height_flag: String,
}

impl Default for RasterizerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            height_flag: default_height_flag(),
        }
    }
}

fn default_program() -> String {
    DEFAULT_PROGRAM.to_string()
}

fn default_height_flag() -> String {
    DEFAULT_HEIGHT_FLAG.to_string()
}

/// Generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Treat a non-zero tool exit as a failure
    #[serde(default)]
    pub strict: bool,

    /// Parallel conversions; 0 = one per CPU
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            strict: false,
            jobs: default_jobs(),
        }
    }
}

fn default_jobs() -> usize {
    1
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Raise the level by the number of `-v` flags.
    pub fn raised_by(self, count: u8) -> Self {
        match (self as u8).saturating_add(count) {
            0 => Verbosity::Quiet,
            1 => Verbosity::Normal,
            2 => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub rasterizer: RasterizerConfig,

    #[serde(default)]
    pub generate: GenerateConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> IconResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> IconResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ICONGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        if self.generate.strict {
            FailurePolicy::Strict
        } else {
            FailurePolicy::Lenient
        }
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            policy: self.failure_policy(),
            jobs: self.generate.jobs,
        }
    }

    /// Source and output directories resolved against `root`
    pub fn layout(&self, root: &Path) -> PathLayout {
        PathLayout::new(root, &self.paths.source_dir, &self.paths.output_dir)
    }
}
