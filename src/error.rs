//! Error types for icongen
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for icongen operations
pub type IconResult<T> = Result<T, IconError>;

/// Main error type for icongen operations
#[derive(Error, Debug)]
pub enum IconError {
    /// The rasterization tool is not on the executable search path
    #[error("{program} not found - please make sure librsvg is installed and available in your PATH.")]
    RasterizerNotFound { program: String },

    /// The rasterizer could not be started
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The rasterizer exited unsuccessfully for one icon
    #[error("{program} failed for {name}_{size} ({})", describe_exit(*code))]
    ConversionFailed {
        program: String,
        name: String,
        size: u32,
        code: Option<i32>,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Icon name not present in the manifest
    #[error("unknown icon '{name}' (known icons: {})", known.join(", "))]
    UnknownIcon { name: String, known: Vec<String> },

    /// Manifest entry with a zero or missing size
    #[error("icon '{name}' must request at least one positive size")]
    InvalidSize { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IconError {
    /// Whether this error aborts the whole run rather than one icon
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            IconError::Spawn { .. } | IconError::ConversionFailed { .. }
        )
    }
}

/// Human-readable exit status; `None` means the process was killed by a signal.
pub fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
