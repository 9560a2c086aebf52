//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Text rendering of manifests and generation results
//!
//! JSON events are written by the binary's `ui::json` module.

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands, GenerateArgs};
pub use output::TextRenderer;
