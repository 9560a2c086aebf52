//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config, --project-root) are inherited by all subcommands
//! - Running without a subcommand is the same as `icongen generate`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// icongen - render the application's SVG icons to PNG with rsvg-convert
#[derive(Parser, Debug)]
#[command(name = "icongen")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'icongen' without arguments to generate every icon.")]
pub struct Cli {
    /// Output format for CI (one JSON event per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ./icongen.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory that source and output paths are relative to
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub project_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand to run, defaulting to a plain `generate`.
    pub fn command_or_default(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()))
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Render every icon in the manifest (default)
    Generate(GenerateArgs),

    /// Print the icon manifest
    List,

    /// Verify rsvg-convert and every source SVG are present
    Check,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Fail an icon when rsvg-convert exits unsuccessfully
    #[arg(long)]
    pub strict: bool,

    /// Parallel conversions (0 = one per CPU)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Show what would be generated without running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Only generate these icons
    #[arg(long, value_delimiter = ',', value_name = "NAME")]
    pub only: Vec<String>,
}
