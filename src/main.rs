//! icongen CLI - render the application's SVG icons to PNG
//!
//! Usage: icongen [COMMAND]
//!
//! Commands:
//!   generate  Render every icon in the manifest (default)
//!   list      Print the icon manifest
//!   check     Verify rsvg-convert and every source SVG are present

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use icongen::config::load_layered;
use icongen::presentation::{Cli, Commands};

mod commands;
mod ui;

use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            ui::error::print_error(&err, json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let project_root = cli
        .project_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let loaded = load_layered(&project_root, cli.config.as_deref())?;
    let verbosity = loaded.config.output.verbosity.raised_by(cli.verbose);
    let ui = UiContext::new(cli.json, verbosity);

    if !cli.json {
        ui::output::print_config_warnings(&loaded.warnings);
    }
    if ui.is_debug() {
        for source in &loaded.sources {
            eprintln!("[DEBUG] config: {}", source.display());
        }
    }

    let config = &loaded.config;
    match cli.command_or_default() {
        Commands::Generate(args) => {
            commands::generate::cmd_generate(&args, config, &project_root, &ui)
        }
        Commands::List => {
            commands::list::cmd_list(config, &project_root, &ui)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => {
            if commands::check::cmd_check(config, &project_root, &ui)? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
