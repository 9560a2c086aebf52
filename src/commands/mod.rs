//! Subcommand implementations for the icongen binary

pub mod check;
pub mod generate;
pub mod list;

use std::process::ExitCode;

use icongen::GenerateReport;

/// Exit status after an interrupted run
pub const EXIT_INTERRUPTED: u8 = 130;

/// Exit status when `--strict` saw failed icons
pub const EXIT_STRICT_FAILURE: u8 = 2;

/// Map a finished run to the process exit status.
pub fn exit_code_for(report: &GenerateReport, strict: bool) -> ExitCode {
    if report.was_cancelled() {
        ExitCode::from(EXIT_INTERRUPTED)
    } else if strict && report.failed() > 0 {
        ExitCode::from(EXIT_STRICT_FAILURE)
    } else {
        ExitCode::SUCCESS
    }
}
