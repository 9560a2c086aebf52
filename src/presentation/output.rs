//! Output Rendering
//!
//! Human-readable rendering of manifests and generation results. Everything
//! writes to a caller-supplied `Write` so the binary can target stdout and
//! tests can capture the text.

use std::io::{self, Write};
use std::path::Path;

use crate::config::Verbosity;
use crate::generator::{GenerateReport, IconOutcome, IconStatus};
use crate::manifest::Manifest;

/// Icons for output rendering
struct Icons {
    check: &'static str,
    cross: &'static str,
    write: &'static str,
    skip: &'static str,
    warn: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            write: "→",
            skip: "○",
            warn: "⚠",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            write: "->",
            skip: "[ ]",
            warn: "[!]",
        }
    }
}

/// Text renderer for generation output
pub struct TextRenderer {
    /// Whether to use unicode
    pub unicode: bool,
    pub verbosity: Verbosity,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            unicode: true,
            verbosity: Verbosity::Normal,
        }
    }
}

impl TextRenderer {
    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    /// One line per finished (icon, size). Unchanged artifacts only show up
    /// from `verbose` on, and nothing but failures shows up when quiet.
    pub fn render_outcome(&self, out: &mut impl Write, outcome: &IconOutcome) -> io::Result<()> {
        let icons = self.icons();
        let file = file_label(&outcome.output);

        match outcome.status {
            IconStatus::Failed => writeln!(
                out,
                "  {} {}: {}",
                icons.cross,
                file,
                outcome.error.as_deref().unwrap_or("failed")
            )?,
            _ if self.verbosity == Verbosity::Quiet => {}
            _ if outcome.is_warning() => writeln!(
                out,
                "  {} {}: {}",
                icons.warn,
                file,
                outcome.error.as_deref().unwrap_or_default()
            )?,
            IconStatus::Written => {
                writeln!(out, "  {} {} ({} bytes)", icons.check, file, outcome.bytes)?
            }
            IconStatus::Unchanged if self.verbosity >= Verbosity::Verbose => {
                writeln!(out, "  {} {} unchanged", icons.skip, file)?
            }
            IconStatus::Planned => writeln!(out, "  {} {}", icons.write, file)?,
            IconStatus::Unchanged | IconStatus::Cancelled => {}
        }

        if self.verbosity >= Verbosity::Verbose {
            if let Some(stderr) = &outcome.stderr {
                for line in stderr.lines() {
                    writeln!(out, "      {}", line)?;
                }
            }
        }
        Ok(())
    }

    /// Closing summary for a run.
    pub fn render_summary(
        &self,
        out: &mut impl Write,
        report: &GenerateReport,
        output_dir: &Path,
    ) -> io::Result<()> {
        let icons = self.icons();
        let total = report.outcomes.len();

        if report.planned() > 0 {
            writeln!(out)?;
            writeln!(
                out,
                "Dry run: {} icons would be written to {}",
                report.planned(),
                output_dir.display()
            )?;
            return Ok(());
        }

        if self.verbosity == Verbosity::Quiet && report.is_success() {
            return Ok(());
        }

        writeln!(out)?;
        if report.was_cancelled() {
            writeln!(
                out,
                "{} Interrupted: {} of {} icons skipped",
                icons.cross,
                report.cancelled(),
                total
            )?;
        } else if report.failed() > 0 {
            writeln!(
                out,
                "{} {} of {} icons failed",
                icons.cross,
                report.failed(),
                total
            )?;
        } else if report.written() == 0 {
            writeln!(out, "{} Already up-to-date", icons.check)?;
        } else {
            writeln!(out, "{} Generated {} icons", icons.check, total)?;
        }

        writeln!(out, "  Output: {}", output_dir.display())?;
        writeln!(
            out,
            "  {} written, {} unchanged, {} failed",
            report.written(),
            report.unchanged(),
            report.failed()
        )?;
        if report.warnings() > 0 {
            writeln!(
                out,
                "  {} {} icons written despite rasterizer errors (use --strict to fail them)",
                icons.warn,
                report.warnings()
            )?;
        }
        Ok(())
    }

    /// `name: size, size` per manifest entry.
    pub fn render_manifest(&self, out: &mut impl Write, manifest: &Manifest) -> io::Result<()> {
        for entry in manifest.entries() {
            let sizes: Vec<String> = entry.sizes().iter().map(|s| s.to_string()).collect();
            writeln!(out, "{}: {}", entry.name(), sizes.join(", "))?;
        }
        if self.verbosity >= Verbosity::Verbose {
            writeln!(
                out,
                "\n{} icons, {} files",
                manifest.len(),
                manifest.job_count()
            )?;
        }
        Ok(())
    }

    /// One check line: pass or fail with a detail.
    pub fn render_check(
        &self,
        out: &mut impl Write,
        ok: bool,
        label: &str,
        detail: &str,
    ) -> io::Result<()> {
        let icons = self.icons();
        let icon = if ok { icons.check } else { icons.cross };
        writeln!(out, "  {} {} - {}", icon, label, detail)
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
