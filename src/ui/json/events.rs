//! Shared JSON event types for consistent CLI output.
//!
//! Every line written in `--json` mode is one of these, tagged by `event`.

use std::path::Path;

use icongen::generator::{GenerateReport, IconOutcome};
use icongen::manifest::{IconEntry, PathLayout};
use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rasterizer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            rasterizer: None,
            icons: None,
            jobs: None,
        }
    }

    pub fn with_run(mut self, rasterizer: &Path, icons: usize, jobs: usize) -> Self {
        self.rasterizer = Some(rasterizer.display().to_string());
        self.icons = Some(icons);
        self.jobs = Some(jobs);
        self
    }
}

/// Event emitted once per (icon, size).
#[derive(Debug, Clone, Serialize)]
pub struct IconEvent<'a> {
    pub event: &'static str,
    #[serde(flatten)]
    pub outcome: &'a IconOutcome,
}

impl<'a> IconEvent<'a> {
    pub fn new(outcome: &'a IconOutcome) -> Self {
        Self {
            event: "icon",
            outcome,
        }
    }
}

/// Event emitted by `list`, one per manifest entry.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntryEvent<'a> {
    pub event: &'static str,
    pub name: &'a str,
    pub sizes: &'a [u32],
    pub source: String,
    pub outputs: Vec<String>,
}

impl<'a> ManifestEntryEvent<'a> {
    pub fn new(entry: &'a IconEntry, layout: &PathLayout) -> Self {
        Self {
            event: "manifest_entry",
            name: entry.name(),
            sizes: entry.sizes(),
            source: layout.source_path(entry.name()).display().to_string(),
            outputs: entry
                .sizes()
                .iter()
                .map(|&size| layout.output_path(entry.name(), size).display().to_string())
                .collect(),
        }
    }
}

/// Event emitted by `check`, one per verified item.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEvent<'a> {
    pub event: &'static str,
    pub name: &'a str,
    pub ok: bool,
    pub detail: &'a str,
}

impl<'a> CheckEvent<'a> {
    pub fn new(name: &'a str, ok: bool, detail: &'a str) -> Self {
        Self {
            event: "check",
            name,
            ok,
            detail,
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub written: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unchanged: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub planned: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(command: &'a str, success: bool) -> Self {
        Self {
            event: "complete",
            command,
            success,
            written: None,
            unchanged: None,
            failed: None,
            cancelled: None,
            planned: None,
            duration_ms: None,
        }
    }

    pub fn from_report(command: &'a str, success: bool, report: &GenerateReport) -> Self {
        let mut event = Self::new(command, success);
        if report.planned() > 0 {
            event.planned = Some(report.planned());
            return event;
        }
        event.written = Some(report.written());
        event.unchanged = Some(report.unchanged());
        event.failed = Some(report.failed());
        event.cancelled = Some(report.cancelled());
        event
    }

    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub kind: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(kind: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            kind,
            message: message.into(),
        }
    }
}
