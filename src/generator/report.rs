//! Generation results

use std::path::PathBuf;

use serde::Serialize;

/// What happened to one (icon, size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconStatus {
    /// Artifact created or replaced with new content
    Written,
    /// Artifact already held the same bytes
    Unchanged,
    /// Conversion failed; the artifact was not replaced
    Failed,
    /// Skipped because the run was interrupted
    Cancelled,
    /// Dry run: would have been generated
    Planned,
}

impl IconStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconStatus::Written => "written",
            IconStatus::Unchanged => "unchanged",
            IconStatus::Failed => "failed",
            IconStatus::Cancelled => "cancelled",
            IconStatus::Planned => "planned",
        }
    }
}

/// Result for one (icon, size)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconOutcome {
    pub name: String,
    pub size: u32,
    pub output: PathBuf,
    pub status: IconStatus,
    pub bytes: u64,
    /// Failure message. Also set on written artifacts when the tool exited
    /// unsuccessfully under the lenient policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl IconOutcome {
    pub(crate) fn new(name: &str, size: u32, output: PathBuf, status: IconStatus) -> Self {
        Self {
            name: name.to_string(),
            size,
            output,
            status,
            bytes: 0,
            error: None,
            stderr: None,
        }
    }

    /// Written despite a non-zero tool exit
    pub fn is_warning(&self) -> bool {
        self.error.is_some() && self.status != IconStatus::Failed
    }
}

/// Outcomes of a run, in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateReport {
    pub outcomes: Vec<IconOutcome>,
}

impl GenerateReport {
    fn count(&self, status: IconStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }

    pub fn written(&self) -> usize {
        self.count(IconStatus::Written)
    }

    pub fn unchanged(&self) -> usize {
        self.count(IconStatus::Unchanged)
    }

    pub fn failed(&self) -> usize {
        self.count(IconStatus::Failed)
    }

    pub fn cancelled(&self) -> usize {
        self.count(IconStatus::Cancelled)
    }

    pub fn planned(&self) -> usize {
        self.count(IconStatus::Planned)
    }

    pub fn warnings(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_warning()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &IconOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == IconStatus::Failed)
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0 && self.cancelled() == 0
    }

    pub fn was_cancelled(&self) -> bool {
        self.cancelled() > 0
    }
}
