//! Icon generator
//!
//! Runs the rasterizer once per (icon, size) from the manifest and writes each
//! artifact through a temp file + rename. Sequential by default; with
//! `jobs > 1` the manifest is fanned out over a bounded rayon pool, and the
//! report still comes back in manifest order.

mod report;
mod writer;

pub use report::{GenerateReport, IconOutcome, IconStatus};
pub use writer::{hash_file, Committed, PendingArtifact};

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{IconError, IconResult};
use crate::manifest::{IconJob, Manifest, PathLayout};
use crate::rasterizer::Rasterizer;

/// How a non-zero rasterizer exit is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Keep whatever the tool wrote and carry on
    #[default]
    Lenient,
    /// Keep the previous artifact and record the icon as failed
    Strict,
}

/// Options for a generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    pub policy: FailurePolicy,
    /// Worker count; 1 runs sequentially, 0 uses every available CPU
    pub jobs: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            policy: FailurePolicy::Lenient,
            jobs: 1,
        }
    }
}

impl GenerateOptions {
    /// Worker count with `0` resolved to the available parallelism.
    pub fn effective_jobs(&self) -> usize {
        match self.jobs {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            n => n,
        }
    }
}

/// Create the output directory and any missing parents.
///
/// Existing directories, and anything already inside them, are left alone.
pub fn ensure_output_dir(dir: &Path) -> IconResult<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}

/// Report what a run would produce, without touching the filesystem.
pub fn plan(manifest: &Manifest, layout: &PathLayout) -> GenerateReport {
    let outcomes = manifest
        .jobs(layout)
        .into_iter()
        .map(|job| IconOutcome::new(&job.name, job.size, job.output, IconStatus::Planned))
        .collect();
    GenerateReport { outcomes }
}

/// Drives a [`Rasterizer`] over a manifest
pub struct Generator<'a, R: Rasterizer + ?Sized> {
    rasterizer: &'a R,
    layout: &'a PathLayout,
    options: GenerateOptions,
    cancel: Arc<AtomicBool>,
}

impl<'a, R: Rasterizer + ?Sized> Generator<'a, R> {
    pub fn new(rasterizer: &'a R, layout: &'a PathLayout, options: GenerateOptions) -> Self {
        Self {
            rasterizer,
            layout,
            options,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share a flag that, once set, skips every job not yet started.
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    /// Generate every entry of `manifest`.
    pub fn run(&self, manifest: &Manifest) -> IconResult<GenerateReport> {
        self.run_with(manifest, |_: &IconOutcome| {})
    }

    /// Generate every entry of `manifest`, calling `on_outcome` as each
    /// (icon, size) finishes.
    ///
    /// With several workers `on_outcome` is called in completion order; the
    /// returned report is always in manifest order.
    pub fn run_with<F>(&self, manifest: &Manifest, on_outcome: F) -> IconResult<GenerateReport>
    where
        F: Fn(&IconOutcome) + Sync,
    {
        ensure_output_dir(self.layout.output_dir())?;

        let jobs = self.options.effective_jobs();
        let outcomes = if jobs <= 1 {
            let mut outcomes = Vec::with_capacity(manifest.job_count());
            for entry in manifest.entries() {
                outcomes.extend(self.generate_icon_with(entry.name(), entry.sizes(), &on_outcome)?);
            }
            outcomes
        } else {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .map_err(|e| IconError::Io(std::io::Error::other(e.to_string())))?;
            let work = manifest.jobs(self.layout);
            pool.install(|| {
                work.par_iter()
                    .map(|job| self.run_job(job, &on_outcome))
                    .collect::<IconResult<Vec<_>>>()
            })?
        };

        Ok(GenerateReport { outcomes })
    }

    /// Generate one icon at each of `sizes`.
    pub fn generate_icon(&self, name: &str, sizes: &[u32]) -> IconResult<Vec<IconOutcome>> {
        self.generate_icon_with(name, sizes, &|_: &IconOutcome| {})
    }

    fn generate_icon_with<F>(
        &self,
        name: &str,
        sizes: &[u32],
        on_outcome: &F,
    ) -> IconResult<Vec<IconOutcome>>
    where
        F: Fn(&IconOutcome) + Sync,
    {
        let source = self.layout.source_path(name);
        sizes
            .iter()
            .map(|&size| {
                let job = IconJob {
                    name: name.to_string(),
                    size,
                    source: source.clone(),
                    output: self.layout.output_path(name, size),
                };
                self.run_job(&job, on_outcome)
            })
            .collect()
    }

    fn run_job<F>(&self, job: &IconJob, on_outcome: &F) -> IconResult<IconOutcome>
    where
        F: Fn(&IconOutcome) + Sync,
    {
        let outcome = if self.cancel.load(Ordering::SeqCst) {
            IconOutcome::new(&job.name, job.size, job.output.clone(), IconStatus::Cancelled)
        } else {
            self.convert(job)?
        };
        on_outcome(&outcome);
        Ok(outcome)
    }

    /// Run the tool for one job. Only filesystem errors around the temp file
    /// are returned as `Err`; tool failures end up in the outcome.
    fn convert(&self, job: &IconJob) -> IconResult<IconOutcome> {
        let mut outcome =
            IconOutcome::new(&job.name, job.size, job.output.clone(), IconStatus::Failed);

        let pending = PendingArtifact::begin(&job.output)?;
        let rendered = match self.rasterizer.render(&job.source, job.size, pending.file()?) {
            Ok(rendered) => rendered,
            Err(err) if !err.is_fatal() => {
                pending.discard()?;
                outcome.error = Some(err.to_string());
                return Ok(outcome);
            }
            Err(err) => return Err(err),
        };
        outcome.stderr = rendered.stderr;

        // An interrupt reaches the tool too; never keep its partial output.
        if !rendered.success && self.cancel.load(Ordering::SeqCst) {
            pending.discard()?;
            outcome.status = IconStatus::Cancelled;
            return Ok(outcome);
        }

        if !rendered.success {
            let failure = IconError::ConversionFailed {
                program: self.rasterizer.name().to_string(),
                name: job.name.clone(),
                size: job.size,
                code: rendered.code,
            };
            outcome.error = Some(failure.to_string());

            if self.options.policy == FailurePolicy::Strict {
                pending.discard()?;
                return Ok(outcome);
            }
        }

        let committed = pending.commit()?;
        outcome.bytes = committed.bytes;
        outcome.status = if committed.changed {
            IconStatus::Written
        } else {
            IconStatus::Unchanged
        };
        Ok(outcome)
    }
}
