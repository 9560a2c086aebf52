use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::Result;
use icongen::presentation::GenerateArgs;
use icongen::{
    locate_from, plan, Config, FailurePolicy, GenerateOptions, Generator, IconOutcome, Manifest,
    Rasterizer, RsvgConvert, Verbosity,
};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, IconEvent, StartEvent};

pub fn cmd_generate(
    args: &GenerateArgs,
    config: &Config,
    project_root: &Path,
    ui: &UiContext,
) -> Result<ExitCode> {
    let started = Instant::now();
    let manifest = if args.only.is_empty() {
        Manifest::builtin()
    } else {
        Manifest::builtin().select(&args.only)?
    };
    let layout = config.layout(project_root);

    if args.dry_run {
        let report = plan(&manifest, &layout);
        if ui.json {
            emit_event(&StartEvent::new("generate"))?;
            for outcome in &report.outcomes {
                emit_event(&IconEvent::new(outcome))?;
            }
            emit_event(&CompleteEvent::from_report("generate", true, &report))?;
        } else {
            let renderer = ui.renderer();
            let mut out = io::stdout().lock();
            for outcome in &report.outcomes {
                renderer.render_outcome(&mut out, outcome)?;
            }
            renderer.render_summary(&mut out, &report, layout.output_dir())?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    // Nothing is created on disk until the tool is known to exist.
    let program = locate_from(&config.rasterizer.program, project_root).into_result()?;
    let rasterizer = RsvgConvert::new(program)
        .with_height_flag(config.rasterizer.height_flag.clone())
        .with_captured_stderr(ui.json);

    let options = resolve_options(config, args);
    let strict = options.policy == FailurePolicy::Strict;

    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        if ui.is_debug() {
            eprintln!("[DEBUG] Ctrl+C handler not installed: {}", e);
        }
    }

    if ui.json {
        emit_event(&StartEvent::new("generate").with_run(
            rasterizer.program(),
            manifest.job_count(),
            options.effective_jobs(),
        ))?;
    } else if ui.verbosity >= Verbosity::Verbose {
        println!(
            "Generating {} icons with {} ({} jobs)",
            manifest.job_count(),
            rasterizer.program().display(),
            options.effective_jobs()
        );
    }

    let renderer = ui.renderer();
    let write_failure = FirstWriteError::default();
    let generator = Generator::new(&rasterizer, &layout, options).with_cancel_flag(cancel);
    let report = generator.run_with(&manifest, |outcome: &IconOutcome| {
        if ui.json {
            write_failure.record(emit_event(&IconEvent::new(outcome)));
            return;
        }

        let mut out = io::stdout().lock();
        if ui.is_debug() {
            let source = layout.source_path(&outcome.name);
            write_failure.record(writeln!(
                out,
                "  $ {}",
                rasterizer.describe(&source, outcome.size)
            ));
        }
        write_failure.record(renderer.render_outcome(&mut out, outcome));
        if ui.annotate {
            if let Some(annotation) = crate::ui::ci::outcome_annotation(outcome) {
                write_failure.record(writeln!(out, "{}", annotation));
            }
        }
    })?;
    write_failure.into_result()?;

    let success = !report.was_cancelled() && (!strict || report.failed() == 0);
    if ui.json {
        emit_event(
            &CompleteEvent::from_report("generate", success, &report)
                .with_duration(started.elapsed().as_millis() as u64),
        )?;
    } else {
        let mut out = io::stdout().lock();
        renderer.render_summary(&mut out, &report, layout.output_dir())?;
    }

    Ok(super::exit_code_for(&report, strict))
}

/// Keeps the first output error seen while icons are still being generated.
#[derive(Default)]
struct FirstWriteError(Mutex<Option<io::Error>>);

impl FirstWriteError {
    fn record(&self, result: io::Result<()>) {
        if let Err(e) = result {
            if let Ok(mut slot) = self.0.lock() {
                slot.get_or_insert(e);
            }
        }
    }

    fn into_result(self) -> io::Result<()> {
        match self.0.into_inner() {
            Ok(Some(e)) => Err(e),
            Ok(None) => Ok(()),
            Err(poisoned) => poisoned.into_inner().map_or(Ok(()), Err),
        }
    }
}

/// Config-derived options with `--strict` and `--jobs` applied on top.
fn resolve_options(config: &Config, args: &GenerateArgs) -> GenerateOptions {
    let mut options = config.generate_options();
    if args.strict {
        options.policy = FailurePolicy::Strict;
    }
    if let Some(jobs) = args.jobs {
        options.jobs = jobs;
    }
    options
}
