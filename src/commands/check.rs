use std::io;
use std::path::Path;

use anyhow::Result;
use icongen::{locate_from, Config, Located, Manifest};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CheckEvent, CompleteEvent, StartEvent};

/// One line of the check report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    pub name: String,
    pub ok: bool,
    pub detail: String,
}

/// Verify the rasterizer can be found and every source SVG exists.
///
/// Returns whether every check passed.
pub fn cmd_check(config: &Config, project_root: &Path, ui: &UiContext) -> Result<bool> {
    let tool = locate_from(&config.rasterizer.program, project_root);
    let items = run_checks(config, project_root, tool);
    let ok = items.iter().all(|item| item.ok);

    if ui.json {
        emit_event(&StartEvent::new("check"))?;
        for item in &items {
            emit_event(&CheckEvent::new(&item.name, item.ok, &item.detail))?;
        }
        emit_event(&CompleteEvent::new("check", ok))?;
        return Ok(ok);
    }

    let renderer = ui.renderer();
    let mut out = io::stdout().lock();
    for item in &items {
        // Passing sources are noise unless asked for.
        if item.ok && item.name != "rasterizer" && ui.verbosity < icongen::Verbosity::Verbose {
            continue;
        }
        renderer.render_check(&mut out, item.ok, &item.name, &item.detail)?;
    }

    let missing = items.iter().filter(|item| !item.ok).count();
    if ok {
        println!("\nAll {} checks passed", items.len());
    } else {
        println!("\n{} of {} checks failed", missing, items.len());
    }
    Ok(ok)
}

pub(crate) fn run_checks(config: &Config, project_root: &Path, tool: Located) -> Vec<CheckItem> {
    let layout = config.layout(project_root);
    let mut items = Vec::with_capacity(Manifest::builtin().len() + 1);

    items.push(match tool {
        Located::Found(path) => CheckItem {
            name: "rasterizer".to_string(),
            ok: true,
            detail: path.display().to_string(),
        },
        Located::NotFound { program } => CheckItem {
            name: "rasterizer".to_string(),
            ok: false,
            detail: format!("{} not found in PATH", program),
        },
    });

    for entry in Manifest::builtin().entries() {
        let source = layout.source_path(entry.name());
        let ok = source.is_file();
        items.push(CheckItem {
            name: entry.name().to_string(),
            ok,
            detail: if ok {
                source.display().to_string()
            } else {
                format!("missing {}", source.display())
            },
        });
    }

    items
}
