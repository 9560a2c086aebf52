use std::io;
use std::path::Path;

use anyhow::Result;
use icongen::{Config, Manifest};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, ManifestEntryEvent, StartEvent};

pub fn cmd_list(config: &Config, project_root: &Path, ui: &UiContext) -> Result<()> {
    let manifest = Manifest::builtin();

    if ui.json {
        let layout = config.layout(project_root);
        emit_event(&StartEvent::new("list"))?;
        for entry in manifest.entries() {
            emit_event(&ManifestEntryEvent::new(entry, &layout))?;
        }
        emit_event(&CompleteEvent::new("list", true))?;
        return Ok(());
    }

    let mut out = io::stdout().lock();
    ui.renderer().render_manifest(&mut out, &manifest)?;
    Ok(())
}
