//! Test doubles for the rasterizer

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use super::{Rasterizer, Rendered};
use crate::error::{IconError, IconResult};

/// In-process rasterizer that writes `PNG <name> <height>` and records calls.
///
/// Uses `Arc<Mutex<>>` internally so clones share the call log.
#[derive(Clone, Default)]
pub struct MockRasterizer {
    pub calls: Arc<Mutex<Vec<(PathBuf, u32)>>>,
    /// Source file stems that exit with code 1 after writing nothing
    pub failing: Vec<String>,
    /// Source file stems that cannot be spawned at all
    pub unspawnable: Vec<String>,
}

impl MockRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, name: &str) -> Self {
        self.failing.push(name.to_string());
        self
    }

    pub fn unspawnable(mut self, name: &str) -> Self {
        self.unspawnable.push(name.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

impl Rasterizer for MockRasterizer {
    fn name(&self) -> &str {
        "mock"
    }

    fn render(&self, source: &Path, height: u32, mut out: File) -> IconResult<Rendered> {
        self.calls
            .lock()
            .unwrap()
            .push((source.to_path_buf(), height));

        let name = stem(source);
        if self.unspawnable.contains(&name) {
            return Err(IconError::Spawn {
                program: "mock".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock spawn failure"),
            });
        }
        if self.failing.contains(&name) {
            return Ok(Rendered {
                success: false,
                code: Some(1),
                stderr: Some(format!("cannot render {}", name)),
            });
        }

        write!(out, "PNG {} {}", name, height)?;
        Ok(Rendered::ok())
    }

    fn describe(&self, source: &Path, height: u32) -> String {
        format!("mock -h {} {}", height, source.display())
    }
}

/// Write an executable shell script named `rsvg-convert` into `dir`.
///
/// Probes the script until exec stops failing with ETXTBSY, which happens
/// when a concurrently forked test process still holds the write handle.
#[cfg(unix)]
pub fn fake_tool(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    use std::process::{Command, Stdio};

    let tool = dir.join("rsvg-convert");
    std::fs::write(&tool, script).unwrap();
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

    for _ in 0..50 {
        let probe = Command::new(&tool)
            .arg("-h")
            .arg("1")
            .arg("/dev/null")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match probe {
            Err(e) if e.raw_os_error() == Some(26) => {
                std::thread::sleep(std::time::Duration::from_millis(10));
            }
            _ => break,
        }
    }
    tool
}
