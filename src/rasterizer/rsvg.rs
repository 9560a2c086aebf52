//! rsvg-convert backend
//!
//! Runs `rsvg-convert -h <height> <source>` with stdout redirected straight
//! into the artifact file.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::{Rasterizer, Rendered, DEFAULT_HEIGHT_FLAG};
use crate::error::{IconError, IconResult};

/// Rasterizer backed by librsvg's command line tool
#[derive(Debug, Clone)]
pub struct RsvgConvert {
    program: PathBuf,
    height_flag: String,
    capture_stderr: bool,
}

impl RsvgConvert {
    /// `program` is the located executable.
    pub fn new(program: PathBuf) -> Self {
        Self {
            program,
            height_flag: DEFAULT_HEIGHT_FLAG.to_string(),
            capture_stderr: false,
        }
    }

    pub fn with_height_flag(mut self, flag: impl Into<String>) -> Self {
        self.height_flag = flag.into();
        self
    }

    /// Capture the tool's stderr into [`Rendered::stderr`] instead of
    /// passing it through to the terminal (JSON mode).
    pub fn with_captured_stderr(mut self, capture: bool) -> Self {
        self.capture_stderr = capture;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, source: &Path, height: u32) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.height_flag)
            .arg(height.to_string())
            .arg(source)
            .stdin(Stdio::null());
        cmd
    }

    fn spawn_error(&self, source: std::io::Error) -> IconError {
        IconError::Spawn {
            program: self.program.display().to_string(),
            source,
        }
    }
}

impl Rasterizer for RsvgConvert {
    fn name(&self) -> &str {
        self.program
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("rsvg-convert")
    }

    fn render(&self, source: &Path, height: u32, out: File) -> IconResult<Rendered> {
        let mut cmd = self.command(source, height);
        cmd.stdout(Stdio::from(out));

        if self.capture_stderr {
            let output = cmd
                .stderr(Stdio::piped())
                .output()
                .map_err(|e| self.spawn_error(e))?;
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Ok(Rendered {
                success: output.status.success(),
                code: output.status.code(),
                stderr: (!stderr.is_empty()).then_some(stderr),
            });
        }

        let status = cmd
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| self.spawn_error(e))?;
        Ok(Rendered {
            success: status.success(),
            code: status.code(),
            stderr: None,
        })
    }

    fn describe(&self, source: &Path, height: u32) -> String {
        format!(
            "{} {} {} {}",
            self.program.display(),
            self.height_flag,
            height,
            source.display()
        )
    }
}
