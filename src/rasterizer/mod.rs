//! Rasterizer
//!
//! The external tool that turns an SVG into a PNG. icongen never renders
//! anything itself: it finds the tool on `PATH`, runs it once per
//! (icon, size) and captures its stdout.

mod locate;
mod rsvg;
#[cfg(test)]
pub(crate) mod testing;

pub use locate::{locate_from, locate_in, Located};
pub use rsvg::RsvgConvert;

use std::fs::File;
use std::path::Path;

use crate::error::IconResult;

/// Default tool name looked up on `PATH`
pub const DEFAULT_PROGRAM: &str = "rsvg-convert";

/// Default flag that sets the output height in pixels
pub const DEFAULT_HEIGHT_FLAG: &str = "-h";

/// Outcome of a single tool run that could be started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub success: bool,
    /// Exit code, `None` when the tool was killed by a signal
    pub code: Option<i32>,
    /// Captured stderr, only when the rasterizer was asked to capture it
    pub stderr: Option<String>,
}

impl Rendered {
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
            stderr: None,
        }
    }
}

/// A vector-to-raster converter invoked once per (icon, size)
pub trait Rasterizer: Send + Sync {
    /// Name of the tool (for logging)
    fn name(&self) -> &str;

    /// Render `source` at `height` pixels, writing the image bytes to `out`.
    ///
    /// Returns `Err` only when the tool cannot be started; an unsuccessful
    /// exit is reported through [`Rendered`].
    fn render(&self, source: &Path, height: u32, out: File) -> IconResult<Rendered>;

    /// Command line used for `source` at `height` (for debug output)
    fn describe(&self, source: &Path, height: u32) -> String;
}
