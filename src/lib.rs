//! icongen - build-time PNG icon generator
//!
//! Renders a fixed manifest of SVG icons to PNG at the pixel heights the
//! application needs, by running `rsvg-convert` once per (icon, size) and
//! writing its output under `src/images/icons/`.

pub mod config;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod presentation;
pub mod rasterizer;

// Re-exports for convenience
pub use config::{Config, Verbosity};
pub use error::{IconError, IconResult};
pub use generator::{
    ensure_output_dir, plan, FailurePolicy, GenerateOptions, GenerateReport, Generator,
    IconOutcome, IconStatus,
};
pub use manifest::{IconEntry, IconJob, Manifest, PathLayout};
pub use rasterizer::{locate_from, Located, Rasterizer, RsvgConvert};
