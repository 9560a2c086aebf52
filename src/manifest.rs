//! Icon manifest
//!
//! The manifest is the fixed, ordered list of icons to render and the pixel
//! heights each one is needed at. It is built once at startup and handed to
//! the generator; nothing mutates it afterwards.

use std::path::{Path, PathBuf};

use crate::error::{IconError, IconResult};

/// Default directory holding the SVG sources, relative to the project root
pub const DEFAULT_SOURCE_DIR: &str = "assets/icons";

/// Default directory receiving the PNG artifacts, relative to the project root
pub const DEFAULT_OUTPUT_DIR: &str = "src/images/icons";

const BUILTIN: &[(&str, &[u32])] = &[
    ("arrow_back", &[24]),
    ("brush", &[24]),
    ("bucket", &[48]),
    ("cancel", &[32]),
    ("close", &[18]),
    ("code", &[24]),
    ("edit", &[48]),
    ("eraser", &[48]),
    ("error_stopped", &[32]),
    ("game", &[24]),
    ("hourglass", &[32]),
    ("library", &[24]),
    ("line_weight", &[24]),
    ("object_add", &[24]),
    ("object", &[14]),
    ("open_in_new", &[24]),
    ("properties", &[14]),
    ("scene", &[24]),
    ("zoom_in", &[14]),
];

/// One icon and the heights it must be rendered at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    name: String,
    sizes: Vec<u32>,
}

impl IconEntry {
    /// Create an entry, rejecting an empty size list or a zero height.
    pub fn new(name: impl Into<String>, sizes: &[u32]) -> IconResult<Self> {
        let name = name.into();
        if sizes.is_empty() || sizes.contains(&0) {
            return Err(IconError::InvalidSize { name });
        }
        Ok(Self {
            name,
            sizes: sizes.to_vec(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sizes(&self) -> &[u32] {
        &self.sizes
    }
}

/// Ordered, immutable list of icon entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<IconEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<IconEntry>) -> Self {
        Self { entries }
    }

    /// The icon set shipped with the application.
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(name, sizes)| IconEntry {
                name: (*name).to_string(),
                sizes: sizes.to_vec(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&IconEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Total number of (icon, size) pairs.
    pub fn job_count(&self) -> usize {
        self.entries.iter().map(|e| e.sizes.len()).sum()
    }

    /// Restrict the manifest to `names`, keeping manifest order.
    ///
    /// Fails on the first name the manifest does not know.
    pub fn select(&self, names: &[String]) -> IconResult<Manifest> {
        for name in names {
            if self.get(name).is_none() {
                return Err(IconError::UnknownIcon {
                    name: name.clone(),
                    known: self.entries.iter().map(|e| e.name.clone()).collect(),
                });
            }
        }

        let entries = self
            .entries
            .iter()
            .filter(|e| names.iter().any(|n| n == &e.name))
            .cloned()
            .collect();
        Ok(Manifest { entries })
    }

    /// Expand every (entry, size) pair into a job, entries in declaration
    /// order and sizes in entry order.
    pub fn jobs(&self, layout: &PathLayout) -> Vec<IconJob> {
        self.entries
            .iter()
            .flat_map(|entry| {
                entry.sizes.iter().map(move |&size| IconJob {
                    name: entry.name.clone(),
                    size,
                    source: layout.source_path(&entry.name),
                    output: layout.output_path(&entry.name, size),
                })
            })
            .collect()
    }
}

/// Where sources are read from and artifacts written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLayout {
    source_dir: PathBuf,
    output_dir: PathBuf,
}

impl PathLayout {
    /// Resolve `source_dir` and `output_dir` against `root` (absolute paths
    /// are kept as they are).
    pub fn new(root: &Path, source_dir: &Path, output_dir: &Path) -> Self {
        Self {
            source_dir: root.join(source_dir),
            output_dir: root.join(output_dir),
        }
    }

    /// Default layout under `root`
    pub fn under(root: &Path) -> Self {
        Self::new(
            root,
            Path::new(DEFAULT_SOURCE_DIR),
            Path::new(DEFAULT_OUTPUT_DIR),
        )
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<source_dir>/<name>.svg`
    pub fn source_path(&self, name: &str) -> PathBuf {
        self.source_dir.join(format!("{}.svg", name))
    }

    /// `<output_dir>/<name>_<size>.png`
    pub fn output_path(&self, name: &str, size: u32) -> PathBuf {
        self.output_dir.join(format!("{}_{}.png", name, size))
    }
}

/// One (icon, size) conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconJob {
    pub name: String,
    pub size: u32,
    pub source: PathBuf,
    pub output: PathBuf,
}
