//! Rasterizer discovery on the executable search path

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::error::{IconError, IconResult};

/// Result of looking the rasterizer up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Located {
    /// Absolute path to the executable
    Found(PathBuf),
    /// Nothing by that name is executable on the search path
    NotFound { program: String },
}

impl Located {
    pub fn is_found(&self) -> bool {
        matches!(self, Located::Found(_))
    }

    /// Turn a miss into the fatal precondition error.
    pub fn into_result(self) -> IconResult<PathBuf> {
        match self {
            Located::Found(path) => Ok(path),
            Located::NotFound { program } => Err(IconError::RasterizerNotFound { program }),
        }
    }
}

/// Look `program` up on an explicit search path, resolving relative
/// programs against `cwd`.
pub fn locate_in(program: &str, paths: Option<&OsStr>, cwd: &Path) -> Located {
    match which::which_in(program, paths, cwd) {
        Ok(path) => Located::Found(path),
        Err(_) => Located::NotFound {
            program: program.to_string(),
        },
    }
}

/// Look `program` up on the process `PATH`, resolving a relative path such
/// as `tools/rsvg-convert` against `project_root` instead of the working
/// directory.
pub fn locate_from(program: &str, project_root: &Path) -> Located {
    let root = if project_root.is_absolute() {
        project_root.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(project_root),
            Err(_) => project_root.to_path_buf(),
        }
    };
    let paths = std::env::var_os("PATH");
    locate_in(program, paths.as_deref(), &root)
}
