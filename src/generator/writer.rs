//! Atomic artifact writer
//!
//! The rasterizer streams into a temp file created next to the destination;
//! the temp file is renamed over the destination only when it is committed.
//! Dropping a pending artifact removes the temp file.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::error::{IconError, IconResult};

/// Outcome of committing an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Committed {
    /// False when the destination already held identical bytes
    pub changed: bool,
    pub bytes: u64,
}

/// A temp file waiting to replace `destination`
pub struct PendingArtifact {
    destination: PathBuf,
    temp: NamedTempFile,
}

impl PendingArtifact {
    /// Create the temp file in the destination's directory so the final
    /// rename never crosses filesystems.
    pub fn begin(destination: &Path) -> IconResult<Self> {
        let dir = destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut builder = tempfile::Builder::new();
        builder.prefix(".icongen-").suffix(".tmp");
        // Same mode a plain `File::create` gets, after the umask.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let temp = builder.tempfile_in(dir)?;
        Ok(Self {
            destination: destination.to_path_buf(),
            temp,
        })
    }

    /// Handle for the rasterizer's stdout
    pub fn file(&self) -> IconResult<File> {
        Ok(self.temp.as_file().try_clone()?)
    }

    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    /// Move the temp file over the destination.
    ///
    /// When the destination already has the same content it is left alone
    /// and the temp file is dropped.
    pub fn commit(self) -> IconResult<Committed> {
        let bytes = self.temp.as_file().metadata()?.len();
        let new_hash = hash_file(self.temp.path())?;

        if self.destination.is_file() && hash_file(&self.destination)? == new_hash {
            return Ok(Committed {
                changed: false,
                bytes,
            });
        }

        // A replaced artifact keeps its mode.
        if let Ok(existing) = fs::metadata(&self.destination) {
            fs::set_permissions(self.temp.path(), existing.permissions())?;
        }

        self.temp
            .persist(&self.destination)
            .map_err(|e| IconError::Io(e.error))?;
        Ok(Committed {
            changed: true,
            bytes,
        })
    }

    /// Throw the temp file away, leaving the destination untouched.
    pub fn discard(self) -> IconResult<()> {
        self.temp.close()?;
        Ok(())
    }
}

/// SHA-256 of a file's content, `sha256:<hex>`
pub fn hash_file(path: &Path) -> IconResult<String> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(format!("sha256:{:x}", hasher.finalize()))
}
