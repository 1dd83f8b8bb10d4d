//! Temporary files owned by a single invocation

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Every path created for side effects during one run, in creation order.
///
/// A path is recorded at most once, so cleanup touches each file exactly once.
#[derive(Debug, Default)]
pub struct UsedFiles {
    paths: Vec<PathBuf>,
}

impl UsedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a path for cleanup. Returns false if it was already recorded.
    pub fn register(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.paths.contains(&path) {
            return false;
        }
        debug!("Tracking {}", path.display());
        self.paths.push(path);
        true
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Delete every recorded path.
    ///
    /// Missing files are skipped silently. Any other failure is logged and
    /// returned, but never stops the remaining deletions.
    pub fn cleanup(&mut self) -> Vec<(PathBuf, io::Error)> {
        let mut failures = Vec::new();
        for path in self.paths.drain(..) {
            match fs::remove_file(&path) {
                Ok(()) => debug!("Removed {}", path.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    debug!("{} already gone", path.display());
                }
                Err(e) => {
                    warn!("Failed to remove {}: {}", path.display(), e);
                    failures.push((path, e));
                }
            }
        }
        failures
    }
}

/// The source file the user edits for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Path a scratch file would get: `<dir>/<base_name><extension>`
    pub fn path_for(dir: &Path, base_name: &str, extension: &str) -> PathBuf {
        dir.join(format!("{base_name}{extension}"))
    }

    /// Create (or truncate) the scratch file and register it for cleanup.
    ///
    /// The path is registered before creation so a half-created file is
    /// still removed.
    pub fn create(
        dir: &Path,
        base_name: &str,
        extension: &str,
        used_files: &mut UsedFiles,
    ) -> Result<Self> {
        let path = Self::path_for(dir, base_name, extension);
        used_files.register(&path);

        fs::File::create(&path).map_err(|source| Error::ScratchFile {
            path: path.clone(),
            source,
        })?;

        debug!("Created scratch file {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
