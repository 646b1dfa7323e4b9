//! Filesystem artifact writer rooted at a configurable directory.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::domain::AppError;
use crate::ports::{ArtifactWriter, WriteOutcome};

/// Writes artifacts below `root`.
///
/// Absolute artifact paths are re-anchored under the root, so a root of
/// `/` writes to the real locations and any other root stages a full tree.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactWriter {
    root: PathBuf,
}

impl FilesystemArtifactWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Writer targeting the real filesystem locations.
    pub fn system() -> Self {
        Self::new("/")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an artifact path onto the writer root.
    ///
    /// Only normal components are kept, so `..` can never leave the root.
    pub fn target_path(&self, path: &Path) -> PathBuf {
        let relative: PathBuf = path
            .components()
            .filter(|component| matches!(component, Component::Normal(_)))
            .collect();
        self.root.join(relative)
    }
}

impl ArtifactWriter for FilesystemArtifactWriter {
    fn write(&self, path: &Path, content: &str) -> Result<WriteOutcome, AppError> {
        let target = self.target_path(path);

        let outcome = match fs::read(&target) {
            Ok(existing) if Sha256::digest(&existing) == Sha256::digest(content.as_bytes()) => {
                debug!(path = %target.display(), "artifact unchanged");
                return Ok(WriteOutcome::Unchanged);
            }
            Ok(_) => WriteOutcome::Updated,
            Err(err) if err.kind() == io::ErrorKind::NotFound => WriteOutcome::Created,
            Err(err) => return Err(err.into()),
        };

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, content)?;
        info!(path = %target.display(), %outcome, "wrote artifact");
        Ok(outcome)
    }
}
