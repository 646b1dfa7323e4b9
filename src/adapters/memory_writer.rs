use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::AppError;
use crate::ports::{ArtifactWriter, WriteOutcome};

/// In-memory artifact writer used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactWriter {
    // Shared so clones observe the same writes.
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
}

impl MemoryArtifactWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().get(path.as_ref()).cloned()
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ArtifactWriter for MemoryArtifactWriter {
    fn write(&self, path: &Path, content: &str) -> Result<WriteOutcome, AppError> {
        let mut files = self.lock();
        let outcome = match files.get(path) {
            Some(existing) if existing == content => return Ok(WriteOutcome::Unchanged),
            Some(_) => WriteOutcome::Updated,
            None => WriteOutcome::Created,
        };
        files.insert(path.to_path_buf(), content.to_string());
        Ok(outcome)
    }
}
