use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::domain::AppError;

/// What the writer did with an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WriteOutcome::Created => "created",
            WriteOutcome::Updated => "updated",
            WriteOutcome::Unchanged => "unchanged",
        };
        f.write_str(label)
    }
}

/// Persistence boundary for rendered artifacts.
///
/// Implementations surface I/O failures as-is; retry policy belongs to the
/// caller.
pub trait ArtifactWriter {
    fn write(&self, path: &Path, content: &str) -> Result<WriteOutcome, AppError>;
}
