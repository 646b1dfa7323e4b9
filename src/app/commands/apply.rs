use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, ArtifactKind, ResolvedConfig, render_all};
use crate::ports::{ArtifactWriter, NodeIdSource, TemplateEngine, WriteOutcome};

/// One artifact handed to the writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Result of an apply run, in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub artifacts: Vec<AppliedArtifact>,
}

impl ApplyReport {
    pub fn count(&self, outcome: WriteOutcome) -> usize {
        self.artifacts.iter().filter(|a| a.outcome == outcome).count()
    }

    /// True when at least one file was created or rewritten.
    pub fn changed(&self) -> bool {
        self.artifacts.iter().any(|a| a.outcome != WriteOutcome::Unchanged)
    }
}

/// Execute the apply command.
///
/// All artifacts are rendered before the first write, so a render failure
/// leaves the target untouched. A writer failure stops the run at that
/// artifact; earlier writes are kept.
pub fn execute<E, W, N>(
    ctx: &AppContext<E, W, N>,
    cfg: &ResolvedConfig,
) -> Result<ApplyReport, AppError>
where
    E: TemplateEngine,
    W: ArtifactWriter,
    N: NodeIdSource,
{
    let artifacts = render_all(cfg, ctx.engine(), ctx.node_ids())?;

    let mut report = ApplyReport::default();
    for artifact in artifacts {
        let outcome = ctx.writer().write(&artifact.path, &artifact.content)?;
        report.artifacts.push(AppliedArtifact {
            kind: artifact.kind,
            path: artifact.path,
            outcome,
        });
    }

    info!(
        created = report.count(WriteOutcome::Created),
        updated = report.count(WriteOutcome::Updated),
        unchanged = report.count(WriteOutcome::Unchanged),
        "applied artifacts"
    );
    Ok(report)
}
