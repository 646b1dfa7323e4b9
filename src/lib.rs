//! jira-config: resolve Jira deployment parameters and render the Tomcat and
//! Jira configuration files they imply.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use adapters::{
    FilesystemArtifactWriter, MemoryArtifactWriter, MinijinjaTemplateEngine, RandomNodeId,
};
use app::{
    AppContext,
    commands::{apply, render, resolve},
};

pub use app::commands::apply::{AppliedArtifact, ApplyReport};
pub use app::config::{Override, ParamsFormat};
pub use domain::{
    AppError, Artifact, ArtifactKind, ArtifactSet, DatabaseKind, InstallLayout, RawParams,
    ResolvedConfig, Scalar,
};
pub use ports::{ArtifactWriter, NodeIdSource, TemplateEngine, WriteOutcome};

/// Load a parameter file (YAML, JSON or TOML) and apply `KEY=VALUE`
/// overrides on top.
pub fn load_params(path: &Path, overrides: &[String]) -> Result<RawParams, AppError> {
    app::config::load_params(path, overrides)
}

/// Validate parameters and fill in defaults.
pub fn resolve(raw: RawParams) -> Result<ResolvedConfig, AppError> {
    resolve::execute(raw)
}

/// Render every applicable artifact with the embedded templates.
pub fn render(cfg: &ResolvedConfig) -> Result<ArtifactSet, AppError> {
    let ctx =
        AppContext::new(MinijinjaTemplateEngine::new()?, MemoryArtifactWriter::new(), RandomNodeId);
    render::execute(&ctx, cfg, None)
}

/// Render and write every artifact below `root`.
///
/// Absolute artifact paths are re-anchored under `root`; pass `/` to write
/// the real locations.
pub fn apply(cfg: &ResolvedConfig, root: &Path) -> Result<ApplyReport, AppError> {
    apply_with(cfg, FilesystemArtifactWriter::new(root))
}

/// Render every artifact and hand it to a caller-supplied writer.
///
/// [`MemoryArtifactWriter`] clones share their contents, so a clone kept by
/// the caller observes what was written.
pub fn apply_with<W: ArtifactWriter>(
    cfg: &ResolvedConfig,
    writer: W,
) -> Result<ApplyReport, AppError> {
    let ctx = AppContext::new(MinijinjaTemplateEngine::new()?, writer, RandomNodeId);
    apply::execute(&ctx, cfg)
}
