use crate::app::AppContext;
use crate::domain::{
    AppError, ArtifactKind, ArtifactSet, ResolvedConfig, render_all, render_artifact,
};
use crate::ports::{ArtifactWriter, NodeIdSource, TemplateEngine};

/// Execute the render command.
///
/// With `only` set, just that artifact is rendered. Asking for a conditional
/// artifact whose feature is disabled yields an empty set.
pub fn execute<E, W, N>(
    ctx: &AppContext<E, W, N>,
    cfg: &ResolvedConfig,
    only: Option<ArtifactKind>,
) -> Result<ArtifactSet, AppError>
where
    E: TemplateEngine,
    W: ArtifactWriter,
    N: NodeIdSource,
{
    match only {
        Some(kind) => {
            Ok(render_artifact(kind, cfg, ctx.engine(), ctx.node_ids())?.into_iter().collect())
        }
        None => render_all(cfg, ctx.engine(), ctx.node_ids()),
    }
}
