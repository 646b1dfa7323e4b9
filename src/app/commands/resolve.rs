use tracing::info;

use crate::domain::{self, AppError, RawParams, ResolvedConfig};

/// Execute the resolve command.
///
/// Every validation error is raised here, before any artifact is rendered.
pub fn execute(raw: RawParams) -> Result<ResolvedConfig, AppError> {
    let cfg = domain::resolve(raw)?;
    info!(
        version = %cfg.layout.version,
        install_path = %cfg.install_path().display(),
        database = cfg.database.kind.as_str(),
        clustered = cfg.cluster.is_some(),
        "resolved deployment parameters"
    );
    Ok(cfg)
}
