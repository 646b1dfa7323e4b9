//! Artifact renderers.
//!
//! Each renderer is a pure function of one [`ResolvedConfig`]: renderers
//! never look at each other's output, so they can run in any order or in
//! parallel against the same configuration.

pub mod context_xml;
pub mod dbconfig;
pub mod env_script;
pub mod properties;
pub mod server_xml;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::AppError;
use crate::domain::config::ResolvedConfig;
use crate::ports::{NodeIdSource, TemplateEngine};

/// The fixed set of files this crate knows how to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    EnvScript,
    UserScript,
    ServerXml,
    ContextXml,
    DbConfig,
    JiraConfigProperties,
    ClusterProperties,
}

impl ArtifactKind {
    /// Render order used by [`render_all`].
    pub const ALL: [ArtifactKind; 7] = [
        ArtifactKind::EnvScript,
        ArtifactKind::UserScript,
        ArtifactKind::ServerXml,
        ArtifactKind::ContextXml,
        ArtifactKind::DbConfig,
        ArtifactKind::JiraConfigProperties,
        ArtifactKind::ClusterProperties,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::EnvScript => "setenv.sh",
            ArtifactKind::UserScript => "user.sh",
            ArtifactKind::ServerXml => "server.xml",
            ArtifactKind::ContextXml => "context.xml",
            ArtifactKind::DbConfig => "dbconfig.xml",
            ArtifactKind::JiraConfigProperties => "jira-config.properties",
            ArtifactKind::ClusterProperties => "cluster.properties",
        }
    }

    pub fn template_name(&self) -> String {
        format!("{}.j2", self.file_name())
    }

    /// Target path of this artifact for the given configuration.
    pub fn path(&self, cfg: &ResolvedConfig) -> PathBuf {
        let install = cfg.install_path();
        match self {
            ArtifactKind::EnvScript | ArtifactKind::UserScript => {
                install.join("bin").join(self.file_name())
            }
            ArtifactKind::ServerXml | ArtifactKind::ContextXml => {
                install.join("conf").join(self.file_name())
            }
            ArtifactKind::DbConfig
            | ArtifactKind::JiraConfigProperties
            | ArtifactKind::ClusterProperties => cfg.home_dir.join(self.file_name()),
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

impl FromStr for ArtifactKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactKind::ALL.into_iter().find(|kind| kind.file_name() == s).ok_or_else(|| {
            let known: Vec<_> = ArtifactKind::ALL.iter().map(|k| k.file_name()).collect();
            AppError::invalid_parameter(
                "artifact",
                s,
                format!("expected one of {}", known.join(", ")),
            )
        })
    }
}

/// One rendered configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: String,
}

/// Rendered artifacts in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn get(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    pub fn contains(&self, kind: ArtifactKind) -> bool {
        self.get(kind).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.artifacts.iter()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl FromIterator<Artifact> for ArtifactSet {
    fn from_iter<I: IntoIterator<Item = Artifact>>(iter: I) -> Self {
        Self { artifacts: iter.into_iter().collect() }
    }
}

impl IntoIterator for ArtifactSet {
    type Item = Artifact;
    type IntoIter = std::vec::IntoIter<Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.into_iter()
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.iter()
    }
}

/// Render a single artifact. Returns `None` for conditional artifacts
/// whose feature is not configured.
pub fn render_artifact<E, N>(
    kind: ArtifactKind,
    cfg: &ResolvedConfig,
    engine: &E,
    node_ids: &N,
) -> Result<Option<Artifact>, AppError>
where
    E: TemplateEngine + ?Sized,
    N: NodeIdSource + ?Sized,
{
    match kind {
        ArtifactKind::EnvScript => env_script::render_setenv(cfg, engine).map(Some),
        ArtifactKind::UserScript => env_script::render_user(cfg, engine).map(Some),
        ArtifactKind::ServerXml => server_xml::render(cfg, engine).map(Some),
        ArtifactKind::ContextXml => context_xml::render(cfg, engine),
        ArtifactKind::DbConfig => dbconfig::render(cfg, engine).map(Some),
        ArtifactKind::JiraConfigProperties => {
            properties::render_jira_config(cfg, engine).map(Some)
        }
        ArtifactKind::ClusterProperties => properties::render_cluster(cfg, engine, node_ids),
    }
}

/// Render every applicable artifact in [`ArtifactKind::ALL`] order.
pub fn render_all<E, N>(
    cfg: &ResolvedConfig,
    engine: &E,
    node_ids: &N,
) -> Result<ArtifactSet, AppError>
where
    E: TemplateEngine + ?Sized,
    N: NodeIdSource + ?Sized,
{
    let mut artifacts = Vec::with_capacity(ArtifactKind::ALL.len());
    for kind in ArtifactKind::ALL {
        if let Some(artifact) = render_artifact(kind, cfg, engine, node_ids)? {
            artifacts.push(artifact);
        }
    }
    Ok(ArtifactSet { artifacts })
}

fn render_template<E, C>(
    kind: ArtifactKind,
    cfg: &ResolvedConfig,
    engine: &E,
    context: &C,
) -> Result<Artifact, AppError>
where
    E: TemplateEngine + ?Sized,
    C: Serialize,
{
    let bindings =
        serde_json::to_value(context).map_err(|e| AppError::render(kind.file_name(), e))?;
    let content = engine.render(&kind.template_name(), &bindings)?;
    Ok(Artifact { kind, path: kind.path(cfg), content })
}
