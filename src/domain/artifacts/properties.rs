//! `jira-config.properties` and `cluster.properties`.

use serde::Serialize;
use tracing::debug;

use super::{Artifact, ArtifactKind, render_template};
use crate::domain::AppError;
use crate::domain::config::ResolvedConfig;
use crate::ports::{NodeIdSource, TemplateEngine};

#[derive(Serialize)]
struct JiraConfigContext<'a> {
    websudo_disabled: bool,
    properties: Vec<Property<'a>>,
}

#[derive(Serialize)]
struct Property<'a> {
    key: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct ClusterContext<'a> {
    node_id: String,
    shared_home: String,
    ehcache_listener_host: Option<&'a str>,
    ehcache_listener_port: Option<u16>,
    ehcache_object_port: Option<u16>,
}

pub fn render_jira_config<E: TemplateEngine + ?Sized>(
    cfg: &ResolvedConfig,
    engine: &E,
) -> Result<Artifact, AppError> {
    let context = JiraConfigContext {
        websudo_disabled: !cfg.secure_admin_sessions,
        properties: cfg
            .extra_properties
            .iter()
            .map(|(key, value)| Property { key, value })
            .collect(),
    };
    render_template(ArtifactKind::JiraConfigProperties, cfg, engine, &context)
}

/// Returns `None` unless clustering is enabled. The node id is the only
/// value in any artifact that differs between renders.
pub fn render_cluster<E, N>(
    cfg: &ResolvedConfig,
    engine: &E,
    node_ids: &N,
) -> Result<Option<Artifact>, AppError>
where
    E: TemplateEngine + ?Sized,
    N: NodeIdSource + ?Sized,
{
    let Some(cluster) = cfg.cluster.as_ref() else {
        return Ok(None);
    };

    let node_id = node_ids.next_node_id();
    if node_id.trim().is_empty() {
        return Err(AppError::render(
            ArtifactKind::ClusterProperties.file_name(),
            "node id source returned an empty token",
        ));
    }
    debug!(%node_id, "generated cluster node id");

    let context = ClusterContext {
        node_id,
        shared_home: cluster.shared_home.display().to_string(),
        ehcache_listener_host: cluster.ehcache_listener_host.as_deref(),
        ehcache_listener_port: cluster.ehcache_listener_port,
        ehcache_object_port: cluster.ehcache_object_port,
    };
    render_template(ArtifactKind::ClusterProperties, cfg, engine, &context).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedNodeId, engine, resolved};

    const BASE: &str = "version: '6.3.4a'\njavahome: /opt/java\n";

    #[test]
    fn secure_admin_sessions_render_negated() {
        let on = resolved(&format!("{BASE}enable_secure_admin_sessions: true\n"));
        let off = resolved(&format!("{BASE}enable_secure_admin_sessions: false\n"));
        assert!(
            render_jira_config(&on, &engine())
                .unwrap()
                .content
                .contains("jira.websudo.is.disabled = false")
        );
        assert!(
            render_jira_config(&off, &engine())
                .unwrap()
                .content
                .contains("jira.websudo.is.disabled = true")
        );
    }

    #[test]
    fn extra_properties_are_appended_in_order() {
        let cfg = resolved(&format!(
            "{BASE}jira_config_properties:\n  ops.bar.group.size.opsbar-transitions: '4'\n  jira.projectkey.pattern: '([A-Z][A-Z0-9]+)'\n"
        ));
        let content = render_jira_config(&cfg, &engine()).unwrap().content;
        assert_eq!(
            content,
            "jira.websudo.is.disabled = false\n\
             ops.bar.group.size.opsbar-transitions = 4\n\
             jira.projectkey.pattern = ([A-Z][A-Z0-9]+)\n"
        );
    }

    #[test]
    fn cluster_descriptor_absent_without_datacenter() {
        let cfg = resolved(BASE);
        assert!(render_cluster(&cfg, &engine(), &FixedNodeId::default()).unwrap().is_none());
    }

    #[test]
    fn cluster_descriptor_carries_node_id_and_shared_home() {
        let cfg = resolved(&format!(
            "{BASE}datacenter: true\nshared_homedir: /mnt/jira_shared_home_dir\nehcache_listener_port: 40001\n"
        ));
        let artifact =
            render_cluster(&cfg, &engine(), &FixedNodeId::new("node-a")).unwrap().unwrap();
        assert!(artifact.content.contains("jira.node.id = node-a\n"));
        assert!(artifact.content.contains("jira.shared.home = /mnt/jira_shared_home_dir\n"));
        assert!(artifact.content.contains("ehcache.listener.port = 40001\n"));
        assert!(!artifact.content.contains("ehcache.listener.hostName"));
    }

    #[test]
    fn empty_node_id_is_a_render_error() {
        let cfg = resolved(&format!("{BASE}datacenter: true\nshared_homedir: /mnt/shared\n"));
        let err = render_cluster(&cfg, &engine(), &FixedNodeId::new("  ")).unwrap_err();
        assert!(matches!(err, AppError::Render { .. }));
    }
}
