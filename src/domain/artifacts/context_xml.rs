//! `conf/context.xml` with user supplied JNDI resources.

use serde::Serialize;

use super::{Artifact, ArtifactKind, render_template};
use crate::domain::AppError;
use crate::domain::config::ResolvedConfig;
use crate::ports::TemplateEngine;

#[derive(Serialize)]
struct ContextXmlContext<'a> {
    resources: Vec<ResourceBlock<'a>>,
}

// Attributes travel as a list so the template sees insertion order
// regardless of how the engine stores maps.
#[derive(Serialize)]
struct ResourceBlock<'a> {
    name: &'a str,
    attributes: Vec<Attribute<'a>>,
}

#[derive(Serialize)]
struct Attribute<'a> {
    key: &'a str,
    value: &'a str,
}

/// Returns `None` when no resources are configured.
pub fn render<E: TemplateEngine + ?Sized>(
    cfg: &ResolvedConfig,
    engine: &E,
) -> Result<Option<Artifact>, AppError> {
    if cfg.resources.is_empty() {
        return Ok(None);
    }

    let resources = cfg
        .resources
        .iter()
        .map(|(name, attributes)| ResourceBlock {
            name,
            attributes: attributes
                .iter()
                .map(|(key, value)| Attribute { key, value })
                .collect(),
        })
        .collect();

    render_template(ArtifactKind::ContextXml, cfg, engine, &ContextXmlContext { resources })
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{engine, resolved};

    #[test]
    fn skipped_without_resources() {
        let cfg = resolved("version: '6.3.4a'\njavahome: /opt/java\n");
        assert!(render(&cfg, &engine()).unwrap().is_none());
    }

    #[test]
    fn renders_one_block_per_resource() {
        let cfg = resolved(
            "version: '6.3.4a'\njavahome: /opt/java\nresources:\n  testdb:\n    auth: Container\n",
        );
        let artifact = render(&cfg, &engine()).unwrap().unwrap();
        assert!(
            artifact
                .content
                .contains("<Resource name = \"testdb\"\n        auth = \"Container\"\n    />")
        );
        assert!(artifact.path.ends_with("conf/context.xml"));
    }

    #[test]
    fn keeps_insertion_order() {
        let cfg = resolved(
            "version: '6.3.4a'\njavahome: /opt/java\nresources:\n  \
             jdbc/zeta:\n    type: javax.sql.DataSource\n    auth: Container\n  \
             jdbc/alpha:\n    auth: Container\n",
        );
        let content = render(&cfg, &engine()).unwrap().unwrap().content;
        let zeta = content.find("jdbc/zeta").unwrap();
        let alpha = content.find("jdbc/alpha").unwrap();
        assert!(zeta < alpha);
        let type_attr = content.find("type = \"javax.sql.DataSource\"").unwrap();
        let auth_attr = content[zeta..].find("auth = ").unwrap() + zeta;
        assert!(type_attr < auth_attr);
    }
}
