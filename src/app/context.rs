use crate::ports::{ArtifactWriter, NodeIdSource, TemplateEngine};

/// Application context holding dependencies for command execution.
pub struct AppContext<E: TemplateEngine, W: ArtifactWriter, N: NodeIdSource> {
    engine: E,
    writer: W,
    node_ids: N,
}

impl<E: TemplateEngine, W: ArtifactWriter, N: NodeIdSource> AppContext<E, W, N> {
    /// Create a new application context.
    pub fn new(engine: E, writer: W, node_ids: N) -> Self {
        Self { engine, writer, node_ids }
    }

    /// Get a reference to the template engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Get a reference to the artifact writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Get a reference to the node id source.
    pub fn node_ids(&self) -> &N {
        &self.node_ids
    }
}
