mod artifact_writer;
mod node_id;
mod template_engine;

pub use artifact_writer::{ArtifactWriter, WriteOutcome};
pub use node_id::NodeIdSource;
pub use template_engine::TemplateEngine;
