pub mod filesystem_writer;
pub mod memory_writer;
pub mod minijinja_engine;
pub mod random_node_id;

pub use filesystem_writer::FilesystemArtifactWriter;
pub use memory_writer::MemoryArtifactWriter;
pub use minijinja_engine::MinijinjaTemplateEngine;
pub use random_node_id::RandomNodeId;
