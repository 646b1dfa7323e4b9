//! Shared fixtures for unit tests.

use crate::adapters::MinijinjaTemplateEngine;
use crate::domain::{RawParams, ResolvedConfig, resolve};
use crate::ports::NodeIdSource;

/// Resolve a YAML parameter document, panicking on any error.
pub fn resolved(yaml: &str) -> ResolvedConfig {
    let raw = RawParams::from_yaml_str(yaml).expect("test parameters should parse");
    resolve(raw).expect("test parameters should resolve")
}

pub fn engine() -> MinijinjaTemplateEngine {
    MinijinjaTemplateEngine::new().expect("embedded templates should load")
}

/// Node id source returning the same token every time.
#[derive(Debug, Clone)]
pub struct FixedNodeId(String);

impl FixedNodeId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Default for FixedNodeId {
    fn default() -> Self {
        Self::new("fixed-node")
    }
}

impl NodeIdSource for FixedNodeId {
    fn next_node_id(&self) -> String {
        self.0.clone()
    }
}
