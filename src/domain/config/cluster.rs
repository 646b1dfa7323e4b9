//! Data Center clustering settings.

use std::path::PathBuf;

use serde::Serialize;

/// Present only when clustering is enabled; the shared home is mandatory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterSettings {
    pub shared_home: PathBuf,
    pub ehcache_listener_host: Option<String>,
    pub ehcache_listener_port: Option<u16>,
    pub ehcache_object_port: Option<u16>,
}
