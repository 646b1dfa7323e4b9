//! Resolved configuration shared by every artifact renderer.

pub mod cluster;
pub mod tomcat;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::database::DatabaseSettings;
use crate::domain::version::InstallLayout;

pub use cluster::ClusterSettings;
pub use tomcat::{AjpConnector, NativeSsl, ProxySettings, TomcatConnector};

pub const DEFAULT_INSTALL_ROOT: &str = "/opt/jira";
pub const DEFAULT_HOME_DIR: &str = "/home/jira";
pub const DEFAULT_USER: &str = "jira";

/// JVM sizing written into `setenv.sh`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JvmSettings {
    pub xms: String,
    pub xmx: String,
    pub permgen: String,
    pub java_opts: String,
}

impl Default for JvmSettings {
    fn default() -> Self {
        Self {
            xms: "256m".to_string(),
            xmx: "1024m".to_string(),
            permgen: "256m".to_string(),
            java_opts: String::new(),
        }
    }
}

/// Fully validated and defaulted parameter set.
///
/// Built once per invocation by [`crate::domain::resolver::resolve`] and
/// never mutated afterwards. Optional blocks are `Option`s of fully
/// populated structs, so a renderer can never observe a half-filled block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub layout: InstallLayout,
    pub install_root: PathBuf,
    pub home_dir: PathBuf,
    pub user: String,
    pub java_home: PathBuf,
    pub jvm: JvmSettings,
    pub database: DatabaseSettings,
    pub tomcat: TomcatConnector,
    pub proxy: Option<ProxySettings>,
    pub ajp: Option<AjpConnector>,
    pub native_ssl: Option<NativeSsl>,
    pub resources: IndexMap<String, IndexMap<String, String>>,
    pub disable_notifications: bool,
    pub secure_admin_sessions: bool,
    pub extra_properties: IndexMap<String, String>,
    pub cluster: Option<ClusterSettings>,
}

impl ResolvedConfig {
    /// `<install_root>/<distribution dir>`.
    pub fn install_path(&self) -> PathBuf {
        self.layout.install_path(&self.install_root)
    }
}
