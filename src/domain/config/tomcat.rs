//! Tomcat connector settings.

use serde::Serialize;

pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_HTTPS_PORT: u16 = 8443;
pub const DEFAULT_SSL_MAX_THREADS: u32 = 150;
pub const DEFAULT_SSL_ACCEPT_COUNT: u32 = 100;
pub const DEFAULT_KEY_ALIAS: &str = "jira";
pub const DEFAULT_KEYSTORE_PASS: &str = "changeit";
pub const DEFAULT_KEYSTORE_TYPE: &str = "JKS";
pub const KEYSTORE_FILE_NAME: &str = "jira.jks";

/// Primary HTTP connector. Every field except `port` is sparse: it is
/// written to `server.xml` only when it was supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TomcatConnector {
    pub port: u16,
    pub address: Option<String>,
    pub accept_count: Option<u32>,
    pub max_threads: Option<u32>,
    pub max_http_header_size: Option<u32>,
    pub min_spare_threads: Option<u32>,
    pub connection_timeout: Option<u32>,
    pub enable_lookups: Option<bool>,
    pub protocol: Option<String>,
    pub use_body_encoding_for_uri: Option<bool>,
    pub disable_upload_timeout: Option<bool>,
    pub context_path: Option<String>,
}

impl Default for TomcatConnector {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            address: None,
            accept_count: None,
            max_threads: None,
            max_http_header_size: None,
            min_spare_threads: None,
            connection_timeout: None,
            enable_lookups: None,
            protocol: None,
            use_body_encoding_for_uri: None,
            disable_upload_timeout: None,
            context_path: None,
        }
    }
}

/// Reverse-proxy attributes added to the HTTP connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxySettings {
    pub scheme: String,
    pub proxy_name: String,
    pub proxy_port: u16,
}

/// AJP connector for a fronting Apache httpd.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AjpConnector {
    pub port: u16,
    pub protocol: String,
}

/// Native HTTPS connector. Only constructed when enabled, with every
/// field resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NativeSsl {
    pub https_port: u16,
    pub address: Option<String>,
    pub max_threads: u32,
    pub accept_count: u32,
    pub key_alias: String,
    pub keystore_file: String,
    pub keystore_pass: String,
    pub keystore_type: String,
}
