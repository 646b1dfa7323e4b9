//! Raw deployment parameters as supplied by the declarative caller.
//!
//! Key names follow the deployment module's public parameter names
//! (`tomcatPort`, `dbserver`, `shared_homedir`, ...). Values are kept as
//! loosely typed [`Scalar`]s here; the resolver owns all validation.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// A scalar parameter value as written in the parameter file.
///
/// Callers frequently quote numbers (`tomcatPort: '9229'`) or leave them
/// bare (`tomcatPort: 9229`); both forms are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(value) => write!(f, "{value}"),
            Scalar::Integer(value) => write!(f, "{value}"),
            Scalar::Float(value) => write!(f, "{value}"),
            Scalar::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

/// Named attribute map used by `proxy`, `ajp` and each `resources` entry.
pub type ScalarMap = IndexMap<String, Scalar>;

/// Unvalidated parameter set. Unknown keys are rejected at parse time.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RawParams {
    pub version: Option<Scalar>,
    pub javahome: Option<Scalar>,
    pub installdir: Option<Scalar>,
    pub homedir: Option<Scalar>,
    pub user: Option<Scalar>,

    pub jvm_xms: Option<Scalar>,
    pub jvm_xmx: Option<Scalar>,
    pub jvm_permgen: Option<Scalar>,
    pub java_opts: Option<Scalar>,

    pub db: Option<Scalar>,
    pub dbserver: Option<Scalar>,
    pub dbport: Option<Scalar>,
    pub dbname: Option<Scalar>,
    pub dbschema: Option<Scalar>,
    pub dbuser: Option<Scalar>,
    pub dbpassword: Option<Scalar>,
    pub dburl: Option<Scalar>,
    pub poolsize: Option<Scalar>,

    #[serde(rename = "tomcatPort")]
    pub tomcat_port: Option<Scalar>,
    #[serde(rename = "tomcatAddress")]
    pub tomcat_address: Option<Scalar>,
    #[serde(rename = "tomcatAcceptCount")]
    pub tomcat_accept_count: Option<Scalar>,
    #[serde(rename = "tomcatMaxThreads")]
    pub tomcat_max_threads: Option<Scalar>,
    #[serde(rename = "tomcatMaxHttpHeaderSize")]
    pub tomcat_max_http_header_size: Option<Scalar>,
    #[serde(rename = "tomcatMinSpareThreads")]
    pub tomcat_min_spare_threads: Option<Scalar>,
    #[serde(rename = "tomcatConnectionTimeout")]
    pub tomcat_connection_timeout: Option<Scalar>,
    #[serde(rename = "tomcatEnableLookups")]
    pub tomcat_enable_lookups: Option<Scalar>,
    #[serde(rename = "tomcatProtocol")]
    pub tomcat_protocol: Option<Scalar>,
    #[serde(rename = "tomcatUseBodyEncodingForURI")]
    pub tomcat_use_body_encoding_for_uri: Option<Scalar>,
    #[serde(rename = "tomcatDisableUploadTimeout")]
    pub tomcat_disable_upload_timeout: Option<Scalar>,
    pub contextpath: Option<Scalar>,

    pub proxy: Option<ScalarMap>,
    pub ajp: Option<ScalarMap>,

    #[serde(rename = "tomcatNativeSsl")]
    pub tomcat_native_ssl: Option<Scalar>,
    #[serde(rename = "tomcatHttpsPort")]
    pub tomcat_https_port: Option<Scalar>,
    #[serde(rename = "tomcatKeyAlias")]
    pub tomcat_key_alias: Option<Scalar>,
    #[serde(rename = "tomcatKeystoreFile")]
    pub tomcat_keystore_file: Option<Scalar>,
    #[serde(rename = "tomcatKeystorePass")]
    pub tomcat_keystore_pass: Option<Scalar>,
    #[serde(rename = "tomcatKeystoreType")]
    pub tomcat_keystore_type: Option<Scalar>,

    #[serde(default)]
    pub resources: IndexMap<String, ScalarMap>,

    pub disable_notifications: Option<Scalar>,
    pub enable_secure_admin_sessions: Option<Scalar>,
    #[serde(default)]
    pub jira_config_properties: ScalarMap,

    pub datacenter: Option<Scalar>,
    pub shared_homedir: Option<Scalar>,
    pub ehcache_listener_host: Option<Scalar>,
    pub ehcache_listener_port: Option<Scalar>,
    pub ehcache_object_port: Option<Scalar>,
}

impl RawParams {
    /// Minimal parameter set: the two values that have no default.
    pub fn new(version: impl Into<String>, javahome: impl Into<String>) -> Self {
        Self {
            version: Some(Scalar::Text(version.into())),
            javahome: Some(Scalar::Text(javahome.into())),
            ..Self::default()
        }
    }

    /// Build parameters from an already parsed YAML document.
    pub fn from_yaml_value(value: serde_yaml::Value) -> Result<Self, AppError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value)
            .map_err(|e| AppError::ParseError { what: "parameters".into(), details: e.to_string() })
    }

    /// Parse parameters from YAML text.
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|e| {
            AppError::ParseError { what: "parameters".into(), details: e.to_string() }
        })?;
        Self::from_yaml_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_quoted_and_bare_numbers() {
        let params = RawParams::from_yaml_str(
            "version: '6.3.4a'\njavahome: /opt/java\ntomcatPort: '9229'\ntomcatMaxThreads: 300\n",
        )
        .unwrap();
        assert_eq!(params.tomcat_port, Some(Scalar::Text("9229".into())));
        assert_eq!(params.tomcat_max_threads, Some(Scalar::Integer(300)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = RawParams::from_yaml_str("version: '7.0.4'\ntomcatPrt: 8080\n").unwrap_err();
        assert!(matches!(
            err,
            AppError::ParseError { details, .. } if details.contains("tomcatPrt")
        ));
    }

    #[test]
    fn keeps_resource_and_property_order() {
        let params = RawParams::from_yaml_str(
            "resources:\n  zeta:\n    type: a\n    auth: b\n  alpha:\n    auth: c\n\
             jira_config_properties:\n  z.key: 1\n  a.key: 2\n",
        )
        .unwrap();
        let names: Vec<_> = params.resources.keys().cloned().collect();
        assert_eq!(names, ["zeta", "alpha"]);
        let attrs: Vec<_> = params.resources["zeta"].keys().cloned().collect();
        assert_eq!(attrs, ["type", "auth"]);
        let keys: Vec<_> = params.jira_config_properties.keys().cloned().collect();
        assert_eq!(keys, ["z.key", "a.key"]);
    }

    #[test]
    fn empty_document_yields_empty_params() {
        let params = RawParams::from_yaml_str("").unwrap();
        assert!(params.version.is_none());
        assert!(params.resources.is_empty());
    }

    #[test]
    fn scalar_display_is_plain_text() {
        assert_eq!(Scalar::Bool(true).to_string(), "true");
        assert_eq!(Scalar::Integer(8009).to_string(), "8009");
        assert_eq!(Scalar::from("AJP/1.3").to_string(), "AJP/1.3");
    }
}
