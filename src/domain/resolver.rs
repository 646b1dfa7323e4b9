//! Parameter resolution: defaults, derivation and validation.
//!
//! Resolution is atomic. Every check runs before a [`ResolvedConfig`] is
//! assembled, so callers either get a complete configuration or an error
//! and never a partially defaulted one.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use crate::domain::config::tomcat::{
    DEFAULT_HTTPS_PORT, DEFAULT_KEY_ALIAS, DEFAULT_KEYSTORE_PASS, DEFAULT_KEYSTORE_TYPE,
    DEFAULT_SSL_ACCEPT_COUNT, DEFAULT_SSL_MAX_THREADS, KEYSTORE_FILE_NAME,
};
use crate::domain::config::{
    AjpConnector, ClusterSettings, DEFAULT_HOME_DIR, DEFAULT_INSTALL_ROOT, DEFAULT_USER,
    JvmSettings, NativeSsl, ProxySettings, ResolvedConfig, TomcatConnector,
};
use crate::domain::database::{DatabaseKind, DatabaseSettings, DatabaseUrl};
use crate::domain::params::{RawParams, Scalar, ScalarMap};
use crate::domain::version::InstallLayout;
use crate::domain::AppError;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_NAME: &str = "jira";
const DEFAULT_DB_USER: &str = "jiraadm";
const DEFAULT_DB_PASSWORD: &str = "mypassword";
const DEFAULT_POOL_SIZE: u32 = 20;

/// Resolve raw parameters into an immutable configuration.
pub fn resolve(raw: RawParams) -> Result<ResolvedConfig, AppError> {
    let version = required_text("version", &raw.version)?;
    let layout = InstallLayout::resolve(&version)?;
    debug!(
        version = %layout.version,
        dir = %layout.dir_name,
        listeners = ?layout.listeners,
        "resolved install layout"
    );

    let java_home = PathBuf::from(required_text("javahome", &raw.javahome)?);
    let install_root = text("installdir", &raw.installdir)?
        .map_or_else(|| PathBuf::from(DEFAULT_INSTALL_ROOT), PathBuf::from);
    let home_dir = text("homedir", &raw.homedir)?
        .map_or_else(|| PathBuf::from(DEFAULT_HOME_DIR), PathBuf::from);
    let user = text("user", &raw.user)?.unwrap_or_else(|| DEFAULT_USER.to_string());

    let defaults = JvmSettings::default();
    let jvm = JvmSettings {
        xms: text("jvm_xms", &raw.jvm_xms)?.unwrap_or(defaults.xms),
        xmx: text("jvm_xmx", &raw.jvm_xmx)?.unwrap_or(defaults.xmx),
        permgen: text("jvm_permgen", &raw.jvm_permgen)?.unwrap_or(defaults.permgen),
        java_opts: text("java_opts", &raw.java_opts)?.unwrap_or(defaults.java_opts),
    };

    let database = resolve_database(&raw, &home_dir)?;
    let tomcat = resolve_tomcat(&raw)?;
    let proxy = resolve_proxy(raw.proxy.as_ref())?;
    let ajp = resolve_ajp(raw.ajp.as_ref())?;
    let native_ssl = resolve_native_ssl(&raw, &tomcat, &home_dir)?;
    let cluster = resolve_cluster(&raw)?;

    let resources = raw
        .resources
        .iter()
        .map(|(name, attributes)| (name.clone(), stringify_map(attributes)))
        .collect();
    let extra_properties = stringify_map(&raw.jira_config_properties);

    let disable_notifications =
        flag("disable_notifications", &raw.disable_notifications)?.unwrap_or(false);
    let secure_admin_sessions =
        flag("enable_secure_admin_sessions", &raw.enable_secure_admin_sessions)?.unwrap_or(true);

    Ok(ResolvedConfig {
        layout,
        install_root,
        home_dir,
        user,
        java_home,
        jvm,
        database,
        tomcat,
        proxy,
        ajp,
        native_ssl,
        resources,
        disable_notifications,
        secure_admin_sessions,
        extra_properties,
        cluster,
    })
}

fn resolve_database(raw: &RawParams, home_dir: &Path) -> Result<DatabaseSettings, AppError> {
    let kind = match text("db", &raw.db)? {
        Some(db) => db.parse::<DatabaseKind>()?,
        None => DatabaseKind::Postgresql,
    };
    let host = text("dbserver", &raw.dbserver)?.unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
    let db_port = port("dbport", &raw.dbport)?.or(kind.default_port());
    let name = text("dbname", &raw.dbname)?.unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
    let schema =
        text("dbschema", &raw.dbschema)?.unwrap_or_else(|| kind.default_schema().to_string());

    let url = match text("dburl", &raw.dburl)? {
        Some(url) => {
            debug!(%kind, "using explicit dburl");
            DatabaseUrl::Explicit(url)
        }
        None => DatabaseUrl::Derived(kind.jdbc_url(&host, db_port, &name, home_dir)),
    };

    Ok(DatabaseSettings {
        kind,
        host,
        port: db_port,
        name,
        schema,
        user: text("dbuser", &raw.dbuser)?.unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
        password: text("dbpassword", &raw.dbpassword)?
            .unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_string()),
        pool_size: count("poolsize", &raw.poolsize)?.unwrap_or(DEFAULT_POOL_SIZE),
        url,
    })
}

fn resolve_tomcat(raw: &RawParams) -> Result<TomcatConnector, AppError> {
    let defaults = TomcatConnector::default();
    Ok(TomcatConnector {
        port: port("tomcatPort", &raw.tomcat_port)?.unwrap_or(defaults.port),
        address: text("tomcatAddress", &raw.tomcat_address)?,
        accept_count: count("tomcatAcceptCount", &raw.tomcat_accept_count)?,
        max_threads: count("tomcatMaxThreads", &raw.tomcat_max_threads)?,
        max_http_header_size: count("tomcatMaxHttpHeaderSize", &raw.tomcat_max_http_header_size)?,
        min_spare_threads: count("tomcatMinSpareThreads", &raw.tomcat_min_spare_threads)?,
        connection_timeout: count("tomcatConnectionTimeout", &raw.tomcat_connection_timeout)?,
        enable_lookups: flag("tomcatEnableLookups", &raw.tomcat_enable_lookups)?,
        protocol: text("tomcatProtocol", &raw.tomcat_protocol)?,
        use_body_encoding_for_uri: flag(
            "tomcatUseBodyEncodingForURI",
            &raw.tomcat_use_body_encoding_for_uri,
        )?,
        disable_upload_timeout: flag(
            "tomcatDisableUploadTimeout",
            &raw.tomcat_disable_upload_timeout,
        )?,
        context_path: text("contextpath", &raw.contextpath)?,
    })
}

fn resolve_proxy(map: Option<&ScalarMap>) -> Result<Option<ProxySettings>, AppError> {
    let Some(map) = map.filter(|m| !m.is_empty()) else {
        return Ok(None);
    };
    reject_unknown_keys("proxy", map, &["scheme", "proxyName", "proxyPort"])?;

    let scheme = block_text("proxy", "scheme", map)?;
    let proxy_name = block_text("proxy", "proxyName", map)?;
    let proxy_port = block_port("proxy", "proxyPort", map)?;
    Ok(Some(ProxySettings { scheme, proxy_name, proxy_port }))
}

fn resolve_ajp(map: Option<&ScalarMap>) -> Result<Option<AjpConnector>, AppError> {
    let Some(map) = map.filter(|m| !m.is_empty()) else {
        return Ok(None);
    };
    reject_unknown_keys("ajp", map, &["port", "protocol"])?;

    let port = block_port("ajp", "port", map)?;
    let protocol = block_text("ajp", "protocol", map)?;
    Ok(Some(AjpConnector { port, protocol }))
}

fn resolve_native_ssl(
    raw: &RawParams,
    tomcat: &TomcatConnector,
    home_dir: &Path,
) -> Result<Option<NativeSsl>, AppError> {
    if !flag("tomcatNativeSsl", &raw.tomcat_native_ssl)?.unwrap_or(false) {
        return Ok(None);
    }

    let keystore_file = text("tomcatKeystoreFile", &raw.tomcat_keystore_file)?
        .unwrap_or_else(|| home_dir.join(KEYSTORE_FILE_NAME).display().to_string());

    Ok(Some(NativeSsl {
        https_port: port("tomcatHttpsPort", &raw.tomcat_https_port)?.unwrap_or(DEFAULT_HTTPS_PORT),
        address: tomcat.address.clone(),
        max_threads: tomcat.max_threads.unwrap_or(DEFAULT_SSL_MAX_THREADS),
        accept_count: tomcat.accept_count.unwrap_or(DEFAULT_SSL_ACCEPT_COUNT),
        key_alias: text("tomcatKeyAlias", &raw.tomcat_key_alias)?
            .unwrap_or_else(|| DEFAULT_KEY_ALIAS.to_string()),
        keystore_file,
        keystore_pass: text("tomcatKeystorePass", &raw.tomcat_keystore_pass)?
            .unwrap_or_else(|| DEFAULT_KEYSTORE_PASS.to_string()),
        keystore_type: text("tomcatKeystoreType", &raw.tomcat_keystore_type)?
            .unwrap_or_else(|| DEFAULT_KEYSTORE_TYPE.to_string()),
    }))
}

fn resolve_cluster(raw: &RawParams) -> Result<Option<ClusterSettings>, AppError> {
    if !flag("datacenter", &raw.datacenter)?.unwrap_or(false) {
        if raw.shared_homedir.is_some() {
            debug!("shared_homedir ignored because datacenter is not enabled");
        }
        return Ok(None);
    }

    let shared_home =
        text("shared_homedir", &raw.shared_homedir)?.ok_or(AppError::MissingClusterConfig)?;
    Ok(Some(ClusterSettings {
        shared_home: PathBuf::from(shared_home),
        ehcache_listener_host: text("ehcache_listener_host", &raw.ehcache_listener_host)?,
        ehcache_listener_port: port("ehcache_listener_port", &raw.ehcache_listener_port)?,
        ehcache_object_port: port("ehcache_object_port", &raw.ehcache_object_port)?,
    }))
}

/// Text-typed parameter. Bare floats are refused: YAML has already
/// normalised `7.10` to `7.1`, so the written spelling is gone.
fn text(name: &str, value: &Option<Scalar>) -> Result<Option<String>, AppError> {
    value.as_ref().map(|scalar| scalar_text(name, scalar)).transpose()
}

fn scalar_text(name: &str, scalar: &Scalar) -> Result<String, AppError> {
    match scalar {
        Scalar::Float(_) => Err(AppError::invalid_parameter(
            name,
            scalar.to_string(),
            "read as a number; quote the value to keep it as text",
        )),
        other => Ok(other.to_string()),
    }
}

fn required_text(name: &str, value: &Option<Scalar>) -> Result<String, AppError> {
    text(name, value)?
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::MissingRequiredField(name.to_string()))
}

fn port(name: &str, value: &Option<Scalar>) -> Result<Option<u16>, AppError> {
    value.as_ref().map(|scalar| parse_port(name, scalar)).transpose()
}

fn parse_port(name: &str, scalar: &Scalar) -> Result<u16, AppError> {
    let parsed = match scalar {
        Scalar::Integer(value) => u16::try_from(*value).ok(),
        Scalar::Text(value) => value.trim().parse::<u16>().ok(),
        Scalar::Bool(_) | Scalar::Float(_) => None,
    };
    parsed.filter(|p| *p != 0).ok_or_else(|| {
        AppError::invalid_parameter(name, scalar.to_string(), "expected a port between 1 and 65535")
    })
}

fn count(name: &str, value: &Option<Scalar>) -> Result<Option<u32>, AppError> {
    value
        .as_ref()
        .map(|scalar| {
            let parsed = match scalar {
                Scalar::Integer(value) => u32::try_from(*value).ok(),
                Scalar::Text(value) => value.trim().parse::<u32>().ok(),
                Scalar::Bool(_) | Scalar::Float(_) => None,
            };
            parsed.ok_or_else(|| {
                AppError::invalid_parameter(
                    name,
                    scalar.to_string(),
                    "expected a non-negative integer",
                )
            })
        })
        .transpose()
}

fn flag(name: &str, value: &Option<Scalar>) -> Result<Option<bool>, AppError> {
    value
        .as_ref()
        .map(|scalar| match scalar {
            Scalar::Bool(value) => Ok(*value),
            Scalar::Text(value) if value.eq_ignore_ascii_case("true") => Ok(true),
            Scalar::Text(value) if value.eq_ignore_ascii_case("false") => Ok(false),
            other => Err(AppError::invalid_parameter(
                name,
                other.to_string(),
                "expected true or false",
            )),
        })
        .transpose()
}

fn block_text(block: &str, key: &str, map: &ScalarMap) -> Result<String, AppError> {
    let scalar =
        map.get(key).ok_or_else(|| AppError::MissingRequiredField(format!("{block}.{key}")))?;
    scalar_text(&format!("{block}.{key}"), scalar)
}

fn block_port(block: &str, key: &str, map: &ScalarMap) -> Result<u16, AppError> {
    let scalar =
        map.get(key).ok_or_else(|| AppError::MissingRequiredField(format!("{block}.{key}")))?;
    parse_port(&format!("{block}.{key}"), scalar)
}

fn reject_unknown_keys(block: &str, map: &ScalarMap, allowed: &[&str]) -> Result<(), AppError> {
    match map.iter().find(|(key, _)| !allowed.contains(&key.as_str())) {
        Some((key, value)) => Err(AppError::invalid_parameter(
            format!("{block}.{key}"),
            value.to_string(),
            format!("unknown attribute; expected one of {}", allowed.join(", ")),
        )),
        None => Ok(()),
    }
}

fn stringify_map(map: &ScalarMap) -> IndexMap<String, String> {
    map.iter().map(|(key, value)| (key.clone(), value.to_string())).collect()
}
