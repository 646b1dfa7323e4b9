//! `conf/server.xml`.

use serde::Serialize;

use super::{Artifact, ArtifactKind, render_template};
use crate::domain::AppError;
use crate::domain::config::{
    AjpConnector, NativeSsl, ProxySettings, ResolvedConfig, TomcatConnector,
};
use crate::ports::TemplateEngine;

#[derive(Serialize)]
struct ServerContext<'a> {
    modern_listeners: bool,
    http: HttpConnector<'a>,
    proxy: Option<&'a ProxySettings>,
    ajp: Option<&'a AjpConnector>,
    ssl: Option<&'a NativeSsl>,
    context_path: &'a str,
}

#[derive(Serialize)]
struct HttpConnector<'a> {
    #[serde(flatten)]
    connector: &'a TomcatConnector,
    /// Set only when the native HTTPS connector exists.
    redirect_port: Option<u16>,
}

pub fn render<E: TemplateEngine + ?Sized>(
    cfg: &ResolvedConfig,
    engine: &E,
) -> Result<Artifact, AppError> {
    let context = ServerContext {
        modern_listeners: cfg.layout.uses_modern_listeners(),
        http: HttpConnector {
            connector: &cfg.tomcat,
            redirect_port: cfg.native_ssl.as_ref().map(|ssl| ssl.https_port),
        },
        proxy: cfg.proxy.as_ref(),
        ajp: cfg.ajp.as_ref(),
        ssl: cfg.native_ssl.as_ref(),
        context_path: cfg.tomcat.context_path.as_deref().unwrap_or_default(),
    };
    render_template(ArtifactKind::ServerXml, cfg, engine, &context)
}
