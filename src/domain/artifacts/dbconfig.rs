//! `dbconfig.xml` in the Jira home directory.

use serde::Serialize;

use super::{Artifact, ArtifactKind, render_template};
use crate::domain::AppError;
use crate::domain::config::ResolvedConfig;
use crate::ports::TemplateEngine;

#[derive(Serialize)]
struct DbConfigContext<'a> {
    database_type: &'static str,
    schema: &'a str,
    url: &'a str,
    driver: &'static str,
    user: &'a str,
    password: &'a str,
    pool_size: u32,
    validation_query: Option<&'static str>,
}

pub fn render<E: TemplateEngine + ?Sized>(
    cfg: &ResolvedConfig,
    engine: &E,
) -> Result<Artifact, AppError> {
    let db = &cfg.database;
    let context = DbConfigContext {
        database_type: db.kind.database_type(),
        schema: &db.schema,
        url: db.url.as_str(),
        driver: db.kind.driver_class(),
        user: &db.user,
        password: &db.password,
        pool_size: db.pool_size,
        validation_query: db.kind.validation_query(),
    };
    render_template(ArtifactKind::DbConfig, cfg, engine, &context)
}
