use std::fs;
use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use super::overrides::{Override, apply_overrides};
use crate::domain::{AppError, RawParams};

/// Syntax of a parameter file, picked from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsFormat {
    Yaml,
    Json,
    Toml,
}

impl ParamsFormat {
    /// Anything that is not `.json` or `.toml` is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ParamsFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ParamsFormat::Toml,
            _ => ParamsFormat::Yaml,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ParamsFormat::Yaml => "YAML parameters",
            ParamsFormat::Json => "JSON parameters",
            ParamsFormat::Toml => "TOML parameters",
        }
    }
}

/// Parse parameter text into a YAML document without validating keys.
pub fn parse_params(content: &str, format: ParamsFormat) -> Result<Value, AppError> {
    let parse_error =
        |details: String| AppError::ParseError { what: format.label().to_string(), details };
    match format {
        ParamsFormat::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string())),
        ParamsFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string())),
        ParamsFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string())),
    }
}

/// Read a parameter file, layer `--set` overrides on top and validate the
/// result against the known parameter keys.
pub fn load_params(path: &Path, overrides: &[String]) -> Result<RawParams, AppError> {
    if !path.is_file() {
        return Err(AppError::ParamsFileNotFound(path.display().to_string()));
    }
    let format = ParamsFormat::from_path(path);
    debug!(path = %path.display(), ?format, "loading parameters");

    let content = fs::read_to_string(path)?;
    let mut document = parse_params(&content, format)?;

    let overrides = overrides.iter().map(|raw| raw.parse()).collect::<Result<Vec<Override>, _>>()?;
    apply_overrides(&mut document, &overrides)?;

    RawParams::from_yaml_value(document)
}
