use std::str::FromStr;

use serde_yaml::{Mapping, Value};

use crate::domain::AppError;

/// A single `key=value` override from the command line.
///
/// Dotted keys address nested blocks: `proxy.proxyPort=443` or
/// `resources.jdbc/JiraDS.auth=Container`. Only the first dot splits a key,
/// except under `resources` where the second dot separates the resource
/// name from its attribute, so property names like
/// `jira_config_properties.jira.projectkey.pattern` keep their dots.
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    pub path: Vec<String>,
    pub value: Value,
}

impl FromStr for Override {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| AppError::invalid_parameter("--set", raw, "expected KEY=VALUE"))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::invalid_parameter("--set", raw, "key must not be empty"));
        }

        let depth = if key.starts_with("resources.") { 3 } else { 2 };
        let path: Vec<String> = key.splitn(depth, '.').map(str::to_string).collect();
        if path.iter().any(String::is_empty) {
            return Err(AppError::invalid_parameter("--set", raw, "key has an empty segment"));
        }

        // Values read like YAML scalars; anything unparseable stays text.
        // Floats stay text too, so `8.20` is not shortened to `8.2`.
        let value = match serde_yaml::from_str::<Value>(value) {
            Ok(Value::Number(number)) if number.is_f64() => Value::String(value.into()),
            Ok(parsed) => parsed,
            Err(_) => Value::String(value.into()),
        };
        Ok(Self { path, value })
    }
}

/// Apply overrides in order. A null value (`key=`) removes the key.
pub fn apply_overrides(document: &mut Value, overrides: &[Override]) -> Result<(), AppError> {
    if overrides.is_empty() {
        return Ok(());
    }
    if document.is_null() {
        *document = Value::Mapping(Mapping::new());
    }
    for item in overrides {
        apply_one(document, item)?;
    }
    Ok(())
}

fn apply_one(document: &mut Value, item: &Override) -> Result<(), AppError> {
    let Some((leaf, parents)) = item.path.split_last() else {
        return Ok(());
    };

    let mut current = document;
    for (depth, segment) in parents.iter().enumerate() {
        let map = as_mapping(current, &item.path[..depth])?;
        let key = Value::String(segment.clone());
        if !map.contains_key(&key) {
            if item.value.is_null() {
                return Ok(());
            }
            map.insert(key.clone(), Value::Mapping(Mapping::new()));
        }
        current = map.get_mut(&key).ok_or_else(|| {
            AppError::invalid_parameter(item.path.join("."), "", "override path vanished")
        })?;
    }

    let map = as_mapping(current, parents)?;
    let key = Value::String(leaf.clone());
    if item.value.is_null() {
        map.remove(&key);
    } else {
        map.insert(key, item.value.clone());
    }
    Ok(())
}

fn as_mapping<'a>(value: &'a mut Value, path: &[String]) -> Result<&'a mut Mapping, AppError> {
    if value.is_null() {
        *value = Value::Mapping(Mapping::new());
    }
    match value {
        Value::Mapping(map) => Ok(map),
        other => Err(AppError::invalid_parameter(
            path.join("."),
            serde_yaml::to_string(other).unwrap_or_default().trim(),
            "cannot set a nested key on a scalar value",
        )),
    }
}
