//! Template engine backed by minijinja and the embedded artifact templates.

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::domain::AppError;
use crate::ports::TemplateEngine;

/// Embedded artifact templates (`<file name>.j2`).
static TEMPLATES_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Renders the embedded artifact templates.
///
/// Values are substituted verbatim: auto-escaping is off for every
/// template, including the XML ones, so a `dburl` lands in `dbconfig.xml`
/// exactly as supplied.
pub struct MinijinjaTemplateEngine {
    env: Environment<'static>,
}

impl MinijinjaTemplateEngine {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for file in TEMPLATES_DIR.files() {
            let name = file.path().to_str().ok_or_else(|| {
                AppError::render(
                    file.path().display().to_string(),
                    "template name is not valid UTF-8",
                )
            })?;
            let source = file
                .contents_utf8()
                .ok_or_else(|| AppError::render(name, "template is not valid UTF-8"))?;
            env.add_template(name, source).map_err(|e| AppError::render(name, e))?;
        }

        Ok(Self { env })
    }

    /// Names of every registered template.
    pub fn template_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.env.templates().map(|(name, _)| name).collect();
        names.sort_unstable();
        names
    }
}

impl TemplateEngine for MinijinjaTemplateEngine {
    fn render(
        &self,
        template_name: &str,
        context: &serde_json::Value,
    ) -> Result<String, AppError> {
        let template =
            self.env.get_template(template_name).map_err(|e| AppError::render(template_name, e))?;
        template
            .render(Value::from_serialize(context))
            .map_err(|e| AppError::render(template_name, e))
    }
}
