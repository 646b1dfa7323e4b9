use crate::domain::AppError;

/// Port for the templating primitive.
///
/// Renderers describe *what* goes into an artifact as a serializable
/// context; the engine owns template storage and substitution.
pub trait TemplateEngine {
    /// Render the named template with the given bindings.
    fn render(&self, template_name: &str, context: &serde_json::Value)
    -> Result<String, AppError>;
}
