use std::io;

use thiserror::Error;

/// Library-wide error type for jira-config operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure, surfaced verbatim from the artifact writer.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Version string could not be parsed as dotted numeric segments.
    #[error("Invalid version '{0}': expected dotted numeric segments such as 7.0.4 or 6.3.4a")]
    InvalidVersion(String),

    /// A parameter without a default was not supplied.
    #[error("Missing required parameter '{0}'")]
    MissingRequiredField(String),

    /// The `db` parameter names a database kind that has no URL template.
    #[error(
        "Unsupported database '{0}': must be one of embedded, postgresql, mysql, sqlserver, oracle"
    )]
    UnsupportedDatabase(String),

    /// Clustering was enabled without a shared home directory.
    #[error("Clustering is enabled (datacenter = true) but 'shared_homedir' is not set")]
    MissingClusterConfig,

    /// A parameter was supplied with a value of the wrong shape.
    #[error("Invalid value '{value}' for parameter '{name}': {reason}")]
    InvalidParameter { name: String, value: String, reason: String },

    /// A template could not be rendered from the resolved configuration.
    #[error("Failed to render {artifact}: {details}")]
    Render { artifact: String, details: String },

    /// Parameter file was not found at the given location.
    #[error("Parameter file not found: {0}")]
    ParamsFileNotFound(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub(crate) fn invalid_parameter(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AppError::InvalidParameter { name: name.into(), value: value.into(), reason: reason.into() }
    }

    pub(crate) fn render(artifact: impl Into<String>, details: impl ToString) -> Self {
        AppError::Render { artifact: artifact.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidVersion(_)
            | AppError::MissingRequiredField(_)
            | AppError::UnsupportedDatabase(_)
            | AppError::MissingClusterConfig
            | AppError::InvalidParameter { .. }
            | AppError::ParseError { .. } => io::ErrorKind::InvalidInput,
            AppError::ParamsFileNotFound(_) => io::ErrorKind::NotFound,
            AppError::Render { .. } => io::ErrorKind::Other,
        }
    }
}
