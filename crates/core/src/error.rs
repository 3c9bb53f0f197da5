//! Error types for loading and checking environments

/// Standard result type for environment operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the environment record.
///
/// The record itself never fails; these come from the loader, from
/// serialization and from opt-in validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("{field}: invalid URL - {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Unknown variant '{0}', expected 'development' or 'production'")]
    UnknownVariant(String),
}

impl Error {
    /// Create an invalid field error
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
