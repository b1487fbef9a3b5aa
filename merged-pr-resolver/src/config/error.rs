//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while validating run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Repository was not in `owner/name` form.
    #[error("Invalid repository '{value}': expected 'owner/name'")]
    InvalidRepository { value: String },

    /// A required value was empty.
    #[error("Missing required value: {field}")]
    MissingValue { field: &'static str },

    /// API base URL could not be parsed.
    #[error("Invalid API URL '{value}': {source}")]
    InvalidApiUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}
