//! Run configuration types.
//!
//! This module holds the values the action is invoked with: the repository
//! identity and the API base URL validation.

mod error;
mod repository;

pub use error::ConfigError;
pub use repository::Repository;

use url::Url;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Parses and validates an API base URL.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidApiUrl`] if the value is not an absolute URL.
pub fn parse_api_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value.trim()).map_err(|source| ConfigError::InvalidApiUrl {
        value: value.to_string(),
        source,
    })
}

/// Rejects empty values for required settings.
///
/// # Errors
///
/// Returns [`ConfigError::MissingValue`] if the value is empty or whitespace.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingValue { field });
    }
    Ok(())
}
