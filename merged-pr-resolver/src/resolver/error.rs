//! Resolver error types.

use thiserror::Error;

/// Errors that can occur while resolving a merge commit.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The pull request listing could not be fetched or decoded.
    #[error("Failed to list closed pull requests: {}", describe(.0))]
    ResolutionFailed(#[from] octocrab::Error),
}

/// Renders an octocrab error, surfacing the API's own message for HTTP errors.
fn describe(error: &octocrab::Error) -> String {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            format!("{} ({})", source.message, source.status_code)
        }
        other => other.to_string(),
    }
}
