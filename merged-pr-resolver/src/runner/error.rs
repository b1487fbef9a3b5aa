//! Runner error types.

/// Errors that can occur during a resolution run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Invalid run configuration.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Pull request lookup failed.
    #[error(transparent)]
    Resolve(#[from] crate::resolver::ResolveError),

    /// Step outputs could not be written.
    #[error(transparent)]
    Output(#[from] crate::outputs::OutputError),
}
