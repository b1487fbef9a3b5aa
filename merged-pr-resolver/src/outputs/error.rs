//! Step output error types.

use thiserror::Error;

/// Errors that can occur while publishing step outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write to the output file.
    #[error("Failed to write output file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Output name or value contains the heredoc delimiter.
    #[error("Output '{name}' contains the delimiter '{delimiter}'")]
    DelimiterCollision { name: String, delimiter: String },
}
