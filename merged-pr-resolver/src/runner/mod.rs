//! Orchestrates a single merge-commit resolution.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::config::{parse_api_url, require_non_empty};
use crate::outputs::{command, StepOutputs};
use crate::resolver::{resolve, PullRequestRecord};
use octocrab::Octocrab;
use tracing::info;

/// Resolves the pull request behind a merge commit and publishes it.
pub struct Runner {
    config: RunnerConfig,
    octocrab: Octocrab,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the token or SHA is empty, the API URL is
    /// invalid, or the client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        require_non_empty("token", config.token())?;
        require_non_empty("sha", config.merge_sha())?;
        let api_url = parse_api_url(config.api_url())?;

        let octocrab = Octocrab::builder()
            .personal_token(config.token().to_string())
            .base_uri(api_url.as_str().trim_end_matches('/'))?
            .build()?;

        Ok(Self { config, octocrab })
    }

    /// Returns the run configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Resolves the configured commit and publishes the outputs.
    ///
    /// # Returns
    ///
    /// The published record, or `None` if no pull request matched. Nothing is
    /// published in that case.
    pub async fn run(
        &self,
        outputs: &StepOutputs,
    ) -> Result<Option<PullRequestRecord>, RunnerError> {
        let repository = self.config.repository();
        let merge_sha = self.config.merge_sha();
        info!(repo = %repository, sha = %merge_sha, "Resolving merged pull request");

        let Some(record) = resolve(
            &self.octocrab,
            repository,
            merge_sha,
            self.config.max_pages(),
        )
        .await?
        else {
            command::debug("pull request not found");
            return Ok(None);
        };

        outputs.publish(&record)?;
        info!(number = record.number, title = %record.title, "Published pull request outputs");
        Ok(Some(record))
    }
}

/// Renders a failed run as an `::error::` workflow command.
///
/// The runner marks the step failed when this line is printed and the
/// process exits non-zero.
pub fn report_failure(error: &RunnerError) -> String {
    command::format_command("error", &[], &error.to_string())
}
