//! Runner configuration.

use crate::config::{Repository, DEFAULT_API_URL};

/// Configuration for a single merge-commit resolution run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// GitHub token used for API calls.
    token: String,
    /// Repository whose pull requests are searched.
    repository: Repository,
    /// Commit SHA to resolve.
    merge_sha: String,
    /// GitHub REST API base URL.
    api_url: String,
    /// Maximum number of listing pages to inspect.
    max_pages: u32,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    ///
    /// Defaults to the public GitHub API and a single listing page.
    pub fn new(token: String, repository: Repository, merge_sha: String) -> Self {
        Self {
            token,
            repository,
            merge_sha,
            api_url: DEFAULT_API_URL.to_string(),
            max_pages: 1,
        }
    }

    /// Sets a custom API base URL (e.g. GitHub Enterprise Server).
    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    /// Sets how many listing pages may be inspected.
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the repository being searched.
    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    /// Returns the commit SHA to resolve.
    pub fn merge_sha(&self) -> &str {
        &self.merge_sha
    }

    /// Returns the API base URL.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns the maximum number of listing pages.
    pub fn max_pages(&self) -> u32 {
        self.max_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> Repository {
        Repository::new("octo-org", "hello-world").unwrap()
    }

    #[test]
    fn defaults_to_public_api_and_single_page() {
        let config = RunnerConfig::new("token".to_string(), repository(), "abc123".to_string());

        assert_eq!(config.api_url(), "https://api.github.com");
        assert_eq!(config.max_pages(), 1);
        assert_eq!(config.merge_sha(), "abc123");
        assert_eq!(config.repository().full_name(), "octo-org/hello-world");
    }

    #[test]
    fn max_pages_is_at_least_one() {
        let config = RunnerConfig::new("token".to_string(), repository(), "abc123".to_string())
            .with_max_pages(0);
        assert_eq!(config.max_pages(), 1);
    }
}
