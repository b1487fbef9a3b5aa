//! Merge-commit resolution against the GitHub pull request listing.
//!
//! Given a commit SHA produced by a merge, this module finds the closed pull
//! request whose recorded merge commit equals that SHA.

mod entry;
mod error;
mod record;

pub use entry::{BranchRef, LabelEntry, PullRequestEntry, UserEntry};
pub use error::ResolveError;
pub use record::PullRequestRecord;

use crate::config::Repository;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::{debug, info, info_span, Instrument};

/// Results per page for the pull request listing.
pub const RESULTS_PER_PAGE: u8 = 100;

/// Query parameters for listing closed pull requests.
#[derive(Debug, Serialize)]
struct ListClosedParams {
    state: &'static str,
    sort: &'static str,
    direction: &'static str,
    per_page: u8,
    page: u32,
}

impl ListClosedParams {
    fn page(page: u32) -> Self {
        Self {
            state: "closed",
            sort: "updated",
            direction: "desc",
            per_page: RESULTS_PER_PAGE,
            page,
        }
    }
}

/// Resolves the pull request whose merge produced `merge_sha`.
///
/// Closed pull requests are listed most-recently-updated first, 100 per page.
/// Only the first `max_pages` pages are inspected (at least one); listing
/// also stops early once a page comes back short.
///
/// # Returns
///
/// The first matching pull request in listing order, or `None` if no listed
/// pull request was merged as `merge_sha`.
///
/// # Errors
///
/// Returns [`ResolveError`] if a listing request fails. No retries are made.
pub async fn resolve(
    octocrab: &Octocrab,
    repository: &Repository,
    merge_sha: &str,
    max_pages: u32,
) -> Result<Option<PullRequestRecord>, ResolveError> {
    let span = info_span!(
        "resolve",
        repo = %repository,
        sha = %merge_sha
    );

    async {
        let max_pages = max_pages.max(1);

        for page in 1..=max_pages {
            let entries = list_closed_pull_requests(octocrab, repository, page).await?;
            let count = entries.len();
            debug!(page, count, "Fetched closed pull requests");

            if let Some(record) = find_merged_pull_request(entries, merge_sha) {
                info!(number = record.number, page, "Found merged pull request");
                return Ok(Some(record));
            }

            if count < usize::from(RESULTS_PER_PAGE) {
                break;
            }
        }

        info!(max_pages, "No merged pull request matches commit");
        Ok(None)
    }
    .instrument(span)
    .await
}

/// Finds the first entry whose merge commit equals `merge_sha`.
///
/// The comparison is an exact, case-sensitive string match. Entries without a
/// merge commit never match.
pub fn find_merged_pull_request(
    entries: Vec<PullRequestEntry>,
    merge_sha: &str,
) -> Option<PullRequestRecord> {
    entries
        .into_iter()
        .find(|entry| entry.merge_commit_sha.as_deref() == Some(merge_sha))
        .map(PullRequestRecord::from)
}

/// Fetches one page of closed pull requests.
async fn list_closed_pull_requests(
    octocrab: &Octocrab,
    repository: &Repository,
    page: u32,
) -> Result<Vec<PullRequestEntry>, ResolveError> {
    let route = format!("/repos/{}/{}/pulls", repository.owner, repository.name);
    let entries = octocrab
        .get::<Vec<PullRequestEntry>, _, _>(route, Some(&ListClosedParams::page(page)))
        .await?;
    Ok(entries)
}
