//! Pull request metadata published to downstream steps.

use super::entry::PullRequestEntry;

/// Metadata of the pull request whose merge produced a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRecord {
    /// Pull request title.
    pub title: String,

    /// Description body, if any.
    pub body: Option<String>,

    /// Source branch name.
    pub head_branch: String,

    /// Target branch name.
    pub base_branch: String,

    /// Pull request number within the repository.
    pub number: u64,

    /// Label names in API order; `None` when the pull request has no labels.
    pub labels: Option<Vec<String>>,

    /// Assignee logins in API order; `None` when nobody is assigned.
    pub assignees: Option<Vec<String>>,
}

impl From<PullRequestEntry> for PullRequestRecord {
    fn from(entry: PullRequestEntry) -> Self {
        Self {
            title: entry.title,
            body: entry.body,
            head_branch: entry.head.ref_field,
            base_branch: entry.base.ref_field,
            number: entry.number,
            labels: non_empty(entry.labels.map(|labels| {
                labels.into_iter().map(|label| label.name).collect()
            })),
            assignees: non_empty(entry.assignees.map(|users| {
                users.into_iter().map(|user| user.login).collect()
            })),
        }
    }
}

fn non_empty(values: Option<Vec<String>>) -> Option<Vec<String>> {
    values.filter(|values| !values.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::entry::{BranchRef, LabelEntry, UserEntry};

    fn entry() -> PullRequestEntry {
        PullRequestEntry {
            number: 42,
            title: "Bump dependencies".to_string(),
            body: Some("Routine bump.".to_string()),
            head: BranchRef {
                ref_field: "deps/bump".to_string(),
            },
            base: BranchRef {
                ref_field: "main".to_string(),
            },
            merge_commit_sha: Some("abc123".to_string()),
            labels: None,
            assignees: None,
        }
    }

    #[test]
    fn copies_scalar_fields() {
        let record = PullRequestRecord::from(entry());

        assert_eq!(record.title, "Bump dependencies");
        assert_eq!(record.body.as_deref(), Some("Routine bump."));
        assert_eq!(record.head_branch, "deps/bump");
        assert_eq!(record.base_branch, "main");
        assert_eq!(record.number, 42);
    }

    #[test]
    fn keeps_label_and_assignee_order() {
        let mut entry = entry();
        entry.labels = Some(vec![
            LabelEntry {
                name: "release".to_string(),
            },
            LabelEntry {
                name: "dependencies".to_string(),
            },
        ]);
        entry.assignees = Some(vec![
            UserEntry {
                login: "zoe".to_string(),
            },
            UserEntry {
                login: "adam".to_string(),
            },
        ]);

        let record = PullRequestRecord::from(entry);

        assert_eq!(
            record.labels,
            Some(vec!["release".to_string(), "dependencies".to_string()])
        );
        assert_eq!(
            record.assignees,
            Some(vec!["zoe".to_string(), "adam".to_string()])
        );
    }

    #[test]
    fn empty_collections_are_absent() {
        let mut entry = entry();
        entry.labels = Some(Vec::new());
        entry.assignees = Some(Vec::new());

        let record = PullRequestRecord::from(entry);

        assert!(record.labels.is_none());
        assert!(record.assignees.is_none());
    }
}
