//! Wire model for the "list pull requests" response.

use serde::Deserialize;

/// A pull request as returned by `GET /repos/{owner}/{repo}/pulls`.
///
/// Only the fields the resolver reads are modelled; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEntry {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub head: BranchRef,
    pub base: BranchRef,
    pub merge_commit_sha: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<LabelEntry>>,
    #[serde(default)]
    pub assignees: Option<Vec<UserEntry>>,
}

/// One side (head or base) of a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub ref_field: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelEntry {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserEntry {
    pub login: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_full_entry() {
        let entry: PullRequestEntry = serde_json::from_value(json!({
            "url": "https://api.github.com/repos/octo-org/hello-world/pulls/7",
            "number": 7,
            "state": "closed",
            "title": "Add greeting",
            "body": "Says hello.",
            "head": { "ref": "feature/greeting", "sha": "f00" },
            "base": { "ref": "main", "sha": "ba5e" },
            "merge_commit_sha": "abc123",
            "labels": [{ "id": 1, "name": "enhancement", "color": "a2eeef" }],
            "assignees": [{ "login": "octocat", "id": 1 }]
        }))
        .unwrap();

        assert_eq!(entry.number, 7);
        assert_eq!(entry.head.ref_field, "feature/greeting");
        assert_eq!(entry.base.ref_field, "main");
        assert_eq!(entry.merge_commit_sha.as_deref(), Some("abc123"));
        assert_eq!(entry.labels.unwrap()[0].name, "enhancement");
        assert_eq!(entry.assignees.unwrap()[0].login, "octocat");
    }

    #[test]
    fn deserializes_sparse_entry() {
        let entry: PullRequestEntry = serde_json::from_value(json!({
            "number": 8,
            "title": "Closed without merge",
            "body": null,
            "head": { "ref": "spike" },
            "base": { "ref": "main" },
            "merge_commit_sha": null,
            "labels": null
        }))
        .unwrap();

        assert!(entry.body.is_none());
        assert!(entry.merge_commit_sha.is_none());
        assert!(entry.labels.is_none());
        assert!(entry.assignees.is_none());
    }
}
