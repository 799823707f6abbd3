//! Pull request and reviewer data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::repos::Branch;
use super::users::Account;

/// Source or destination endpoint of a pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestEndpoint {
    /// Branch the endpoint points at
    pub branch: Branch,
}

/// A pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// Numeric ID, unique within the repository
    pub id: u64,
    /// Title
    pub title: String,
    /// State: "OPEN", "MERGED", "DECLINED", "SUPERSEDED"
    #[serde(default)]
    pub state: Option<String>,
    /// Source endpoint
    pub source: PullRequestEndpoint,
    /// Destination endpoint
    #[serde(default)]
    pub destination: Option<PullRequestEndpoint>,
    /// Requested reviewers
    #[serde(default)]
    pub reviewers: Vec<Account>,
    /// Whether the source branch is closed after merge
    #[serde(default)]
    pub close_source_branch: bool,
    /// Author
    #[serde(default)]
    pub author: Option<Account>,
    /// When the pull request was created
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
}

/// A reviewer on the effective default-reviewer list, tagged with whether it
/// is inherited from the project or configured on the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultReviewer {
    /// "project" or "repository"
    pub reviewer_type: String,
    /// The reviewer
    pub user: Account,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_request_deserializes() {
        let json = r#"{
            "id": 7,
            "title": "Add pagination",
            "state": "OPEN",
            "source": {"branch": {"name": "feature/pagination"}},
            "destination": {"branch": {"name": "main"}},
            "reviewers": [{"uuid": "{u-1}", "display_name": "Alex"}],
            "close_source_branch": true,
            "created_on": "2024-02-20T14:00:00.000000+00:00"
        }"#;

        let pr: PullRequest = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(pr.id, 7);
        assert_eq!(pr.source.branch.name, "feature/pagination");
        assert_eq!(pr.reviewers.len(), 1);
        assert!(pr.close_source_branch);
    }

    #[test]
    fn default_reviewer_tags_both_origins() {
        for reviewer_type in ["project", "repository"] {
            let json = format!(
                r#"{{
                    "reviewer_type": "{reviewer_type}",
                    "user": {{"uuid": "{{u-1}}", "display_name": "Alex"}}
                }}"#
            );

            let reviewer: DefaultReviewer =
                serde_json::from_str(&json).expect("should deserialize");
            assert_eq!(reviewer.reviewer_type, reviewer_type);
            assert_eq!(reviewer.user.display_name, "Alex");
        }
    }
}
