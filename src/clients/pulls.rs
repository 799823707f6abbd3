//! Pull-request resource client.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{Account, DefaultReviewer, PullRequest};

/// Client for pull-request creation.
#[derive(Debug)]
pub struct PullsClient {
    transport: Arc<HttpTransport>,
}

impl PullsClient {
    /// Create a new pulls client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create a pull request from `source_branch`.
    ///
    /// The reviewer list is seeded from the repository's effective default
    /// reviewers, minus the authenticated user: the API rejects a pull
    /// request whose author is also a reviewer. When `destination_branch`
    /// is omitted the server targets the repository's default branch. The
    /// source branch is always requested to be closed after merge.
    ///
    /// Three sequential round-trips (current user, effective reviewers,
    /// creation) with no rollback: a failure leaves no pull request but the
    /// earlier reads have already happened.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the three requests fails.
    pub async fn create(
        &self,
        workspace: &str,
        repo_slug: &str,
        title: &str,
        source_branch: &str,
        destination_branch: Option<&str>,
    ) -> Result<PullRequest, Error> {
        let current: Account = self.transport.get("/user", None).await?;

        let reviewers: Vec<DefaultReviewer> = self
            .transport
            .get_all_pages(
                &format!("/repositories/{workspace}/{repo_slug}/effective-default-reviewers"),
                &[],
            )
            .await?;

        let reviewer_refs: Vec<Value> = reviewers
            .iter()
            .filter(|reviewer| reviewer.user.uuid != current.uuid)
            .map(|reviewer| json!({"uuid": reviewer.user.uuid}))
            .collect();

        let mut body = json!({
            "title": title,
            "source": {"branch": {"name": source_branch}},
            "reviewers": reviewer_refs,
            "close_source_branch": true,
        });
        if let Some(destination) = destination_branch {
            body["destination"] = json!({"branch": {"name": destination}});
        }

        self.transport
            .post(
                &format!("/repositories/{workspace}/{repo_slug}/pullrequests"),
                &body,
            )
            .await
    }
}
