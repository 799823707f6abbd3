//! Default-reviewer resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{Account, DefaultReviewer};

/// Client for default-reviewer management.
#[derive(Debug)]
pub struct ReviewersClient {
    transport: Arc<HttpTransport>,
}

impl ReviewersClient {
    /// Create a new reviewers client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List the reviewers configured on the repository itself.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    pub async fn list(&self, workspace: &str, repo_slug: &str) -> Result<Vec<Account>, Error> {
        self.transport
            .get_all_pages(
                &format!("/repositories/{workspace}/{repo_slug}/default-reviewers"),
                &[],
            )
            .await
    }

    /// Add a user to the repository's default reviewers.
    ///
    /// The remote API treats this as idempotent: adding a user who is
    /// already a default reviewer is a no-op. That guarantee is not
    /// re-verified locally.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn add(
        &self,
        workspace: &str,
        repo_slug: &str,
        target_username: &str,
    ) -> Result<Account, Error> {
        let path = format!(
            "/repositories/{workspace}/{repo_slug}/default-reviewers/{}",
            urlencoding::encode(target_username)
        );
        self.transport.put(&path, None).await
    }

    /// Remove a user from the repository's default reviewers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn remove(
        &self,
        workspace: &str,
        repo_slug: &str,
        target_username: &str,
    ) -> Result<(), Error> {
        let path = format!(
            "/repositories/{workspace}/{repo_slug}/default-reviewers/{}",
            urlencoding::encode(target_username)
        );
        self.transport.delete(&path).await
    }

    /// List the effective default reviewers: project-level and repo-level
    /// entries merged into one list, each tagged with its `reviewer_type`.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    pub async fn effective(
        &self,
        workspace: &str,
        repo_slug: &str,
    ) -> Result<Vec<DefaultReviewer>, Error> {
        self.transport
            .get_all_pages(
                &format!("/repositories/{workspace}/{repo_slug}/effective-default-reviewers"),
                &[],
            )
            .await
    }
}
