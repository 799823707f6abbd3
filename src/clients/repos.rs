//! Repository resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::Repository;

/// Client for repository lookup and listing.
#[derive(Debug)]
pub struct ReposClient {
    transport: Arc<HttpTransport>,
}

impl ReposClient {
    /// Create a new repos client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Get a repository by workspace and slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository is not found.
    pub async fn get(&self, workspace: &str, repo_slug: &str) -> Result<Repository, Error> {
        self.transport
            .get(&format!("/repositories/{workspace}/{repo_slug}"), None)
            .await
    }

    /// List every repository in a workspace belonging to a project,
    /// filtered server-side by project key.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    pub async fn list_by_project(
        &self,
        workspace: &str,
        project_key: &str,
    ) -> Result<Vec<Repository>, Error> {
        let params = [("q", format!("project.key=\"{project_key}\""))];
        self.transport
            .get_all_pages(&format!("/repositories/{workspace}"), &params)
            .await
    }
}
