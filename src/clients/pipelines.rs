//! Pipeline resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{CommitStatus, Pipeline};

/// Client for pipeline runs and commit statuses.
#[derive(Debug)]
pub struct PipelinesClient {
    transport: Arc<HttpTransport>,
}

impl PipelinesClient {
    /// Create a new pipelines client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List a repository's pipeline runs, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    pub async fn list(&self, workspace: &str, repo_slug: &str) -> Result<Vec<Pipeline>, Error> {
        let params = [("sort", "-created_on".to_string())];
        self.transport
            .get_all_pages(
                &format!("/repositories/{workspace}/{repo_slug}/pipelines/"),
                &params,
            )
            .await
    }

    /// Get a single pipeline run by UUID.
    ///
    /// # Errors
    ///
    /// Returns an error if the pipeline is not found.
    pub async fn get(
        &self,
        workspace: &str,
        repo_slug: &str,
        pipeline_uuid: &str,
    ) -> Result<Pipeline, Error> {
        let path = format!(
            "/repositories/{workspace}/{repo_slug}/pipelines/{}",
            urlencoding::encode(pipeline_uuid)
        );
        self.transport.get(&path, None).await
    }

    /// List the statuses attached to a commit.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    pub async fn commit_statuses(
        &self,
        workspace: &str,
        repo_slug: &str,
        commit: &str,
    ) -> Result<Vec<CommitStatus>, Error> {
        self.transport
            .get_all_pages(
                &format!("/repositories/{workspace}/{repo_slug}/commit/{commit}/statuses"),
                &[],
            )
            .await
    }
}
