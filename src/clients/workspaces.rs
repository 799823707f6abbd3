//! Workspace resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{CodeSearchResult, Project, Workspace};

/// Field expansion requested on every code-search match so each result
/// carries the repository it was found in.
const SEARCH_FIELDS: &str = "+values.file.commit.repository";

/// Client for workspace-level operations.
#[derive(Debug)]
pub struct WorkspacesClient {
    transport: Arc<HttpTransport>,
}

impl WorkspacesClient {
    /// Create a new workspaces client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Get a workspace by slug or UUID.
    ///
    /// # Errors
    ///
    /// Returns an error if the workspace is not found.
    pub async fn get(&self, workspace: &str) -> Result<Workspace, Error> {
        self.transport
            .get(&format!("/workspaces/{workspace}"), None)
            .await
    }

    /// Get a project within a workspace.
    ///
    /// # Errors
    ///
    /// Returns an error if the project is not found.
    pub async fn get_project(&self, workspace: &str, project_key: &str) -> Result<Project, Error> {
        self.transport
            .get(
                &format!("/workspaces/{workspace}/projects/{project_key}"),
                None,
            )
            .await
    }

    /// Search code across a workspace, draining all result pages.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    pub async fn search_code(
        &self,
        workspace: &str,
        query: &str,
    ) -> Result<Vec<CodeSearchResult>, Error> {
        let params = [
            ("search_query", query.to_string()),
            ("fields", SEARCH_FIELDS.to_string()),
        ];
        self.transport
            .get_all_pages(&format!("/workspaces/{workspace}/search/code"), &params)
            .await
    }
}
