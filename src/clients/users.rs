//! Current-user resource client.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{Account, Workspace, WorkspaceMembership};

/// Client for operations on the authenticated user.
#[derive(Debug)]
pub struct UsersClient {
    transport: Arc<HttpTransport>,
}

impl UsersClient {
    /// Create a new users client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Get the authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn current_user(&self) -> Result<Account, Error> {
        self.transport.get("/user", None).await
    }

    /// List the workspaces the authenticated user is a member of.
    ///
    /// Each membership's `permission` is merged into its workspace, so the
    /// returned workspaces carry `permission: Some(..)`.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    pub async fn list_workspaces(&self) -> Result<Vec<Workspace>, Error> {
        let memberships: Vec<WorkspaceMembership> = self
            .transport
            .get_all_pages("/user/permissions/workspaces", &[])
            .await?;

        Ok(memberships
            .into_iter()
            .map(|membership| {
                let mut workspace = membership.workspace;
                workspace.permission = Some(membership.permission);
                workspace
            })
            .collect())
    }
}
