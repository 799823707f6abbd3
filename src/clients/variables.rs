//! Pipeline-variable resource client.
//!
//! The `set` and `delete` conveniences are read-then-write sequences over
//! the CRUD endpoints: list, find by key, then act. There is no atomicity
//! guarantee; concurrent callers targeting the same key may race, producing
//! a duplicate-create conflict (surfaced as a remote error) or a lost
//! update. The API offers no single-request upsert or delete-by-key.

use std::sync::Arc;

use serde_json::json;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::PipelineVariable;

/// Client for repository pipeline variables.
#[derive(Debug)]
pub struct VariablesClient {
    transport: Arc<HttpTransport>,
}

impl VariablesClient {
    /// Create a new variables client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    fn base_path(workspace: &str, repo_slug: &str) -> String {
        format!("/repositories/{workspace}/{repo_slug}/pipelines_config/variables")
    }

    /// List every pipeline variable configured on a repository.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    pub async fn list(
        &self,
        workspace: &str,
        repo_slug: &str,
    ) -> Result<Vec<PipelineVariable>, Error> {
        self.transport
            .get_all_pages(&Self::base_path(workspace, repo_slug), &[])
            .await
    }

    /// Create a new pipeline variable.
    ///
    /// # Errors
    ///
    /// Returns an error if creation fails, e.g. a conflict on a duplicate
    /// key.
    pub async fn create(
        &self,
        workspace: &str,
        repo_slug: &str,
        key: &str,
        value: &str,
        secured: bool,
    ) -> Result<PipelineVariable, Error> {
        let body = json!({"key": key, "value": value, "secured": secured});
        self.transport
            .post(&Self::base_path(workspace, repo_slug), &body)
            .await
    }

    /// Update an existing pipeline variable by UUID.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not found.
    pub async fn update(
        &self,
        workspace: &str,
        repo_slug: &str,
        uuid: &str,
        key: &str,
        value: &str,
        secured: bool,
    ) -> Result<PipelineVariable, Error> {
        let path = format!(
            "{}/{}",
            Self::base_path(workspace, repo_slug),
            urlencoding::encode(uuid)
        );
        let body = json!({"key": key, "value": value, "secured": secured});
        self.transport.put(&path, Some(&body)).await
    }

    /// Delete a pipeline variable by UUID.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not found.
    pub async fn delete_by_uuid(
        &self,
        workspace: &str,
        repo_slug: &str,
        uuid: &str,
    ) -> Result<(), Error> {
        let path = format!(
            "{}/{}",
            Self::base_path(workspace, repo_slug),
            urlencoding::encode(uuid)
        );
        self.transport.delete(&path).await
    }

    /// Set a variable by key: create it if absent, update it in place
    /// otherwise.
    ///
    /// Issues exactly one write: a `POST` when no variable with the key
    /// exists, a `PUT` to the existing variable's UUID otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing or the write fails.
    pub async fn set(
        &self,
        workspace: &str,
        repo_slug: &str,
        key: &str,
        value: &str,
        secured: bool,
    ) -> Result<PipelineVariable, Error> {
        let existing = self
            .list(workspace, repo_slug)
            .await?
            .into_iter()
            .find(|variable| variable.key == key)
            .and_then(|variable| variable.uuid);

        match existing {
            Some(uuid) => {
                self.update(workspace, repo_slug, &uuid, key, value, secured)
                    .await
            }
            None => self.create(workspace, repo_slug, key, value, secured).await,
        }
    }

    /// Delete a variable by key.
    ///
    /// A missing key is success: returns `None` without issuing a `DELETE`.
    /// On success the removed variable is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing or the delete fails.
    pub async fn delete(
        &self,
        workspace: &str,
        repo_slug: &str,
        key: &str,
    ) -> Result<Option<PipelineVariable>, Error> {
        let found = self
            .list(workspace, repo_slug)
            .await?
            .into_iter()
            .find(|variable| variable.key == key);

        let Some(variable) = found else {
            return Ok(None);
        };

        match variable.uuid.clone() {
            Some(uuid) => {
                self.delete_by_uuid(workspace, repo_slug, &uuid).await?;
                Ok(Some(variable))
            }
            None => Ok(None),
        }
    }
}
