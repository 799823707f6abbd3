//! Bitbucket SDK main client.
//!
//! Provides the primary interface for interacting with the Bitbucket Cloud
//! 2.0 API.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::{
    PipelinesClient, PullsClient, ReposClient, ReviewersClient, SourceClient, UsersClient,
    VariablesClient, WorkspacesClient,
};
use crate::error::Error;
use crate::transport::HttpTransport;

/// Default base URL for the Bitbucket Cloud API.
pub const DEFAULT_BASE_URL: &str = "https://api.bitbucket.org/2.0";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main client for interacting with the Bitbucket Cloud API.
///
/// Aggregates all resource clients over one shared transport holding the
/// Basic-auth credentials.
///
/// # Example
///
/// ```rust,ignore
/// use bitbucket::BitbucketClient;
///
/// let client = BitbucketClient::new("erin", "app-password", None, None)?;
/// let me = client.users().current_user().await?;
/// let repos = client.repos().list_by_project("acme", "PROJ").await?;
///
/// // Or create from environment variables
/// let client = BitbucketClient::from_env()?;
/// ```
#[derive(Debug)]
pub struct BitbucketClient {
    transport: Arc<HttpTransport>,
    users: UsersClient,
    workspaces: WorkspacesClient,
    repos: ReposClient,
    reviewers: ReviewersClient,
    pipelines: PipelinesClient,
    variables: VariablesClient,
    pulls: PullsClient,
    source: SourceClient,
}

impl BitbucketClient {
    /// Create a new Bitbucket client.
    ///
    /// # Arguments
    ///
    /// * `username` - Bitbucket username
    /// * `app_password` - App password or equivalent token
    /// * `base_url` - Base URL for API requests (default: <https://api.bitbucket.org/2.0>)
    /// * `timeout` - Request timeout (default: 30 seconds)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(
        username: &str,
        app_password: &str,
        base_url: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Self, Error> {
        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let transport = Arc::new(HttpTransport::new(base_url, username, app_password, timeout)?);

        Ok(Self {
            users: UsersClient::new(Arc::clone(&transport)),
            workspaces: WorkspacesClient::new(Arc::clone(&transport)),
            repos: ReposClient::new(Arc::clone(&transport)),
            reviewers: ReviewersClient::new(Arc::clone(&transport)),
            pipelines: PipelinesClient::new(Arc::clone(&transport)),
            variables: VariablesClient::new(Arc::clone(&transport)),
            pulls: PullsClient::new(Arc::clone(&transport)),
            source: SourceClient::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `BITBUCKET_USERNAME` - Bitbucket username (required)
    /// * `BITBUCKET_APP_PASSWORD` - App password (required)
    /// * `BITBUCKET_BASE_URL` - Base URL for the API (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_env_with_config(None)
    }

    /// Create a client from environment variables with a custom timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if required environment variables are missing.
    pub fn from_env_with_config(timeout: Option<Duration>) -> Result<Self, Error> {
        let username = env::var("BITBUCKET_USERNAME").map_err(|_| {
            Error::Configuration("BITBUCKET_USERNAME environment variable not set".to_string())
        })?;

        let app_password = env::var("BITBUCKET_APP_PASSWORD").map_err(|_| {
            Error::Configuration("BITBUCKET_APP_PASSWORD environment variable not set".to_string())
        })?;

        let base_url = env::var("BITBUCKET_BASE_URL").ok();

        Self::new(&username, &app_password, base_url.as_deref(), timeout)
    }

    /// Get the underlying HTTP transport (for advanced use cases).
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Get the users client.
    #[must_use]
    pub fn users(&self) -> &UsersClient {
        &self.users
    }

    /// Get the workspaces client.
    #[must_use]
    pub fn workspaces(&self) -> &WorkspacesClient {
        &self.workspaces
    }

    /// Get the repos client.
    #[must_use]
    pub fn repos(&self) -> &ReposClient {
        &self.repos
    }

    /// Get the default-reviewers client.
    #[must_use]
    pub fn reviewers(&self) -> &ReviewersClient {
        &self.reviewers
    }

    /// Get the pipelines client.
    #[must_use]
    pub fn pipelines(&self) -> &PipelinesClient {
        &self.pipelines
    }

    /// Get the pipeline-variables client.
    #[must_use]
    pub fn variables(&self) -> &VariablesClient {
        &self.variables
    }

    /// Get the pulls client.
    #[must_use]
    pub fn pulls(&self) -> &PullsClient {
        &self.pulls
    }

    /// Get the source client.
    #[must_use]
    pub fn source(&self) -> &SourceClient {
        &self.source
    }
}
