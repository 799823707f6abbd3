//! Bitbucket SDK for Rust
//!
//! Typed async client for the Bitbucket Cloud 2.0 REST API. Every method is
//! a stateless mapping from call to HTTP request to typed response;
//! list-returning endpoints transparently drain all pages.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bitbucket::BitbucketClient;
//!
//! let client = BitbucketClient::new("erin", "app-password", None, None)?;
//!
//! // Typed lookups
//! let me = client.users().current_user().await?;
//! let repos = client.repos().list_by_project("acme", "PROJ").await?;
//!
//! // Composite conveniences
//! client.variables().set("acme", "widget", "DEPLOY_ENV", "staging", false).await?;
//! let pr = client
//!     .pulls()
//!     .create("acme", "widget", "Add pagination", "feature/pagination", None)
//!     .await?;
//! ```

pub mod client;
pub mod clients;
pub mod error;
pub mod pagination;
pub mod testing;
pub mod transport;
pub mod types;

// Re-exports
pub use client::{BitbucketClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use clients::source::UNKNOWN_COMMIT;
pub use clients::{
    PipelinesClient, PullsClient, ReposClient, ReviewersClient, SourceClient, UsersClient,
    VariablesClient, WorkspacesClient,
};
pub use error::{ApiError, Error};
pub use pagination::Paginated;
pub use transport::HttpTransport;
pub use types::{
    Account, Branch, CodeSearchResult, CommitStatus, DefaultReviewer, Pipeline, PipelineVariable,
    Project, PullRequest, Repository, Workspace,
};
