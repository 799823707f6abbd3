//! Data model types for the Bitbucket SDK.
//!
//! Purely descriptive response shapes; no behavior. Bitbucket's JSON uses
//! snake_case field names, so no renaming attributes are needed.

pub mod pipelines;
pub mod pulls;
pub mod repos;
pub mod search;
pub mod users;

// Re-exports
pub use pipelines::{
    CommitStatus, Pipeline, PipelineState, PipelineStateResult, PipelineTarget, PipelineTrigger,
    PipelineVariable,
};
pub use pulls::{DefaultReviewer, PullRequest, PullRequestEndpoint};
pub use repos::{Branch, Project, Repository};
pub use search::{CodeSearchFile, CodeSearchResult, SearchCommit};
pub use users::{Account, AccountLinks, Link, Workspace, WorkspaceMembership};
