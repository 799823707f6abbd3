//! Resource clients for the Bitbucket SDK.

pub mod pipelines;
pub mod pulls;
pub mod repos;
pub mod reviewers;
pub mod source;
pub mod users;
pub mod variables;
pub mod workspaces;

// Re-exports
pub use pipelines::PipelinesClient;
pub use pulls::PullsClient;
pub use repos::ReposClient;
pub use reviewers::ReviewersClient;
pub use source::SourceClient;
pub use users::UsersClient;
pub use variables::VariablesClient;
pub use workspaces::WorkspacesClient;
