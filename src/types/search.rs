//! Code search data models.

use serde::{Deserialize, Serialize};

use super::repos::Repository;

/// Commit a matched file lives at, expanded with its owning repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCommit {
    /// Full commit hash
    pub hash: String,
    /// Repository the commit belongs to, present via field expansion
    #[serde(default)]
    pub repository: Option<Repository>,
}

/// File that matched a code search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSearchFile {
    /// Path within the repository
    pub path: String,
    /// Commit the match was found at
    #[serde(default)]
    pub commit: Option<SearchCommit>,
}

/// One code-search match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSearchResult {
    /// Number of content matches within the file
    #[serde(default)]
    pub content_match_count: u64,
    /// The matched file
    pub file: CodeSearchFile,
}
