//! Repository source (file) resource client.

use std::sync::Arc;

use reqwest::header::LOCATION;
use reqwest::multipart::Form;

use crate::error::Error;
use crate::transport::HttpTransport;

/// Sentinel returned when a commit response carries no parsable `Location`
/// header.
pub const UNKNOWN_COMMIT: &str = "<unknown>";

/// Client for reading and writing repository files.
#[derive(Debug)]
pub struct SourceClient {
    transport: Arc<HttpTransport>,
}

impl SourceClient {
    /// Create a new source client.
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch a file as raw text at a commit or ref.
    ///
    /// The path is resolved against the repository root, normalizing `..`,
    /// `.`, and redundant separators. A 404 means the file is absent and
    /// yields `None`; any other failure propagates.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or any non-404 error response.
    pub async fn get_file(
        &self,
        workspace: &str,
        repo_slug: &str,
        commit_or_ref: &str,
        path: &str,
    ) -> Result<Option<String>, Error> {
        let file_path = encode_path(&normalize_path(path));
        let url_path =
            format!("/repositories/{workspace}/{repo_slug}/src/{commit_or_ref}/{file_path}");

        match self.transport.get_text(&url_path).await {
            Ok(text) => Ok(Some(text)),
            Err(Error::Api(ref api)) if api.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Commit a file, creating or overwriting it on the target branch.
    ///
    /// Returns the full hash of the resulting commit, extracted from the
    /// response's `Location` header; [`UNKNOWN_COMMIT`] when the header is
    /// absent or unparsable.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn commit_file(
        &self,
        workspace: &str,
        repo_slug: &str,
        path: &str,
        content: &str,
        message: Option<&str>,
        author: Option<&str>,
        branch: Option<&str>,
    ) -> Result<String, Error> {
        let form = commit_fields(
            Form::new().text(normalize_path(path), content.to_string()),
            message,
            author,
            branch,
        );
        self.submit_commit(workspace, repo_slug, form).await
    }

    /// Remove a file with a commit on the target branch.
    ///
    /// Same hash extraction as [`commit_file`](Self::commit_file).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete_file(
        &self,
        workspace: &str,
        repo_slug: &str,
        path: &str,
        message: Option<&str>,
        author: Option<&str>,
        branch: Option<&str>,
    ) -> Result<String, Error> {
        let form = commit_fields(
            Form::new().text("files", normalize_path(path)),
            message,
            author,
            branch,
        );
        self.submit_commit(workspace, repo_slug, form).await
    }

    async fn submit_commit(
        &self,
        workspace: &str,
        repo_slug: &str,
        form: Form,
    ) -> Result<String, Error> {
        let response = self
            .transport
            .post_form(&format!("/repositories/{workspace}/{repo_slug}/src"), form)
            .await?;

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok());
        Ok(commit_hash_from_location(location))
    }
}

/// Resolve a path against the repository root: drop empty and `.` segments,
/// let `..` consume the preceding segment.
fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }
    segments.join("/")
}

/// Percent-encode each path segment, preserving the separators.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Pull the commit hash out of a `Location` header of the form
/// `…/commit/{hash}`.
fn commit_hash_from_location(location: Option<&str>) -> String {
    location
        .and_then(|value| value.rsplit_once("/commit/"))
        .map(|(_, hash)| hash.trim_end_matches('/'))
        .filter(|hash| !hash.is_empty())
        .map_or_else(|| UNKNOWN_COMMIT.to_string(), str::to_string)
}

fn commit_fields(
    mut form: Form,
    message: Option<&str>,
    author: Option<&str>,
    branch: Option<&str>,
) -> Form {
    if let Some(message) = message {
        form = form.text("message", message.to_string());
    }
    if let Some(author) = author {
        form = form.text("author", author.to_string());
    }
    if let Some(branch) = branch {
        form = form.text("branch", branch.to_string());
    }
    form
}
