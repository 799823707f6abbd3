//! Mock Bitbucket client for testing.
//!
//! Provides a `MockBitbucketClient` that records calls and models the
//! remote contracts the real API guarantees (idempotent default-reviewer
//! add, keyed variable set/delete) without any network traffic.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::types::{Account, DefaultReviewer, PipelineVariable};

/// Record of a method call.
#[derive(Debug, Clone)]
pub struct MockCall {
    /// Method name (e.g., "reviewers.add", "variables.set")
    pub method: String,
    /// Arguments passed to the method
    pub args: Vec<String>,
    /// Timestamp of the call
    pub timestamp: DateTime<Utc>,
}

impl MockCall {
    /// Create a new mock call record.
    pub fn new(method: &str, args: Vec<String>) -> Self {
        Self {
            method: method.to_string(),
            args,
            timestamp: Utc::now(),
        }
    }
}

/// Internal state shared by the sub-mocks.
struct MockClientState {
    username: String,
    calls: Vec<MockCall>,
}

impl MockClientState {
    fn new(username: String) -> Self {
        Self {
            username,
            calls: Vec::new(),
        }
    }

    fn record_call(&mut self, method: &str, args: Vec<String>) {
        self.calls.push(MockCall::new(method, args));
    }
}

fn account_for(username: &str) -> Account {
    Account {
        uuid: format!("{{{username}}}"),
        display_name: username.to_string(),
        nickname: Some(username.to_string()),
        account_id: None,
        links: None,
    }
}

/// Mock reviewers client modeling server-side idempotency.
pub struct MockReviewersClient {
    mock: Arc<Mutex<MockClientState>>,
    project_reviewers: Arc<Mutex<Vec<Account>>>,
    repo_reviewers: Arc<Mutex<Vec<Account>>>,
}

impl MockReviewersClient {
    fn new(mock: Arc<Mutex<MockClientState>>) -> Self {
        Self {
            mock,
            project_reviewers: Arc::new(Mutex::new(Vec::new())),
            repo_reviewers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Seed the project-level (inherited) reviewers.
    pub fn seed_project_reviewers(&self, reviewers: Vec<Account>) {
        *self
            .project_reviewers
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = reviewers;
    }

    /// Mock add method. Adding an already-present reviewer is a no-op, as
    /// the remote API guarantees.
    pub fn add(&self, workspace: &str, repo_slug: &str, target_username: &str) -> Account {
        self.mock
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record_call(
                "reviewers.add",
                vec![
                    workspace.to_string(),
                    repo_slug.to_string(),
                    target_username.to_string(),
                ],
            );

        let account = account_for(target_username);
        let mut reviewers = self
            .repo_reviewers
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        if !reviewers.iter().any(|r| r.uuid == account.uuid) {
            reviewers.push(account.clone());
        }
        account
    }

    /// Mock remove method. Removing an absent reviewer is a no-op.
    pub fn remove(&self, workspace: &str, repo_slug: &str, target_username: &str) {
        self.mock
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record_call(
                "reviewers.remove",
                vec![
                    workspace.to_string(),
                    repo_slug.to_string(),
                    target_username.to_string(),
                ],
            );

        let uuid = format!("{{{target_username}}}");
        self.repo_reviewers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .retain(|r| r.uuid != uuid);
    }

    /// Mock list of repo-level reviewers.
    pub fn list(&self, workspace: &str, repo_slug: &str) -> Vec<Account> {
        self.mock
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record_call(
                "reviewers.list",
                vec![workspace.to_string(), repo_slug.to_string()],
            );

        self.repo_reviewers
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Mock effective list: project-level entries first, then repo-level,
    /// each tagged with its origin.
    pub fn effective(&self, workspace: &str, repo_slug: &str) -> Vec<DefaultReviewer> {
        self.mock
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record_call(
                "reviewers.effective",
                vec![workspace.to_string(), repo_slug.to_string()],
            );

        let project = self
            .project_reviewers
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let repo = self
            .repo_reviewers
            .lock()
            .unwrap_or_else(|e| e.into_inner());

        project
            .iter()
            .map(|user| DefaultReviewer {
                reviewer_type: "project".to_string(),
                user: user.clone(),
            })
            .chain(repo.iter().map(|user| DefaultReviewer {
                reviewer_type: "repository".to_string(),
                user: user.clone(),
            }))
            .collect()
    }
}

/// Mock variables client modeling the keyed set/delete contract.
pub struct MockVariablesClient {
    mock: Arc<Mutex<MockClientState>>,
    variables: Arc<Mutex<Vec<PipelineVariable>>>,
    next_uuid: Arc<Mutex<u32>>,
}

impl MockVariablesClient {
    fn new(mock: Arc<Mutex<MockClientState>>) -> Self {
        Self {
            mock,
            variables: Arc::new(Mutex::new(Vec::new())),
            next_uuid: Arc::new(Mutex::new(1)),
        }
    }

    /// Mock list method.
    pub fn list(&self, workspace: &str, repo_slug: &str) -> Vec<PipelineVariable> {
        self.mock
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record_call(
                "variables.list",
                vec![workspace.to_string(), repo_slug.to_string()],
            );

        self.variables
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Mock set method: updates in place when the key exists, creates
    /// otherwise. Records the underlying write as `variables.update` or
    /// `variables.create` so tests can assert one-write semantics.
    pub fn set(
        &self,
        workspace: &str,
        repo_slug: &str,
        key: &str,
        value: &str,
        secured: bool,
    ) -> PipelineVariable {
        self.mock
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record_call(
                "variables.set",
                vec![
                    workspace.to_string(),
                    repo_slug.to_string(),
                    key.to_string(),
                ],
            );

        let mut variables = self.variables.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(variable) = variables.iter_mut().find(|v| v.key == key) {
            variable.value = Some(value.to_string());
            variable.secured = secured;
            let updated = variable.clone();
            self.mock
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .record_call("variables.update", vec![key.to_string()]);
            return updated;
        }

        let mut next = self.next_uuid.lock().unwrap_or_else(|e| e.into_inner());
        let variable = PipelineVariable {
            uuid: Some(format!("{{mock-var-{}}}", *next)),
            key: key.to_string(),
            value: Some(value.to_string()),
            secured,
        };
        *next += 1;
        variables.push(variable.clone());
        self.mock
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record_call("variables.create", vec![key.to_string()]);
        variable
    }

    /// Mock delete method: a missing key returns `None` without recording a
    /// `variables.delete_by_uuid` write.
    pub fn delete(
        &self,
        workspace: &str,
        repo_slug: &str,
        key: &str,
    ) -> Option<PipelineVariable> {
        self.mock
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record_call(
                "variables.delete",
                vec![
                    workspace.to_string(),
                    repo_slug.to_string(),
                    key.to_string(),
                ],
            );

        let mut variables = self.variables.lock().unwrap_or_else(|e| e.into_inner());
        let index = variables.iter().position(|v| v.key == key)?;
        let removed = variables.remove(index);
        self.mock
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .record_call("variables.delete_by_uuid", vec![key.to_string()]);
        Some(removed)
    }
}

/// Mock Bitbucket client for testing.
///
/// Mirrors the composite-operation contracts of `BitbucketClient` with
/// in-memory state and a call log instead of network traffic.
///
/// # Example
///
/// ```rust
/// use bitbucket::testing::MockBitbucketClient;
///
/// let mock = MockBitbucketClient::new("erin");
///
/// mock.reviewers().add("acme", "widget", "alex");
/// mock.reviewers().add("acme", "widget", "alex");
///
/// let effective = mock.reviewers().effective("acme", "widget");
/// assert_eq!(effective.len(), 1);
/// assert_eq!(mock.call_count("reviewers.add"), 2);
/// ```
pub struct MockBitbucketClient {
    state: Arc<Mutex<MockClientState>>,
    reviewers: MockReviewersClient,
    variables: MockVariablesClient,
}

impl MockBitbucketClient {
    /// Create a new mock client.
    pub fn new(username: &str) -> Self {
        let state = Arc::new(Mutex::new(MockClientState::new(username.to_string())));

        Self {
            reviewers: MockReviewersClient::new(Arc::clone(&state)),
            variables: MockVariablesClient::new(Arc::clone(&state)),
            state,
        }
    }

    /// Get the configured username.
    #[must_use]
    pub fn username(&self) -> String {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .username
            .clone()
    }

    /// Get the reviewers mock.
    #[must_use]
    pub fn reviewers(&self) -> &MockReviewersClient {
        &self.reviewers
    }

    /// Get the variables mock.
    #[must_use]
    pub fn variables(&self) -> &MockVariablesClient {
        &self.variables
    }

    /// Check if a method was called.
    #[must_use]
    pub fn was_called(&self, method: &str) -> bool {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .any(|call| call.method == method)
    }

    /// Get the number of times a method was called.
    #[must_use]
    pub fn call_count(&self, method: &str) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .iter()
            .filter(|call| call.method == method)
            .count()
    }

    /// Get recorded calls, optionally filtered by method.
    #[must_use]
    pub fn get_calls(&self, method: Option<&str>) -> Vec<MockCall> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match method {
            Some(m) => state
                .calls
                .iter()
                .filter(|call| call.method == m)
                .cloned()
                .collect(),
            None => state.calls.clone(),
        }
    }

    /// Reset all recorded calls.
    pub fn reset(&self) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clear();
    }
}
