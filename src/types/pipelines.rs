//! Pipeline, variable, and commit-status data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a finished pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineStateResult {
    /// Result name, e.g. "SUCCESSFUL" or "FAILED"
    pub name: String,
}

/// Current state of a pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineState {
    /// State name, e.g. "PENDING", "IN_PROGRESS", "COMPLETED"
    pub name: String,
    /// Final result, present once completed
    #[serde(default)]
    pub result: Option<PipelineStateResult>,
}

/// What started a pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineTrigger {
    /// Trigger name, e.g. "PUSH" or "MANUAL"
    pub name: String,
}

/// What a pipeline ran against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineTarget {
    /// Reference type, e.g. "branch"
    #[serde(default)]
    pub ref_type: Option<String>,
    /// Reference name, e.g. "main"
    #[serde(default)]
    pub ref_name: Option<String>,
    /// Commit the run targeted
    #[serde(default)]
    pub commit: Option<TargetCommit>,
}

/// Commit reference inside a pipeline target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetCommit {
    /// Full commit hash
    pub hash: String,
}

/// A CI run associated with a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipeline {
    /// Brace-wrapped UUID
    pub uuid: String,
    /// Monotonic build number
    pub build_number: u64,
    /// Current state
    #[serde(default)]
    pub state: Option<PipelineState>,
    /// What started the run
    #[serde(default)]
    pub trigger: Option<PipelineTrigger>,
    /// What the run targeted
    #[serde(default)]
    pub target: Option<PipelineTarget>,
    /// Variables the run was started with
    #[serde(default)]
    pub variables: Option<Vec<PipelineVariable>>,
    /// When the run was created
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
}

/// Key/value pair scoped to a repository's pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineVariable {
    /// Brace-wrapped UUID; absent on values the caller constructs
    #[serde(default)]
    pub uuid: Option<String>,
    /// Variable name
    pub key: String,
    /// Variable value; the API omits it for secured variables
    #[serde(default)]
    pub value: Option<String>,
    /// Whether the value is masked in logs and responses
    #[serde(default)]
    pub secured: bool,
}

/// A named status attached to a commit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitStatus {
    /// Unique key of the status within the commit
    #[serde(default)]
    pub key: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// State: "SUCCESSFUL", "FAILED", "INPROGRESS", "STOPPED"
    pub state: String,
    /// Link to the build that produced the status
    #[serde(default)]
    pub url: Option<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// When the status was created
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_deserializes_with_state_and_target() {
        let json = r#"{
            "uuid": "{p-1}",
            "build_number": 42,
            "state": {"name": "COMPLETED", "result": {"name": "SUCCESSFUL"}},
            "trigger": {"name": "PUSH"},
            "target": {"ref_type": "branch", "ref_name": "main", "commit": {"hash": "abc123"}},
            "created_on": "2024-03-01T09:15:00.000000+00:00"
        }"#;

        let pipeline: Pipeline = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(pipeline.build_number, 42);
        assert_eq!(pipeline.state.unwrap().result.unwrap().name, "SUCCESSFUL");
        assert_eq!(pipeline.target.unwrap().ref_name.as_deref(), Some("main"));
    }

    #[test]
    fn secured_variable_omits_value() {
        let json = r#"{"uuid": "{v-1}", "key": "DEPLOY_TOKEN", "secured": true}"#;
        let variable: PipelineVariable = serde_json::from_str(json).expect("should deserialize");
        assert!(variable.secured);
        assert!(variable.value.is_none());
    }

    #[test]
    fn commit_status_deserializes() {
        let json = r#"{
            "key": "build",
            "state": "FAILED",
            "url": "https://ci.example.com/builds/7",
            "description": "unit tests failed"
        }"#;

        let status: CommitStatus = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(status.state, "FAILED");
        assert_eq!(status.key.as_deref(), Some("build"));
    }
}
