//! Repository and project data models.

use serde::{Deserialize, Serialize};

use super::users::Account;

/// Branch reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name
    pub name: String,
}

/// Grouping of repositories within a workspace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project key, e.g. "PROJ"
    pub key: String,
    /// Display name
    pub name: String,
    /// Brace-wrapped UUID
    #[serde(default)]
    pub uuid: Option<String>,
    /// Owning account
    #[serde(default)]
    pub owner: Option<Account>,
}

/// A source repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Brace-wrapped UUID
    pub uuid: String,
    /// URL slug
    pub slug: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// "workspace/slug"
    #[serde(default)]
    pub full_name: Option<String>,
    /// Whether the repository is private
    #[serde(default)]
    pub is_private: bool,
    /// Owning account
    #[serde(default)]
    pub owner: Option<Account>,
    /// Fork parent, when this repository is a fork
    #[serde(default)]
    pub parent: Option<Box<Repository>>,
    /// Project this repository belongs to
    #[serde(default)]
    pub project: Option<Project>,
    /// Main branch reference
    #[serde(default)]
    pub mainbranch: Option<Branch>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_deserializes_with_project_and_mainbranch() {
        let json = r#"{
            "uuid": "{r-1}",
            "slug": "widget",
            "name": "widget",
            "full_name": "acme/widget",
            "is_private": true,
            "project": {"key": "PROJ", "name": "Platform"},
            "mainbranch": {"name": "main"}
        }"#;

        let repo: Repository = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(repo.slug, "widget");
        assert_eq!(repo.project.unwrap().key, "PROJ");
        assert_eq!(repo.mainbranch.unwrap().name, "main");
        assert!(repo.parent.is_none());
    }

    #[test]
    fn fork_parent_nests_a_repository() {
        let json = r#"{
            "uuid": "{r-2}",
            "slug": "widget-fork",
            "parent": {"uuid": "{r-1}", "slug": "widget"}
        }"#;

        let repo: Repository = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(repo.parent.unwrap().slug, "widget");
    }
}
