//! User and workspace data models.

use serde::{Deserialize, Serialize};

/// A hyperlink inside an API resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    /// Target URL
    pub href: String,
}

/// Links attached to an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountLinks {
    /// Avatar image link
    #[serde(default)]
    pub avatar: Option<Link>,
    /// Profile page link
    #[serde(default)]
    pub html: Option<Link>,
}

/// User identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Brace-wrapped UUID, e.g. `{5ba1…}`
    pub uuid: String,
    /// Display name
    pub display_name: String,
    /// Public nickname
    #[serde(default)]
    pub nickname: Option<String>,
    /// Atlassian account ID
    #[serde(default)]
    pub account_id: Option<String>,
    /// Avatar and profile links
    #[serde(default)]
    pub links: Option<AccountLinks>,
}

/// Named container holding projects and repositories.
///
/// `permission` is not part of the workspace resource itself; the
/// workspace-listing reshape merges the caller's membership permission into
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    /// Brace-wrapped UUID
    pub uuid: String,
    /// URL slug
    pub slug: String,
    /// Display name
    pub name: String,
    /// Whether the workspace is private
    #[serde(default)]
    pub is_private: bool,
    /// Caller's permission on this workspace ("owner", "collaborator", "member")
    #[serde(default)]
    pub permission: Option<String>,
}

/// One entry of the caller's workspace memberships.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceMembership {
    /// Permission the caller holds on the workspace
    pub permission: String,
    /// The workspace itself
    pub workspace: Workspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_deserializes_with_avatar_link() {
        let json = r#"{
            "uuid": "{5ba1e53a-9b1c-4b6a-8f3e-6d2f1a7c9e01}",
            "display_name": "Erin Example",
            "nickname": "erin",
            "account_id": "557058:abc",
            "links": {
                "avatar": {"href": "https://bitbucket.org/account/erin/avatar/"}
            }
        }"#;

        let account: Account = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(account.display_name, "Erin Example");
        assert_eq!(
            account.links.unwrap().avatar.unwrap().href,
            "https://bitbucket.org/account/erin/avatar/"
        );
    }

    #[test]
    fn account_tolerates_minimal_shape() {
        let json = r#"{"uuid": "{u-1}", "display_name": "Minimal"}"#;
        let account: Account = serde_json::from_str(json).expect("should deserialize");
        assert!(account.nickname.is_none());
        assert!(account.links.is_none());
    }

    #[test]
    fn workspace_membership_carries_permission() {
        let json = r#"{
            "permission": "owner",
            "workspace": {
                "uuid": "{w-1}",
                "slug": "acme",
                "name": "Acme Inc",
                "is_private": true
            }
        }"#;

        let membership: WorkspaceMembership =
            serde_json::from_str(json).expect("should deserialize");
        assert_eq!(membership.permission, "owner");
        assert_eq!(membership.workspace.slug, "acme");
        assert!(membership.workspace.permission.is_none());
    }
}
