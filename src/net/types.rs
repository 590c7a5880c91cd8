//! Data types exchanged with the dashboard server.

use serde::{Deserialize, Serialize};

/// Authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// The user behind a pending join request.
///
/// `name` and `image` are optional on the wire; display code resolves
/// them through the avatar/initials fallbacks instead of assuming them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestUser {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// A pending request to join an organization. Immutable snapshot; the
/// whole list is replaced on refresh, never patched in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgJoinRequest {
    pub id: String,
    pub user: RequestUser,
}

/// An organization the current user belongs to. Exactly one owner, but
/// an org may be shared with non-owners.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// The session's current org plus every org the user belongs to,
/// from `/api/orgs`. The current org is server session state; this
/// client only reads it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationsPayload {
    pub current_org: Organization,
    pub user_orgs: Vec<Organization>,
}

/// Structured failure body returned by the accept/decline actions.
/// `message` may be absent; callers fall back to a fixed per-action text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionError {
    #[serde(default)]
    pub message: Option<String>,
}
