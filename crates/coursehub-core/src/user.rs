// ABOUTME: User shapes as the hosted identity provider returns them.
// ABOUTME: Users are not persisted locally; updates are forwarded to the provider.

use serde::{Deserialize, Serialize};

/// Application-defined metadata attached to a provider user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    /// Role within the marketplace, e.g. "student" or "teacher".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    /// Free-form per-user settings blob owned by the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
}

/// A user record as returned by the identity provider's backend API.
/// Passed through to clients unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub public_metadata: UserMetadata,
}

/// Partial update forwarded to the identity provider. Only set fields are
/// serialized so unset fields are left untouched on the provider side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_metadata: Option<UserMetadata>,
}
