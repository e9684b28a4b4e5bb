//! Wire types shared across the API surface.

use serde::{Deserialize, Serialize};

/// Authenticated user identity as returned by the auth service.
///
/// The session contract only depends on `id` and `username`; the rest is
/// carried for display and defaults to empty when a payload omits it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Successful login/register payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthPayload {
    pub access_token: String,
    pub user: User,
}

/// Profile view of the current user, including the palace count.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub memory_palaces_count: i64,
}

/// Fields the profile update endpoint accepts; unset fields are omitted
/// from the request body entirely.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A memory palace summary for the dashboard list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryPalace {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rooms_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}
