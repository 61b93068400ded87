//! Authentication payloads and user references.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`: `{"data": {"token", "message", "role"?}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoginData {
    #[serde(deserialize_with = "null_as_default")]
    pub token: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    pub role: Option<String>,
}

/// Body of `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Plain `{"message": ...}` response body, also used for backend errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

/// Public profile of a user as embedded in posts, comments and reviews.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

/// Authoring user: either a bare id or a populated profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Author {
    Id(String),
    Profile(UserProfile),
}

impl Author {
    /// Name to show next to authored content.
    pub fn display_name(&self) -> &str {
        match self {
            Author::Profile(p) if !p.name.is_empty() => &p.name,
            Author::Profile(p) if !p.email.is_empty() => &p.email,
            _ => "Anonymous",
        }
    }
}
