use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::user::Author;

/// A site review left by a signed-in user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Review {
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub review: String,
    pub user: Option<Author>,
}

impl Review {
    pub fn author_name(&self) -> &str {
        self.user.as_ref().map_or("Anonymous", Author::display_name)
    }
}

/// `GET /api/reviews/list` wraps the list: `{"review": [...]}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewList {
    #[serde(deserialize_with = "null_as_default")]
    pub review: Vec<Review>,
}

/// `POST /api/reviews` returns `{"review": {...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewEnvelope {
    pub review: Review,
}
