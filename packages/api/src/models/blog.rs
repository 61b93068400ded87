use serde::{Deserialize, Serialize};

use super::null_as_default;
use super::user::Author;

/// A blog post. The image URL arrives as `image` or, from older posts, `imageUrl`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(alias = "imageUrl")]
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    pub user: Option<Author>,
    #[serde(deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

impl BlogPost {
    pub fn author_name(&self) -> &str {
        self.user.as_ref().map_or("Anonymous", Author::display_name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    #[serde(rename = "_id")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    pub user: Option<Author>,
    #[serde(deserialize_with = "null_as_default")]
    pub post: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}
