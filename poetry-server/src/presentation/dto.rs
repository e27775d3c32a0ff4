use crate::domain::poem::Poem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/poems`. Every field is optional on the wire so that
/// missing values reach validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePoemRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PoemResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Poem> for PoemResponse {
    fn from(poem: Poem) -> Self {
        Self {
            id: poem.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: poem.title,
            author: poem.author,
            content: poem.content,
            created_at: poem.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PoemCreatedResponse {
    pub message: String,
    pub id: String,
}
