use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// A poem as stored in the `poems` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poem {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub author: String,
    pub content: String,
    #[serde(
        rename = "createdAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

/// Input that passed validation: trimmed, non-empty `title` and `content`,
/// and an author that is never blank.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoem {
    title: String,
    author: String,
    content: String,
}

impl NewPoem {
    /// `title` and `content` are trimmed before the emptiness check, so
    /// whitespace-only values are rejected. An absent or blank `author`
    /// becomes [`ANONYMOUS_AUTHOR`].
    pub fn validate(
        title: Option<&str>,
        author: Option<&str>,
        content: Option<&str>,
    ) -> Result<Self, DomainError> {
        let title = non_blank(title).ok_or(DomainError::MissingFields)?;
        let content = non_blank(content).ok_or(DomainError::MissingFields)?;
        let author = non_blank(author).unwrap_or(ANONYMOUS_AUTHOR);

        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
            content: content.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

impl Poem {
    /// Document ready for insertion, stamped with the current time.
    pub fn new(input: NewPoem) -> Self {
        Self {
            id: None,
            title: input.title,
            author: input.author,
            content: input.content,
            // BSON dates carry milliseconds; truncate so the stored value and
            // the in-memory value agree.
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
