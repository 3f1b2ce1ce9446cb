use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a titled piece of content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Build a fresh post with a time-ordered id and both timestamps set to now.
    pub fn create(data: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            title: data.title,
            content: data.content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply the present fields of `changes` and bump `updated_at`.
    ///
    /// Returns `false` when there was nothing to apply.
    pub fn apply(&mut self, changes: PostChanges) -> bool {
        if changes.is_empty() {
            return false;
        }
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        self.updated_at = Utc::now();
        true
    }
}

/// Validated input for creating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// Validated partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
