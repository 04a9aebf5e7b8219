use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a persisted blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_date: DateTime<Utc>,
    pub updated_date: Option<DateTime<Utc>>,
    pub published_date: Option<DateTime<Utc>>,
    pub is_published: bool,
}

/// A post that has not been stored yet. The store assigns its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_date: DateTime<Utc>,
    pub published_date: Option<DateTime<Utc>>,
    pub is_published: bool,
}

impl NewPost {
    /// Create a new post stamped with the current time.
    pub fn new(title: String, content: String, author: String, is_published: bool) -> Self {
        Self {
            title,
            content,
            author,
            created_date: Utc::now(),
            published_date: None,
            is_published,
        }
    }

    /// Attach the store-assigned id.
    pub fn with_id(self, id: i32) -> Post {
        Post {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
            created_date: self.created_date,
            updated_date: None,
            published_date: self.published_date,
            is_published: self.is_published,
        }
    }
}
