//! Conversions between the post entity and its transport DTOs.

use chrono::{DateTime, Utc};

use blogpost_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::domain::{NewPost, Post};

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author,
            created_date: post.created_date,
            updated_date: post.updated_date,
            published_date: post.published_date,
            is_published: post.is_published,
        }
    }
}

impl From<CreatePostRequest> for NewPost {
    fn from(request: CreatePostRequest) -> Self {
        NewPost::new(
            request.title,
            request.content,
            request.author,
            request.is_published,
        )
    }
}

impl Post {
    /// Overwrite the mutable fields from an update request.
    ///
    /// `id` and `created_date` are left untouched.
    pub fn apply_update(&mut self, request: UpdatePostRequest, now: DateTime<Utc>) {
        self.title = request.title;
        self.content = request.content;
        self.author = request.author;
        self.is_published = request.is_published;
        self.published_date = request.published_date;
        self.updated_date = Some(now);
    }
}
