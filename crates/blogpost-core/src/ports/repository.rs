use async_trait::async_trait;

use crate::domain::{NewPost, Post};
use crate::error::RepoError;

/// Post repository - data access for blog posts.
///
/// Each call is its own unit of work; no operation spans a transaction.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch every post, ordered by id.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its id.
    async fn get(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// Insert a post. The store assigns the id.
    async fn add(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Persist every field of an existing post.
    async fn update(&self, post: &Post) -> Result<(), RepoError>;

    /// Remove a post.
    async fn delete(&self, post: &Post) -> Result<(), RepoError>;
}
