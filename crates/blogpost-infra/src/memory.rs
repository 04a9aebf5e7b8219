//! In-memory post repository - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::Span;

use blogpost_core::domain::{NewPost, Post};
use blogpost_core::error::RepoError;
use blogpost_core::fixtures;
use blogpost_core::ports::PostRepository;

struct Table {
    rows: BTreeMap<i32, Post>,
    next_id: i32,
}

/// Post repository backed by a `BTreeMap` behind an async `RwLock`.
///
/// Ids are never reused, even after deletes.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    table: RwLock<Table>,
    span: Span,
}

impl InMemoryPostRepository {
    /// An empty repository.
    pub fn new(span: Span) -> Self {
        Self::with_posts(Vec::new(), span)
    }

    /// A repository pre-loaded with the seed posts.
    pub fn seeded(span: Span) -> Self {
        Self::with_posts(fixtures::seed_posts(), span)
    }

    /// A repository pre-loaded with `posts`, keyed by their ids.
    pub fn with_posts(posts: Vec<Post>, span: Span) -> Self {
        let next_id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let rows = posts.into_iter().map(|p| (p.id, p)).collect();
        Self {
            table: RwLock::new(Table { rows, next_id }),
            span,
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(parent: &self.span, "Fetching all posts from memory");
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Post>, RepoError> {
        tracing::debug!(parent: &self.span, id, "Fetching post from memory");
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn add(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        let post = post.with_id(id);
        table.rows.insert(id, post.clone());

        tracing::debug!(parent: &self.span, id, "Added a new post to memory");
        Ok(post)
    }

    async fn update(&self, post: &Post) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&post.id) {
            Some(row) => {
                *row = post.clone();
                tracing::debug!(parent: &self.span, id = post.id, "Updated post in memory");
                Ok(())
            }
            None => Err(RepoError::store(
                format!("An error occurred while updating blog post with ID {}.", post.id),
                "row no longer exists",
            )),
        }
    }

    async fn delete(&self, post: &Post) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&post.id);
        tracing::debug!(parent: &self.span, id = post.id, "Deleted post from memory");
        Ok(())
    }
}
