//! Blog post use-case service.
//!
//! Converts DTOs to entities, delegates persistence to a [`PostRepository`]
//! and converts the results back. Repository failures never leave this
//! module unwrapped; they surface as [`ServiceError::Repository`].

use std::sync::Arc;

use chrono::Utc;
use tracing::Span;

use blogpost_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::domain::{NewPost, Post};
use crate::error::{RepoError, ServiceError};
use crate::ports::PostRepository;

/// Orchestrates blog post CRUD over a repository.
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    span: Span,
}

impl PostService {
    /// Creates a service over `repo`, logging through `span`.
    pub fn new(repo: Arc<dyn PostRepository>, span: Span) -> Self {
        Self { repo, span }
    }

    fn wrap(&self, message: String) -> impl FnOnce(RepoError) -> ServiceError + '_ {
        move |err| {
            tracing::error!(parent: &self.span, error = %err, "{}", message);
            ServiceError::repository(message, err)
        }
    }

    /// List every post.
    pub async fn list(&self) -> Result<Vec<PostResponse>, ServiceError> {
        tracing::debug!(parent: &self.span, "Fetching all blog posts from the repository");

        let posts = self
            .repo
            .list()
            .await
            .map_err(self.wrap("An error occurred while retrieving all blog posts.".into()))?;

        tracing::debug!(parent: &self.span, count = posts.len(), "Retrieved blog posts");
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    /// Fetch one post. A missing post is `Ok(None)`, not an error.
    pub async fn get(&self, id: i32) -> Result<Option<PostResponse>, ServiceError> {
        tracing::debug!(parent: &self.span, id, "Fetching blog post from the repository");

        let post = self.repo.get(id).await.map_err(
            self.wrap(format!(
                "An error occurred while retrieving blog post with ID {id}."
            )),
        )?;

        if post.is_none() {
            tracing::debug!(parent: &self.span, id, "Blog post not found");
        }
        Ok(post.map(PostResponse::from))
    }

    /// Create a post and return it with its assigned id.
    pub async fn add(&self, request: CreatePostRequest) -> Result<Post, ServiceError> {
        tracing::info!(parent: &self.span, title = %request.title, "Adding a new blog post");

        let post = self
            .repo
            .add(NewPost::from(request))
            .await
            .map_err(self.wrap("An error occurred while adding a new blog post.".into()))?;

        tracing::debug!(parent: &self.span, id = post.id, "Added a new blog post");
        Ok(post)
    }

    /// Overwrite the mutable fields of an existing post.
    ///
    /// Fails with [`ServiceError::NotFound`] when `id` does not exist.
    pub async fn update(&self, id: i32, request: UpdatePostRequest) -> Result<(), ServiceError> {
        tracing::debug!(parent: &self.span, id, "Updating blog post");

        let mut post = self
            .repo
            .get(id)
            .await
            .map_err(self.wrap(format!(
                "An error occurred while updating blog post with ID {id}."
            )))?
            .ok_or(ServiceError::NotFound { id })?;

        post.apply_update(request, Utc::now());
        self.repo.update(&post).await.map_err(self.wrap(format!(
            "An error occurred while updating blog post with ID {id}."
        )))?;

        tracing::debug!(parent: &self.span, id, "Updated blog post");
        Ok(())
    }

    /// Remove a post. Returns `false` when `id` does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        tracing::debug!(parent: &self.span, id, "Deleting blog post");

        let message = format!("An error occurred while deleting blog post with ID {id}.");
        let Some(post) = self.repo.get(id).await.map_err(self.wrap(message.clone()))? else {
            tracing::debug!(parent: &self.span, id, "Blog post not found");
            return Ok(false);
        };

        self.repo.delete(&post).await.map_err(self.wrap(message))?;

        tracing::debug!(parent: &self.span, id, "Deleted blog post");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::TimeZone;

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        rows: Mutex<Vec<Post>>,
        failing: bool,
        updates: AtomicUsize,
        deletes: AtomicUsize,
    }

    impl FakeRepository {
        fn with_rows(rows: Vec<Post>) -> Self {
            Self {
                rows: Mutex::new(rows),
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self {
                failing: true,
                ..Default::default()
            }
        }

        fn check(&self) -> Result<(), RepoError> {
            if self.failing {
                return Err(RepoError::store(
                    "store unavailable",
                    std::io::Error::other("connection refused"),
                ));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PostRepository for FakeRepository {
        async fn list(&self) -> Result<Vec<Post>, RepoError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn get(&self, id: i32) -> Result<Option<Post>, RepoError> {
            self.check()?;
            Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }

        async fn add(&self, post: NewPost) -> Result<Post, RepoError> {
            self.check()?;
            let mut rows = self.rows.lock().unwrap();
            let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
            let post = post.with_id(id);
            rows.push(post.clone());
            Ok(post)
        }

        async fn update(&self, post: &Post) -> Result<(), RepoError> {
            self.check()?;
            self.updates.fetch_add(1, Ordering::SeqCst);
            let mut rows = self.rows.lock().unwrap();
            if let Some(row) = rows.iter_mut().find(|p| p.id == post.id) {
                *row = post.clone();
            }
            Ok(())
        }

        async fn delete(&self, post: &Post) -> Result<(), RepoError> {
            self.check()?;
            self.deletes.fetch_add(1, Ordering::SeqCst);
            self.rows.lock().unwrap().retain(|p| p.id != post.id);
            Ok(())
        }
    }

    fn existing(id: i32) -> Post {
        Post {
            id,
            title: "Introduction".to_string(),
            content: "Basics".to_string(),
            author: "John Doe".to_string(),
            created_date: Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap(),
            updated_date: None,
            published_date: None,
            is_published: false,
        }
    }

    fn service(repo: Arc<FakeRepository>) -> PostService {
        PostService::new(repo, Span::none())
    }

    fn update_request() -> UpdatePostRequest {
        UpdatePostRequest {
            title: "Updated".to_string(),
            content: "Updated content".to_string(),
            author: "Jane Smith".to_string(),
            published_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap()),
            is_published: true,
        }
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let service = service(Arc::new(FakeRepository::default()));

        let posts = service.list().await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_list_maps_every_row() {
        let service = service(Arc::new(FakeRepository::with_rows(vec![
            existing(1),
            existing(2),
        ])));

        let posts = service.list().await.unwrap();
        assert_eq!(posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let service = service(Arc::new(FakeRepository::with_rows(vec![existing(1)])));

        assert!(service.get(999).await.unwrap().is_none());
        assert_eq!(service.get(1).await.unwrap().unwrap().title, "Introduction");
    }

    #[tokio::test]
    async fn test_add_assigns_id_and_created_date() {
        let repo = Arc::new(FakeRepository::with_rows(vec![existing(1)]));
        let service = service(repo.clone());
        let before = Utc::now();

        let post = service
            .add(CreatePostRequest {
                title: "Fresh".to_string(),
                content: "Fresh content".to_string(),
                author: "Emily Johnson".to_string(),
                is_published: true,
            })
            .await
            .unwrap();

        assert_eq!(post.id, 2);
        assert_eq!(post.title, "Fresh");
        assert_eq!(post.content, "Fresh content");
        assert_eq!(post.author, "Emily Johnson");
        assert!(post.is_published);
        assert!(post.created_date >= before && post.created_date <= Utc::now());
        assert!(post.updated_date.is_none());
        assert_eq!(repo.rows.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_overwrites_mutable_fields() {
        let repo = Arc::new(FakeRepository::with_rows(vec![existing(1)]));
        let service = service(repo.clone());
        let request = update_request();

        service.update(1, request.clone()).await.unwrap();

        let stored = repo.rows.lock().unwrap()[0].clone();
        let original = existing(1);
        assert_eq!(stored.id, 1);
        assert_eq!(stored.created_date, original.created_date);
        assert_eq!(stored.title, request.title);
        assert_eq!(stored.content, request.content);
        assert_eq!(stored.author, request.author);
        assert_eq!(stored.published_date, request.published_date);
        assert!(stored.is_published);
        assert!(stored.updated_date.is_some());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = Arc::new(FakeRepository::default());
        let service = service(repo.clone());

        let err = service.update(42, update_request()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { id: 42 }));
        assert_eq!(repo.updates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing() {
        let repo = Arc::new(FakeRepository::with_rows(vec![existing(1)]));
        let service = service(repo.clone());

        assert!(!service.delete(7).await.unwrap());
        assert_eq!(repo.deletes.load(Ordering::SeqCst), 0);

        assert!(service.delete(1).await.unwrap());
        assert_eq!(repo.deletes.load(Ordering::SeqCst), 1);
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repository_failures_are_wrapped() {
        let service = service(Arc::new(FakeRepository::failing()));

        let err = service.list().await.unwrap_err();
        assert!(matches!(err, ServiceError::Repository { .. }));
        assert_eq!(
            err.to_string(),
            "An error occurred while retrieving all blog posts."
        );

        let err = service.delete(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repository { .. }));

        let err = service.update(1, update_request()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repository { .. }));
    }
}
