//! SeaORM post repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, EntityTrait, QueryOrder};
use tracing::Span;

use blogpost_core::domain::{NewPost, Post};
use blogpost_core::error::RepoError;
use blogpost_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// Post repository over a SeaORM connection pool.
pub struct SeaOrmPostRepository {
    db: DbConn,
    span: Span,
}

impl SeaOrmPostRepository {
    pub fn new(db: DbConn, span: Span) -> Self {
        Self { db, span }
    }

    fn fail(&self, message: String) -> impl FnOnce(sea_orm::DbErr) -> RepoError + '_ {
        move |err| {
            tracing::error!(parent: &self.span, error = %err, "{}", message);
            RepoError::store(message, err)
        }
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(parent: &self.span, "Fetching all posts from the database");

        let rows = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(self.fail("An error occurred while fetching all blog posts.".into()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Post>, RepoError> {
        tracing::debug!(parent: &self.span, id, "Fetching post from the database");

        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(self.fail(format!(
                "An error occurred while fetching blog post with ID {id}."
            )))?;

        Ok(row.map(Into::into))
    }

    async fn add(&self, post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(self.fail("An error occurred while adding a new blog post.".into()))?;

        tracing::debug!(parent: &self.span, id = model.id, "Added a new post to the database");
        Ok(model.into())
    }

    async fn update(&self, post: &Post) -> Result<(), RepoError> {
        post::ActiveModel::from(post)
            .update(&self.db)
            .await
            .map_err(self.fail(format!(
                "An error occurred while updating blog post with ID {}.",
                post.id
            )))?;

        tracing::debug!(parent: &self.span, id = post.id, "Updated post in the database");
        Ok(())
    }

    async fn delete(&self, post: &Post) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(post.id)
            .exec(&self.db)
            .await
            .map_err(self.fail(format!(
                "An error occurred while deleting blog post with ID {}.",
                post.id
            )))?;

        tracing::debug!(
            parent: &self.span,
            id = post.id,
            rows = result.rows_affected,
            "Deleted post from the database"
        );
        Ok(())
    }
}
