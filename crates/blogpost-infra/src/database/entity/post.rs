//! Blog post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use blogpost_core::domain::{NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,
    #[sea_orm(column_name = "createdDate")]
    pub created_date: DateTimeUtc,
    #[sea_orm(column_name = "updatedDate")]
    pub updated_date: Option<DateTimeUtc>,
    #[sea_orm(column_name = "publishedDate")]
    pub published_date: Option<DateTimeUtc>,
    #[sea_orm(column_name = "isPublished")]
    pub is_published: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: model.author,
            created_date: model.created_date,
            updated_date: model.updated_date,
            published_date: model.published_date,
            is_published: model.is_published,
        }
    }
}

/// A fresh row; the id is left for the store to assign.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            title: Set(post.title),
            content: Set(post.content),
            author: Set(post.author),
            created_date: Set(post.created_date),
            updated_date: Set(None),
            published_date: Set(post.published_date),
            is_published: Set(post.is_published),
        }
    }
}

/// Every column marked as modified.
impl From<&Post> for ActiveModel {
    fn from(post: &Post) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title.clone()),
            content: Set(post.content.clone()),
            author: Set(post.author.clone()),
            created_date: Set(post.created_date),
            updated_date: Set(post.updated_date),
            published_date: Set(post.published_date),
            is_published: Set(post.is_published),
        }
    }
}
