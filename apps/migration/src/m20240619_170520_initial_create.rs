use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DbBackend};

use blogpost_core::fixtures;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogPosts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogPosts::Title).string_len(50).not_null())
                    .col(ColumnDef::new(BlogPosts::Content).string_len(100).not_null())
                    .col(ColumnDef::new(BlogPosts::Author).string_len(30).not_null())
                    .col(
                        ColumnDef::new(BlogPosts::CreatedDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BlogPosts::UpdatedDate).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(BlogPosts::PublishedDate).timestamp_with_time_zone().null())
                    .col(
                        ColumnDef::new(BlogPosts::IsPublished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(BlogPosts::Table).columns([
            BlogPosts::Id,
            BlogPosts::Title,
            BlogPosts::Content,
            BlogPosts::Author,
            BlogPosts::CreatedDate,
            BlogPosts::UpdatedDate,
            BlogPosts::PublishedDate,
            BlogPosts::IsPublished,
        ]);
        for post in fixtures::seed_posts() {
            seed.values([
                post.id.into(),
                post.title.into(),
                post.content.into(),
                post.author.into(),
                post.created_date.into(),
                post.updated_date.into(),
                post.published_date.into(),
                post.is_published.into(),
            ])
            .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        manager.exec_stmt(seed).await?;

        // Explicit ids leave the Postgres sequence behind the seeded rows.
        if manager.get_database_backend() == DbBackend::Postgres {
            manager
                .get_connection()
                .execute_unprepared(
                    "SELECT setval(pg_get_serial_sequence('blog_posts', 'id'), \
                     (SELECT MAX(id) FROM blog_posts))",
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlogPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Title,
    Content,
    Author,
    #[sea_orm(iden = "createdDate")]
    CreatedDate,
    #[sea_orm(iden = "updatedDate")]
    UpdatedDate,
    #[sea_orm(iden = "publishedDate")]
    PublishedDate,
    #[sea_orm(iden = "isPublished")]
    IsPublished,
}
