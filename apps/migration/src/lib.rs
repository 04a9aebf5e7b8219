//! Schema migrations for the blog post store.

pub use sea_orm_migration::prelude::*;

mod m20240619_170520_initial_create;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240619_170520_initial_create::Migration)]
    }
}
