//! Database connection management and the SeaORM post repository.

mod connections;

#[cfg(feature = "database")]
pub mod entity;
#[cfg(feature = "database")]
mod post_repo;

pub use connections::DatabaseConfig;

#[cfg(feature = "database")]
pub use connections::connect;
#[cfg(feature = "database")]
pub use post_repo::SeaOrmPostRepository;
#[cfg(feature = "database")]
pub use sea_orm::{DbConn, DbErr};
