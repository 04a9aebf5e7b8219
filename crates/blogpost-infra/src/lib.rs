//! # BlogPost Infrastructure
//!
//! Concrete implementations of the ports defined in `blogpost-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `database` - SQLite/PostgreSQL support via SeaORM

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "database")]
pub use database::SeaOrmPostRepository;
