//! # BlogPost Core
//!
//! The domain layer: the post entity, the repository port and the service
//! that orchestrates it. No infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod fixtures;
pub mod mapper;
pub mod ports;
pub mod services;

pub use error::{RepoError, ServiceError};
pub use services::PostService;
