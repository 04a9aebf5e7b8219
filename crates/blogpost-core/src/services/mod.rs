//! Use-case services.

mod post_service;

pub use post_service::PostService;
