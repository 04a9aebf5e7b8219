//! Application state - shared across all handlers.

use std::sync::Arc;

use blogpost_core::PostService;
use blogpost_core::ports::PostRepository;
use blogpost_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Build the state around an already constructed repository.
    pub fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        let span = tracing::info_span!("post_service");
        Self {
            posts: Arc::new(PostService::new(repo, span)),
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let repo = Self::repository(config).await;
        tracing::info!("Application state initialized");
        Self::with_repository(repo)
    }

    #[cfg(feature = "database")]
    async fn repository(config: &AppConfig) -> Arc<dyn PostRepository> {
        use blogpost_infra::SeaOrmPostRepository;
        use blogpost_infra::database::connect;
        use migration::{Migrator, MigratorTrait};

        let conn = match connect(&config.database).await {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                return Self::in_memory();
            }
        };

        if config.run_migrations {
            match Migrator::up(&conn, None).await {
                Ok(()) => tracing::info!("Database migrations applied"),
                Err(e) => tracing::error!("Failed to apply migrations: {}", e),
            }
        }

        let span = tracing::info_span!("post_repository", backend = "sea-orm");
        Arc::new(SeaOrmPostRepository::new(conn, span))
    }

    #[cfg(not(feature = "database"))]
    async fn repository(_config: &AppConfig) -> Arc<dyn PostRepository> {
        tracing::info!("Running without database feature - using in-memory repository");
        Self::in_memory()
    }

    fn in_memory() -> Arc<dyn PostRepository> {
        let span = tracing::info_span!("post_repository", backend = "memory");
        Arc::new(InMemoryPostRepository::seeded(span))
    }
}
