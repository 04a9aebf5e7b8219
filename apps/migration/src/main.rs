//! Migration CLI tool.
//!
//! Reads `DATABASE_URL` (or `-u <url>`) and applies, reverts or inspects the
//! blog post schema, e.g. `migration up` or `migration status`.

use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("Running blog post schema migrations");
    cli::run_cli(migration::Migrator).await;
}
