//! Migration CLI tool.
//!
//! Reads `DATABASE_URL` (or `-u <url>`), e.g.
//! `DATABASE_URL=sqlite://posts.db?mode=rwc cargo run -p migration -- up`.

use sea_orm_migration::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sea_orm_migration=info")),
        )
        .init();

    cli::run_cli(migration::Migrator).await;
}
