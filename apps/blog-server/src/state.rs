//! Application state - shared across all handlers.

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::DbConn;

use blog_core::ports::{
    CommentRepository, PasswordService, PostRepository, SessionService, UserRepository,
};
use blog_infra::database::{self, SeaOrmCommentRepository, SeaOrmPostRepository, SeaOrmUserRepository};
use blog_infra::{Argon2PasswordService, JwtSessionService};

use crate::config::AppConfig;

/// Shared application state. Every handler gets its store and
/// auth services from here; there are no globals.
#[derive(Clone)]
pub struct AppState {
    pub db: DbConn,
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub passwords: Arc<dyn PasswordService>,
    pub sessions: Arc<dyn SessionService>,
}

impl AppState {
    /// Connect to the configured database, bring the schema up to date
    /// and wire the repositories.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let db = database::connect(&config.database).await?;
        Migrator::up(&db, None).await?;
        tracing::info!("Database schema is up to date");

        let state = Self::from_parts(
            db,
            Arc::new(Argon2PasswordService::new()),
            Arc::new(JwtSessionService::new(config.session.clone())),
        );

        tracing::info!("Application state initialized");
        Ok(state)
    }

    pub fn from_parts(
        db: DbConn,
        passwords: Arc<dyn PasswordService>,
        sessions: Arc<dyn SessionService>,
    ) -> Self {
        Self {
            users: Arc::new(SeaOrmUserRepository::new(db.clone())),
            posts: Arc::new(SeaOrmPostRepository::new(db.clone())),
            comments: Arc::new(SeaOrmCommentRepository::new(db.clone())),
            db,
            passwords,
            sessions,
        }
    }
}
