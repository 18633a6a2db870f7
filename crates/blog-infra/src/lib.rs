//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! SeaORM repositories, Argon2 password hashing and the signed
//! session cookie codec.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtSessionService, SessionConfig};
pub use database::{
    DatabaseConfig, SeaOrmCommentRepository, SeaOrmPostRepository, SeaOrmUserRepository,
};
