//! Database connection management and SeaORM repositories.

mod base;
mod connection;
pub mod entity;
mod repositories;

pub use base::SeaOrmRepository;
pub use connection::{DatabaseConfig, connect};
pub use repositories::{SeaOrmCommentRepository, SeaOrmPostRepository, SeaOrmUserRepository};
