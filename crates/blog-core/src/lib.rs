//! # Blog Core
//!
//! The domain layer of the blog.
//! This crate holds the records, the admin policy and the ports that
//! infrastructure implements. It has no database or HTTP dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use domain::{ADMIN_USER_ID, is_admin};
pub use error::{DomainError, RepoError};
