//! Request extractors, middleware and error mapping.

pub mod auth;
pub mod error;
pub mod request_id;
pub mod session;
