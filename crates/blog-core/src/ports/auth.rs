//! Authentication ports.

use crate::domain::SessionData;

/// Codec for the signed session cookie.
pub trait SessionService: Send + Sync {
    /// Sign session state into an opaque cookie value.
    fn encode(&self, session: &SessionData) -> Result<String, AuthError>;

    /// Verify and decode a cookie value.
    fn decode(&self, value: &str) -> Result<SessionData, AuthError>;

    /// Lifetime of an issued cookie.
    fn max_age_seconds(&self) -> i64;
}

/// Password hashing service.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password with a fresh salt.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a stored hash.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Session expired")]
    SessionExpired,

    #[error("Invalid session: {0}")]
    InvalidSession(String),

    #[error("Hashing error: {0}")]
    HashingError(String),
}
