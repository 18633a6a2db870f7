//! Error handling - maps domain, repository and auth failures to responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};

use blog_core::error::{DomainError, RepoError};
use blog_core::ports::AuthError;

use crate::views;

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Forbidden => HttpResponse::Forbidden().finish(),
            AppError::NotFound(detail) => {
                tracing::debug!("Not found: {}", detail);
                HttpResponse::NotFound()
                    .content_type(ContentType::html())
                    .body(views::error(404, "Not Found"))
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                HttpResponse::InternalServerError()
                    .content_type(ContentType::html())
                    .body(views::error(500, "Internal Server Error"))
            }
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::Unauthenticated | DomainError::Forbidden => AppError::Forbidden,
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => {
                tracing::error!("Unexpected constraint violation: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_has_no_body() {
        let response = AppError::Forbidden.error_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(matches!(
            actix_web::body::MessageBody::size(response.body()),
            actix_web::body::BodySize::Sized(0)
        ));
    }

    #[test]
    fn domain_errors_map_to_statuses() {
        let not_found: AppError = DomainError::NotFound {
            entity_type: "post",
            id: 9,
        }
        .into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let forbidden: AppError = DomainError::Forbidden.into();
        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn repo_errors_hide_details() {
        let err: AppError = RepoError::Query("syntax error near SELECT".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_string().contains("SELECT"));
    }
}
