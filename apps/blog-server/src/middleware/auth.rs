//! Admin-only guard.

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use std::future::{Ready, ready};

use crate::middleware::error::AppError;
use crate::middleware::session::Session;

/// The admin identity (id == 1).
///
/// Put this in a handler's arguments to make it admin-only; everyone
/// else, signed in or not, gets an empty 403:
/// ```ignore
/// async fn delete_post(admin: AdminIdentity, ...) -> AppResult<HttpResponse> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdminIdentity {
    pub user_id: i32,
}

impl FromRequest for AdminIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let result = Session::from_request(req, payload)
            .into_inner()
            .and_then(|session| {
                session
                    .data()
                    .require_admin()
                    .map(|user_id| AdminIdentity { user_id })
                    .map_err(AppError::from)
            });

        if let Err(AppError::Forbidden) = result {
            tracing::warn!(
                method = %req.method(),
                path = %req.path(),
                "Rejected non-admin request"
            );
        }

        ready(result)
    }
}
