//! Signed-cookie session extractor.
//!
//! The session is read once per request from the `session` cookie. Handlers
//! mutate it (login, logout, flash) and finish through `redirect` or
//! `render`, which re-issue the cookie whenever something changed.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::http::header::{self, ContentType};
use actix_web::{FromRequest, HttpRequest, HttpResponse, HttpResponseBuilder, dev::Payload, web};
use std::future::{Ready, ready};

use blog_core::domain::SessionData;
use blog_core::ports::SessionService;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;
use crate::views::Page;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Clone, Default)]
pub struct Session {
    data: SessionData,
    changed: bool,
}

impl Session {
    pub fn data(&self) -> &SessionData {
        &self.data
    }

    pub fn user_id(&self) -> Option<i32> {
        self.data.user_id
    }

    pub fn login(&mut self, user_id: i32) {
        self.data.login(user_id);
        self.changed = true;
    }

    pub fn logout(&mut self) {
        self.data.logout();
        self.changed = true;
    }

    pub fn flash(&mut self, message: impl Into<String>) {
        self.data.flash(message);
        self.changed = true;
    }

    /// Page context for rendering. Drains pending flashes.
    pub fn page(&mut self) -> Page {
        let flashes = self.data.take_flashes();
        if !flashes.is_empty() {
            self.changed = true;
        }
        Page {
            logged_in: self.data.is_authenticated(),
            is_admin: self.data.is_admin(),
            flashes,
        }
    }

    /// Cookie to send back, if the session changed. An emptied session
    /// removes the cookie instead of signing an empty one.
    fn cookie(&self, sessions: &dyn SessionService) -> AppResult<Option<Cookie<'static>>> {
        if !self.changed {
            return Ok(None);
        }

        if self.data.is_empty() {
            let mut cookie = Cookie::build(SESSION_COOKIE, "").path("/").finish();
            cookie.make_removal();
            return Ok(Some(cookie));
        }

        let value = sessions.encode(&self.data)?;
        Ok(Some(
            Cookie::build(SESSION_COOKIE, value)
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .max_age(Duration::seconds(sessions.max_age_seconds()))
                .finish(),
        ))
    }

    fn attach_cookie(&self, state: &AppState, response: &mut HttpResponseBuilder) -> AppResult<()> {
        if let Some(cookie) = self.cookie(state.sessions.as_ref())? {
            response.cookie(cookie);
        }
        Ok(())
    }

    /// 303 See Other to `location`.
    pub fn redirect(&self, state: &AppState, location: &str) -> AppResult<HttpResponse> {
        let mut response = HttpResponse::SeeOther();
        response.insert_header((header::LOCATION, location));
        self.attach_cookie(state, &mut response)?;
        Ok(response.finish())
    }

    /// 200 with an HTML body.
    pub fn render(&self, state: &AppState, html: String) -> AppResult<HttpResponse> {
        let mut response = HttpResponse::Ok();
        response.content_type(ContentType::html());
        self.attach_cookie(state, &mut response)?;
        Ok(response.body(html))
    }
}

impl FromRequest for Session {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let state = match req.app_data::<web::Data<AppState>>() {
            Some(state) => state,
            None => {
                tracing::error!("AppState not found in app data");
                return ready(Err(AppError::Internal(
                    "Server configuration error".to_string(),
                )));
            }
        };

        let Some(cookie) = req.cookie(SESSION_COOKIE) else {
            return ready(Ok(Session::default()));
        };

        // An unreadable cookie is treated as anonymous and cleared on the way out.
        let session = match state.sessions.decode(cookie.value()) {
            Ok(data) => Session {
                data,
                changed: false,
            },
            Err(e) => {
                tracing::debug!(error = %e, "Discarding session cookie");
                Session {
                    data: SessionData::default(),
                    changed: true,
                }
            }
        };

        ready(Ok(session))
    }
}
