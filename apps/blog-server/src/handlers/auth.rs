//! Registration, login and logout.

use actix_web::{HttpResponse, web};

use blog_core::domain::NewUser;
use blog_core::error::RepoError;
use blog_core::ports::AuthError;
use blog_shared::{FieldErrors, LoginForm, RegisterForm, messages};

use crate::middleware::error::AppResult;
use crate::middleware::session::Session;
use crate::state::AppState;
use crate::views;

/// GET /register
pub async fn register_form(
    state: web::Data<AppState>,
    mut session: Session,
) -> AppResult<HttpResponse> {
    let page = session.page();
    session.render(
        &state,
        views::register(&page, &RegisterForm::default(), &FieldErrors::new()),
    )
}

/// POST /register
pub async fn register(
    state: web::Data<AppState>,
    mut session: Session,
    form: web::Form<RegisterForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if let Err(errors) = form.validate() {
        let page = session.page();
        return session.render(&state, views::register(&page, &form, &errors));
    }

    if state.users.find_by_email(&form.email).await?.is_some() {
        tracing::info!("Registration rejected: email already registered");
        session.flash(messages::EMAIL_ALREADY_REGISTERED);
        return session.redirect(&state, "/login");
    }

    let password_hash = state.passwords.hash(&form.password)?;
    let new_user = NewUser::new(form.email, password_hash, form.name);

    let user = match state.users.insert(new_user).await {
        Ok(user) => user,
        // Lost a race with a concurrent registration for the same email.
        Err(RepoError::Constraint(_)) => {
            session.flash(messages::EMAIL_ALREADY_REGISTERED);
            return session.redirect(&state, "/login");
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = user.id, "User registered");
    session.login(user.id);
    session.redirect(&state, "/")
}

/// GET /login
pub async fn login_form(
    state: web::Data<AppState>,
    mut session: Session,
) -> AppResult<HttpResponse> {
    let page = session.page();
    session.render(
        &state,
        views::login(&page, &LoginForm::default(), &FieldErrors::new()),
    )
}

/// POST /login
pub async fn login(
    state: web::Data<AppState>,
    mut session: Session,
    form: web::Form<LoginForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();

    if let Err(errors) = form.validate() {
        let page = session.page();
        return session.render(&state, views::login(&page, &form, &errors));
    }

    let Some(user) = state.users.find_by_email(&form.email).await? else {
        session.flash(messages::EMAIL_NOT_FOUND);
        return session.redirect(&state, "/login");
    };

    let verified = match state.passwords.verify(&form.password, &user.password_hash) {
        Ok(verified) => verified,
        // A stored hash this service cannot parse can never match.
        Err(AuthError::HashingError(e)) => {
            tracing::warn!(user_id = user.id, error = %e, "Stored password hash is unreadable");
            false
        }
        Err(e) => return Err(e.into()),
    };

    if !verified {
        tracing::info!(user_id = user.id, "Login rejected: password mismatch");
        session.flash(messages::PASSWORD_MISMATCH);
        return session.redirect(&state, "/login");
    }

    tracing::info!(user_id = user.id, "User logged in");
    session.login(user.id);
    session.redirect(&state, "/")
}

/// GET /logout
pub async fn logout(state: web::Data<AppState>, mut session: Session) -> AppResult<HttpResponse> {
    if let Some(user_id) = session.user_id() {
        tracing::info!(user_id, "User logged out");
    }
    session.logout();
    session.redirect(&state, "/")
}
