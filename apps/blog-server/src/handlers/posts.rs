//! Public reading and commenting.

use actix_web::{HttpResponse, web};

use blog_core::domain::{NewComment, Post, User};
use blog_core::error::DomainError;
use blog_shared::{CommentForm, FieldErrors, messages};

use crate::middleware::error::AppResult;
use crate::middleware::session::Session;
use crate::state::AppState;
use crate::views;

async fn load_post(state: &AppState, post_id: i32) -> AppResult<(Post, Option<User>)> {
    state
        .posts
        .find_with_author(post_id)
        .await?
        .ok_or_else(|| {
            DomainError::NotFound {
                entity_type: "post",
                id: post_id,
            }
            .into()
        })
}

async fn render_post(
    state: &AppState,
    mut session: Session,
    (post, author): (Post, Option<User>),
    form: &CommentForm,
    errors: &FieldErrors,
) -> AppResult<HttpResponse> {
    let comments = state.comments.find_by_post(post.id).await?;
    let page = session.page();
    session.render(
        state,
        views::post(&page, &post, author.as_ref(), &comments, form, errors),
    )
}

/// GET /
pub async fn index(state: web::Data<AppState>, mut session: Session) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all_with_author().await?;
    let page = session.page();
    session.render(&state, views::index(&page, &posts))
}

/// GET /{post_id}
pub async fn show_post(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post = load_post(&state, path.into_inner()).await?;
    render_post(&state, session, post, &CommentForm::default(), &FieldErrors::new()).await
}

/// POST /{post_id}
///
/// The session is checked before the form so an anonymous submission
/// never gets as far as validation.
pub async fn add_comment(
    state: web::Data<AppState>,
    mut session: Session,
    path: web::Path<i32>,
    form: web::Form<CommentForm>,
) -> AppResult<HttpResponse> {
    let post = load_post(&state, path.into_inner()).await?;

    let commenter = match session.data().require_user() {
        Ok(user_id) => state.users.find_by_id(user_id).await?,
        Err(_) => None,
    };
    let Some(commenter) = commenter else {
        // A signed cookie can outlive its user row; treat it as logged out.
        if session.user_id().is_some() {
            session.logout();
        }
        session.flash(messages::LOGIN_TO_COMMENT);
        return session.redirect(&state, "/login");
    };

    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return render_post(&state, session, post, &form, &errors).await;
    }

    let comment = state
        .comments
        .insert(NewComment::new(commenter.id, post.0.id, form.comment))
        .await?;

    tracing::info!(
        comment_id = comment.id,
        post_id = post.0.id,
        user_id = commenter.id,
        "Comment added"
    );
    session.redirect(&state, "/")
}
