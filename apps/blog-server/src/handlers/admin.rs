//! Post creation, editing and deletion. Every handler here takes an
//! [`AdminIdentity`], so anyone but user 1 is turned away with a 403.

use actix_web::{HttpResponse, web};

use blog_core::domain::{NewPost, Post};
use blog_core::error::{DomainError, RepoError};
use blog_shared::{FieldErrors, PostForm, messages};

use crate::middleware::auth::AdminIdentity;
use crate::middleware::error::{AppError, AppResult};
use crate::middleware::session::Session;
use crate::state::AppState;
use crate::views::{self, Editor};

fn post_not_found(id: i32) -> AppError {
    DomainError::NotFound {
        entity_type: "post",
        id,
    }
    .into()
}

fn render_editor(
    state: &AppState,
    mut session: Session,
    editor: Editor,
    form: &PostForm,
    errors: &FieldErrors,
) -> AppResult<HttpResponse> {
    let page = session.page();
    session.render(state, views::post_editor(&page, editor, form, errors))
}

fn duplicate_title() -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.add("title", messages::DUPLICATE_TITLE);
    errors
}

/// GET /new-post
pub async fn new_post_form(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    session: Session,
) -> AppResult<HttpResponse> {
    render_editor(
        &state,
        session,
        Editor::New,
        &PostForm::default(),
        &FieldErrors::new(),
    )
}

/// POST /new-post
pub async fn create_post(
    admin: AdminIdentity,
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return render_editor(&state, session, Editor::New, &form, &errors);
    }

    let new_post = NewPost::new(
        admin.user_id,
        form.title.clone(),
        form.subtitle.clone(),
        form.img_url.clone(),
        form.body.clone(),
    );

    match state.posts.insert(new_post).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, "Post created");
            session.redirect(&state, "/")
        }
        Err(RepoError::Constraint(_)) => {
            render_editor(&state, session, Editor::New, &form, &duplicate_title())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /edit-post/{post_id}
pub async fn edit_post_form(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;

    let form = PostForm {
        title: post.title,
        subtitle: post.subtitle,
        img_url: post.img_url,
        body: post.body,
    };
    render_editor(
        &state,
        session,
        Editor::Edit(post_id),
        &form,
        &FieldErrors::new(),
    )
}

/// POST /edit-post/{post_id}
///
/// Only the content changes; the author and date stay as first written.
pub async fn update_post(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i32>,
    form: web::Form<PostForm>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let mut post: Post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;

    let form = form.into_inner();
    if let Err(errors) = form.validate() {
        return render_editor(&state, session, Editor::Edit(post_id), &form, &errors);
    }

    post.revise(
        form.title.clone(),
        form.subtitle.clone(),
        form.img_url.clone(),
        form.body.clone(),
    );

    match state.posts.update(post).await {
        Ok(post) => {
            tracing::info!(post_id = post.id, "Post updated");
            session.redirect(&state, &format!("/{}", post.id))
        }
        Err(RepoError::Constraint(_)) => render_editor(
            &state,
            session,
            Editor::Edit(post_id),
            &form,
            &duplicate_title(),
        ),
        Err(e) => Err(e.into()),
    }
}

/// GET /delete/{post_id}
pub async fn delete_post(
    _admin: AdminIdentity,
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let detached = match state.posts.delete_detaching_comments(post_id).await {
        Err(RepoError::NotFound) => return Err(post_not_found(post_id)),
        result => result?,
    };

    tracing::info!(post_id, comments_detached = detached, "Post deleted");
    session.redirect(&state, "/")
}
