//! HTTP handlers and route configuration.

mod admin;
mod auth;
mod health;
mod posts;


use actix_web::web;

/// Configure all application routes. Named routes come before the
/// numeric `/{post_id}` catch so they are never shadowed.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        // Auth routes
        .service(
            web::resource("/register")
                .route(web::get().to(auth::register_form))
                .route(web::post().to(auth::register)),
        )
        .service(
            web::resource("/login")
                .route(web::get().to(auth::login_form))
                .route(web::post().to(auth::login)),
        )
        .route("/logout", web::get().to(auth::logout))
        // Admin-only post mutation
        .service(
            web::resource("/new-post")
                .route(web::get().to(admin::new_post_form))
                .route(web::post().to(admin::create_post)),
        )
        .service(
            web::resource("/edit-post/{post_id}")
                .route(web::get().to(admin::edit_post_form))
                .route(web::post().to(admin::update_post)),
        )
        .route("/delete/{post_id}", web::get().to(admin::delete_post))
        // Public reading and commenting
        .route("/", web::get().to(posts::index))
        .service(
            web::resource(r"/{post_id:\d+}")
                .route(web::get().to(posts::show_post))
                .route(web::post().to(posts::add_comment)),
        );
}
