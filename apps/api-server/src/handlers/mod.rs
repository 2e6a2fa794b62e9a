//! HTTP handlers and route configuration.

mod auth;
mod categories;
mod dashboard;
mod health;
mod posts;
mod tags;


use actix_web::web;

/// Configure all application routes under the `/api/v0` base path.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v0")
            .route("/health", web::get().to(health::health_check))
            .route("/tags", web::get().to(tags::list))
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/logout", web::post().to(auth::logout))
                    .route("/me", web::get().to(auth::me))
                    .route("/forgot-password", web::post().to(auth::forgot_password))
                    .route("/reset-password", web::post().to(auth::reset_password)),
            )
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::patch().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete))
                    .route("/{id}/comments", web::get().to(posts::list_comments))
                    .route(
                        "/{id}/comments/{comment_id}",
                        web::delete().to(posts::delete_comment),
                    ),
            )
            .service(
                web::scope("/categories")
                    .route("", web::get().to(categories::list))
                    .route("", web::post().to(categories::create))
                    .route("/{id}", web::put().to(categories::update))
                    .route("/{id}", web::delete().to(categories::delete)),
            )
            .service(
                web::scope("/dashboard")
                    .route("/summary", web::get().to(dashboard::summary))
                    .route("/recent-articles", web::get().to(dashboard::recent_articles))
                    .route("/recent-comments", web::get().to(dashboard::recent_comments))
                    .route("/visitors", web::get().to(dashboard::visitors))
                    .route("/devices", web::get().to(dashboard::devices))
                    .route("/shares", web::get().to(dashboard::shares)),
            ),
    );
}
