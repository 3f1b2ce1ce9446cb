//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
///
/// Extractor failures are routed through [`AppError`] so every error response
/// has the same shape: bad bodies and query strings are validation failures,
/// and a path id that is not a UUID cannot name an existing post.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::invalid("body", err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::invalid("query", err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|_err, _req| AppError::NotFound.into()))
    .route("/health", web::get().to(health::health_check))
    .service(
        web::scope("/posts")
            .route("", web::post().to(posts::create_post))
            .route("", web::get().to(posts::list_posts))
            .route("/{id}", web::get().to(posts::get_post))
            .route("/{id}", web::put().to(posts::update_post))
            .route("/{id}", web::delete().to(posts::delete_post)),
    );
}
