//! # sl-api
//!
//! The web routing and orchestration layer for SuiLaughs.

pub mod handlers;
pub mod middleware;

use actix_web::web;

pub use handlers::AppState;

/// Configures the routes for the feed.
///
/// # Developer Note
/// Specific paths (`/wallet/...`, `/api/...`, `/posts`) are registered
/// before the `/{kind}/{id}/...` patterns.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            // The feed page (e.g., /?tab=memes)
            .route("/", web::get().to(handlers::index))
            // Wallet widget
            .route("/wallet/connect", web::post().to(handlers::connect_wallet))
            .route("/wallet/disconnect", web::post().to(handlers::disconnect_wallet))
            .route("/wallet/address", web::get().to(handlers::copy_address))
            // JSON views
            .route("/api/stats", web::get().to(handlers::api_stats))
            .route("/api/{kind}", web::get().to(handlers::api_posts))
            // Add-post dialog
            .route("/posts", web::post().to(handlers::submit_post))
            // Card actions (e.g., /jokes/1/like)
            .route("/{kind}/{id}/like", web::post().to(handlers::like_post))
            .route("/{kind}/{id}/share", web::get().to(handlers::share_post)),
    );
}
