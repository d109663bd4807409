mod assets;
mod health;
mod post;
mod user;

use crate::AppState;
use axum::{
    Router,
    routing::{self, get},
};

/// Every JSON endpoint lives under `/api`; all other paths fall through to the page.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/register", routing::post(user::register))
        .route("/api/login", routing::post(user::login))
        .route("/api/users/{id}", get(user::get_profile))
        .route("/api/users/{id}/follow", routing::post(user::toggle_follow))
        .route("/api/posts", get(post::get_feed).post(post::create_post))
        .route("/api/posts/{id}/like", routing::post(post::toggle_like))
        .route("/api/posts/{id}/comment", routing::post(post::add_comment))
        .fallback(assets::serve_page)
}
