pub mod config;
pub mod dto;
pub mod errors;
pub mod extract;
pub mod models;
pub mod routes;
pub mod states;
pub mod store;

pub use states::AppState;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Builds the full application: JSON API, page fallback and middleware.
pub fn app(state: AppState) -> Router {
    // The page may be opened from another origin during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    routes::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
