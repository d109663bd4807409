use crate::AppState;
use axum::{Json, extract::State};
use chrono::Utc;

/// GET /api/health
/// Response: 200 OK with JSON, including how much the store currently holds
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let (users, posts) = state.store.counts().await;

    Json(serde_json::json!({
      "status": "healthy",
      "timestamp": Utc::now().timestamp(),
      "users": users,
      "posts": posts
    }))
}
