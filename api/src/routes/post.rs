use crate::{
    AppState,
    dto::{CommentRequest, CreatePostRequest, LikeRequest, LikeResponse},
    errors::ApiError,
    extract::{Json, Path},
    models::{Comment, Post, PostId},
};
use axum::{extract::State, http::StatusCode};
use tracing::info;
use validator::Validate;

/// GET /api/posts
pub async fn get_feed(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.store.feed().await)
}

/// POST /api/posts
/// Body: { "userId": 1, "content": "..." }
pub async fn create_post(
    State(state): State<AppState>,
    Json(payload): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    payload.validate()?;
    let user_id = payload.user_id.unwrap_or_default();
    let content = payload.content.unwrap_or_default();

    let post = state.store.create_post(user_id, &content).await?;

    info!(post_id = post.id, user_id, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// POST /api/posts/{id}/like
/// Body: { "userId": 1 }
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(post_id): Path<PostId>,
    Json(payload): Json<LikeRequest>,
) -> Result<Json<LikeResponse>, ApiError> {
    payload.validate()?;
    let user_id = payload.user_id.unwrap_or_default();

    let status = state.store.toggle_like(post_id, user_id).await?;

    info!(post_id, user_id, is_liked = status.is_liked, "Like toggled");

    Ok(Json(status))
}

/// POST /api/posts/{id}/comment
/// Body: { "userId": 1, "text": "..." }
pub async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<PostId>,
    Json(payload): Json<CommentRequest>,
) -> Result<(StatusCode, Json<Comment>), ApiError> {
    payload.validate()?;
    let user_id = payload.user_id.unwrap_or_default();
    let text = payload.text.unwrap_or_default();

    let comment = state.store.add_comment(post_id, user_id, &text).await?;

    info!(post_id, comment_id = comment.id, user_id, "Comment added");

    Ok((StatusCode::CREATED, Json(comment)))
}
