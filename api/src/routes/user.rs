use crate::{
    AppState,
    dto::{
        FollowRequest, FollowResponse, LoginRequest, ProfileParams, ProfileResponse,
        RegisterRequest,
    },
    errors::ApiError,
    extract::{Json, Path, Query},
    models::{User, UserId},
};
use axum::{extract::State, http::StatusCode};
use tracing::info;
use validator::Validate;

/// POST /api/register
/// Body: { "username": "..." }
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    payload.validate()?;
    let username = payload.username.unwrap_or_default();

    let user = state.store.register(&username).await?;

    info!(user_id = user.id, username = %user.username, "New user registered");

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /api/login
/// Body: { "username": "..." }
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<User>, ApiError> {
    payload.validate()?;
    let username = payload.username.unwrap_or_default();

    let user = state.store.login(&username).await?;

    info!(user_id = user.id, "User logged in");

    Ok(Json(user))
}

/// GET /api/users/{id}?viewerId=...
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    Query(params): Query<ProfileParams>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let profile = state.store.profile(id, params.viewer()).await?;

    Ok(Json(profile))
}

/// POST /api/users/{id}/follow
/// Body: { "currentUserId": 1 }
pub async fn toggle_follow(
    State(state): State<AppState>,
    Path(target): Path<UserId>,
    Json(payload): Json<FollowRequest>,
) -> Result<Json<FollowResponse>, ApiError> {
    payload.validate()?;
    let follower = payload.current_user_id.unwrap_or_default();

    let status = state.store.toggle_follow(target, follower).await?;

    info!(
        follower,
        target,
        is_following = status.is_following,
        "Follow toggled"
    );

    Ok(Json(status))
}
