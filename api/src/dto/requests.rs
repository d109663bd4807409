use crate::models::UserId;
use serde::Deserialize;
use validator::Validate;

// Fields are optional so that a missing key reaches the validator and
// produces the same message as an empty one.

#[derive(Debug, Validate, Deserialize)]
pub struct RegisterRequest {
    #[validate(
        required(message = "Username is required"),
        length(min = 1, message = "Username is required")
    )]
    pub username: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
pub struct LoginRequest {
    #[validate(
        required(message = "Username is required"),
        length(min = 1, message = "Username is required")
    )]
    pub username: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    #[validate(
        required(message = "Current User ID required"),
        range(min = 1, message = "Current User ID required")
    )]
    pub current_user_id: Option<UserId>,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(
        required(message = "Missing fields"),
        range(min = 1, message = "Missing fields")
    )]
    pub user_id: Option<UserId>,
    #[validate(
        required(message = "Missing fields"),
        length(min = 1, message = "Missing fields")
    )]
    pub content: Option<String>,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    #[validate(
        required(message = "User ID required"),
        range(min = 1, message = "User ID required")
    )]
    pub user_id: Option<UserId>,
}

#[derive(Debug, Validate, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRequest {
    #[validate(
        required(message = "Missing fields"),
        range(min = 1, message = "Missing fields")
    )]
    pub user_id: Option<UserId>,
    #[validate(
        required(message = "Missing fields"),
        length(min = 1, message = "Missing fields")
    )]
    pub text: Option<String>,
}

/// GET /api/users/{id}?viewerId=...
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileParams {
    pub viewer_id: Option<String>,
}

impl ProfileParams {
    /// The viewing user, if the query names one. A value that is not an id
    /// counts as no viewer.
    pub fn viewer(&self) -> Option<UserId> {
        self.viewer_id.as_deref().and_then(|id| id.parse().ok())
    }
}
