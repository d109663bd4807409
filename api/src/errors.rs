use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::warn;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Username already taken")]
    UsernameTaken,
    #[error("Cannot follow yourself")]
    CannotFollowSelf,
    /// Login for a username nobody registered.
    #[error("User not found")]
    InvalidCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("Post not found")]
    PostNotFound,
    #[error("Not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) | ApiError::UsernameTaken | ApiError::CannotFollowSelf => {
                StatusCode::BAD_REQUEST
            }
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::UserNotFound | ApiError::PostNotFound | ApiError::NotFound => {
                StatusCode::NOT_FOUND
            }
        }
    }
}

/// Every failure leaves the request untouched and answers `{"error": "..."}`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        warn!(%status, error = %message, "Request failed");

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}

/// The first rule message wins; all presence rules on one request share a message.
impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| errors.to_string());

        ApiError::ValidationError(message)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::ValidationError(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::ValidationError(rejection.body_text())
    }
}

// A path id that is not a number can never name a stored entity.
impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_the_error_taxonomy() {
        assert_eq!(
            ApiError::ValidationError("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::UsernameTaken.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::CannotFollowSelf.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::PostNotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_message_is_the_rule_message() {
        use crate::dto::RegisterRequest;
        use validator::Validate;

        let request = RegisterRequest {
            username: Some(String::new()),
        };
        let err: ApiError = request.validate().unwrap_err().into();
        assert_eq!(err.to_string(), "Username is required");
    }
}
