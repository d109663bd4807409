use crate::models::{Post, User, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Public summary of a user plus their own posts, newest first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: UserId,
    pub username: String,
    pub followers_count: usize,
    pub following_count: usize,
    pub joined_at: DateTime<Utc>,
    /// Only present when the request names a viewer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_following: Option<bool>,
    pub posts: Vec<Post>,
}

impl ProfileResponse {
    pub fn new(user: &User, viewer: Option<UserId>, posts: Vec<Post>) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            followers_count: user.followers.len(),
            following_count: user.following.len(),
            joined_at: user.joined_at,
            is_following: viewer.map(|viewer| user.followers.contains(&viewer)),
            posts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowResponse {
    pub success: bool,
    pub is_following: bool,
    pub followers_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub likes: usize,
    pub is_liked: bool,
}
