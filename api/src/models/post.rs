use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type PostId = u64;
pub type CommentId = u64;

/// A status update. `username` is the author's name at the time of posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub username: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub likes: BTreeSet<UserId>,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub username: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}
