use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub type UserId = u64;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub joined_at: DateTime<Utc>,
    pub followers: BTreeSet<UserId>,
    pub following: BTreeSet<UserId>,
}

impl User {
    pub fn new(id: UserId, username: String) -> Self {
        Self {
            id,
            username,
            joined_at: Utc::now(),
            followers: BTreeSet::new(),
            following: BTreeSet::new(),
        }
    }

    /// Usernames are unique ignoring case.
    pub fn has_username(&self, username: &str) -> bool {
        self.username.to_lowercase() == username.to_lowercase()
    }
}
