use crate::{
    dto::{FollowResponse, LikeResponse, ProfileResponse},
    errors::ApiError,
    models::{Comment, CommentId, Post, PostId, User, UserId},
};
use chrono::Utc;
use tokio::sync::RwLock;

/// In-memory data store for users and posts.
///
/// All tables sit behind one lock. Writers hold it for the whole operation,
/// so a caller always reads its own writes and a follow toggle never shows
/// one side of the relation without the other.
#[derive(Debug, Default)]
pub struct Store {
    tables: RwLock<Tables>,
}

#[derive(Debug)]
struct Tables {
    users: Vec<User>,
    posts: Vec<Post>,
    next_user_id: UserId,
    next_post_id: PostId,
    next_comment_id: CommentId,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            posts: Vec::new(),
            next_user_id: 1,
            next_post_id: 1,
            next_comment_id: 1,
        }
    }
}

impl Tables {
    fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    fn user_index(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }

    fn user_by_name(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.has_username(username))
    }

    fn post_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|post| post.id == id)
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, username: &str) -> Result<User, ApiError> {
        let mut tables = self.tables.write().await;

        if tables.user_by_name(username).is_some() {
            return Err(ApiError::UsernameTaken);
        }

        let id = tables.next_user_id;
        tables.next_user_id += 1;

        let user = User::new(id, username.to_owned());
        tables.users.push(user.clone());

        Ok(user)
    }

    pub async fn login(&self, username: &str) -> Result<User, ApiError> {
        let tables = self.tables.read().await;

        tables
            .user_by_name(username)
            .cloned()
            .ok_or(ApiError::InvalidCredentials)
    }

    pub async fn profile(
        &self,
        id: UserId,
        viewer: Option<UserId>,
    ) -> Result<ProfileResponse, ApiError> {
        let tables = self.tables.read().await;
        let user = tables.user(id).ok_or(ApiError::UserNotFound)?;

        let posts = tables
            .posts
            .iter()
            .rev()
            .filter(|post| post.user_id == id)
            .cloned()
            .collect();

        Ok(ProfileResponse::new(user, viewer, posts))
    }

    /// Flips whether `follower` follows `target`, updating both users.
    pub async fn toggle_follow(
        &self,
        target: UserId,
        follower: UserId,
    ) -> Result<FollowResponse, ApiError> {
        if target == follower {
            return Err(ApiError::CannotFollowSelf);
        }

        let mut tables = self.tables.write().await;
        let (Some(target_idx), Some(follower_idx)) =
            (tables.user_index(target), tables.user_index(follower))
        else {
            return Err(ApiError::UserNotFound);
        };

        let was_following = tables.users[follower_idx].following.contains(&target);
        if was_following {
            tables.users[follower_idx].following.remove(&target);
            tables.users[target_idx].followers.remove(&follower);
        } else {
            tables.users[follower_idx].following.insert(target);
            tables.users[target_idx].followers.insert(follower);
        }

        Ok(FollowResponse {
            success: true,
            is_following: !was_following,
            followers_count: tables.users[target_idx].followers.len(),
        })
    }

    /// Number of registered users and stored posts.
    pub async fn counts(&self) -> (usize, usize) {
        let tables = self.tables.read().await;
        (tables.users.len(), tables.posts.len())
    }

    /// Every post, newest first.
    pub async fn feed(&self) -> Vec<Post> {
        let tables = self.tables.read().await;
        tables.posts.iter().rev().cloned().collect()
    }

    pub async fn create_post(&self, user_id: UserId, content: &str) -> Result<Post, ApiError> {
        let mut tables = self.tables.write().await;
        let username = tables
            .user(user_id)
            .map(|user| user.username.clone())
            .ok_or(ApiError::UserNotFound)?;

        let id = tables.next_post_id;
        tables.next_post_id += 1;

        let post = Post {
            id,
            user_id,
            username,
            content: content.to_owned(),
            timestamp: Utc::now(),
            likes: Default::default(),
            comments: Vec::new(),
        };
        tables.posts.push(post.clone());

        Ok(post)
    }

    /// Adds `user_id` to the post's likes, or removes it if already there.
    pub async fn toggle_like(
        &self,
        post_id: PostId,
        user_id: UserId,
    ) -> Result<LikeResponse, ApiError> {
        let mut tables = self.tables.write().await;
        if tables.user(user_id).is_none() {
            return Err(ApiError::UserNotFound);
        }
        let post = tables.post_mut(post_id).ok_or(ApiError::PostNotFound)?;

        let is_liked = if post.likes.remove(&user_id) {
            false
        } else {
            post.likes.insert(user_id);
            true
        };

        Ok(LikeResponse {
            likes: post.likes.len(),
            is_liked,
        })
    }

    /// An unknown post and an unknown author both answer the same "Not found".
    pub async fn add_comment(
        &self,
        post_id: PostId,
        user_id: UserId,
        text: &str,
    ) -> Result<Comment, ApiError> {
        let mut tables = self.tables.write().await;
        let username = tables
            .user(user_id)
            .map(|user| user.username.clone())
            .ok_or(ApiError::NotFound)?;

        let id = tables.next_comment_id;
        let post = tables.post_mut(post_id).ok_or(ApiError::NotFound)?;

        let comment = Comment {
            id,
            user_id,
            username,
            text: text.to_owned(),
            timestamp: Utc::now(),
        };
        post.comments.push(comment.clone());
        tables.next_comment_id += 1;

        Ok(comment)
    }
}
