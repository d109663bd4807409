mod post;
mod user;

pub use post::{Comment, CommentId, Post, PostId};
pub use user::{User, UserId};
