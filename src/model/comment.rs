use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
}

/// A comment joined with the title of the post it belongs to, for the global comment feed.
#[derive(Debug, Serialize, FromRow)]
pub struct CommentWithPost {
    pub id: i64,
    pub content: String,
    pub post_id: i64,
    pub post_title: String,
}

/// Body of the comment form on a post page.
#[derive(Debug, Deserialize)]
pub struct CommentCreate {
    pub content: String,
}
