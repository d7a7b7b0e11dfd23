use serde::Serialize;
use sqlx::FromRow;

// which Rust types correspond to which sqlite column types:
// https://docs.rs/sqlx/latest/sqlx/sqlite/types/index.html
#[derive(Debug, Serialize, FromRow, Clone, PartialEq)]
pub struct PostRow {
    pub id: i64,
    pub title: String,
    pub content: String,
}

/// A post together with the names of the tags it is associated with.
#[derive(Debug, Serialize, Clone)]
pub struct Post {
    #[serde(flatten)]
    pub row: PostRow,

    pub tags: Vec<String>,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self { row, tags: vec![] }
    }
}

#[derive(Debug)]
pub struct PostCreate {
    pub title: String,
    pub content: String,
}
