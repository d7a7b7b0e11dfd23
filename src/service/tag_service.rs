use crate::errors::{AppError, AppResult};
use crate::model::tag::Tag;
use sqlx::{query_as, SqlitePool};

impl Tag {
    /// Names are unique, so an exact match resolves to at most one tag.
    pub async fn find_by_name(pool: &SqlitePool, name: &str) -> AppResult<Option<Tag>> {
        Ok(query_as::<_, Tag>("SELECT * FROM tag WHERE name = ?")
            .bind(name)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn get_by_name(pool: &SqlitePool, name: &str) -> AppResult<Tag> {
        Tag::find_by_name(pool, name).await?.ok_or(tag_not_found())
    }

    pub async fn create(pool: &SqlitePool, name: &str) -> AppResult<Tag> {
        let tag = query_as::<_, Tag>(
            r#"
            INSERT INTO tag (name)
            VALUES (?)
            RETURNING *
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(tag)
    }

    pub async fn find_or_create(pool: &SqlitePool, name: &str) -> AppResult<Tag> {
        let tag = if let Some(tag) = Tag::find_by_name(pool, name).await? {
            tag
        } else {
            Tag::create(pool, name).await?
        };
        Ok(tag)
    }
}

fn tag_not_found() -> AppError {
    AppError::NotFound("tag not found".to_owned())
}
