use crate::errors::{AppError, AppResult};
use crate::model::comment::{Comment, CommentWithPost};
use sqlx::{query, query_as, SqlitePool};

impl Comment {
    pub async fn create(pool: &SqlitePool, post_id: i64, content: &str) -> AppResult<Comment> {
        let comment = query_as::<_, Comment>(
            r#"
            INSERT INTO comment (content, post_id)
            VALUES (?, ?)
            RETURNING *
            "#,
        )
        .bind(content)
        .bind(post_id)
        .fetch_one(pool)
        .await?;

        Ok(comment)
    }

    pub async fn find_by_post(pool: &SqlitePool, post_id: i64) -> AppResult<Vec<Comment>> {
        Ok(
            query_as::<_, Comment>("SELECT * FROM comment WHERE post_id = ? ORDER BY id")
                .bind(post_id)
                .fetch_all(pool)
                .await?,
        )
    }

    /// Every comment, newest first, with the title of its post.
    pub async fn find_all_newest_first(pool: &SqlitePool) -> AppResult<Vec<CommentWithPost>> {
        Ok(query_as::<_, CommentWithPost>(
            r#"
            SELECT c.id, c.content, c.post_id, p.title AS post_title
            FROM comment c
            INNER JOIN post p ON p.id = c.post_id
            ORDER BY c.id DESC
            "#,
        )
        .fetch_all(pool)
        .await?)
    }

    /// Deletes a comment and returns the id of the post it belonged to.
    /// The lookup and the delete share one transaction, which is committed before returning.
    pub async fn delete(pool: &SqlitePool, id: i64) -> AppResult<i64> {
        let mut tx = pool.begin().await?;

        let comment = query_as::<_, Comment>("SELECT * FROM comment WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(comment_not_found())?;

        query("DELETE FROM comment WHERE id = ?")
            .bind(comment.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(comment.post_id)
    }
}

fn comment_not_found() -> AppError {
    AppError::NotFound("comment not found".to_owned())
}
