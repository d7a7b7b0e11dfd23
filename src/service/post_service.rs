use crate::errors::{AppError, AppResult};
use crate::model::post::{Post, PostCreate, PostRow};
use sqlx::{query, query_as, SqlitePool};
use std::collections::HashMap;

impl Post {
    /// All posts in insertion order, with their tags.
    pub async fn find_all(pool: &SqlitePool) -> AppResult<Vec<Post>> {
        let mut posts: Vec<Post> = query_as::<_, PostRow>("SELECT * FROM post ORDER BY id")
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(Post::from)
            .collect();

        Self::attach_tags(pool, &mut posts).await?;

        Ok(posts)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> AppResult<Option<PostRow>> {
        Ok(query_as::<_, PostRow>("SELECT * FROM post WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?)
    }

    pub async fn find_with_tags(pool: &SqlitePool, id: i64) -> AppResult<Post> {
        let row = Post::find_by_id(pool, id).await?.ok_or(post_not_found())?;
        let mut post = Post::from(row);

        Self::attach_tags(pool, std::slice::from_mut(&mut post)).await?;

        Ok(post)
    }

    /// Posts associated with the given tag, in insertion order, with all of their tags.
    pub async fn find_by_tag(pool: &SqlitePool, tag_id: i64) -> AppResult<Vec<Post>> {
        let mut posts: Vec<Post> = query_as::<_, PostRow>(
            r#"
            SELECT p.*
            FROM post p
            INNER JOIN post_tag pt ON pt.post_id = p.id
            WHERE pt.tag_id = ?
            ORDER BY p.id
            "#,
        )
        .bind(tag_id)
        .fetch_all(pool)
        .await?
        .into_iter()
        .map(Post::from)
        .collect();

        Self::attach_tags(pool, &mut posts).await?;

        Ok(posts)
    }

    pub async fn create(pool: &SqlitePool, post: &PostCreate) -> AppResult<PostRow> {
        let row = query_as::<_, PostRow>(
            r#"
            INSERT INTO post (title, content)
            VALUES (?, ?)
            RETURNING *
            "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    /// Associates a post with a tag. Associating the same pair twice is a no-op.
    pub async fn add_tag(pool: &SqlitePool, post_id: i64, tag_id: i64) -> AppResult<()> {
        query("INSERT OR IGNORE INTO post_tag (post_id, tag_id) VALUES (?, ?)")
            .bind(post_id)
            .bind(tag_id)
            .execute(pool)
            .await?;

        Ok(())
    }

    async fn attach_tags(pool: &SqlitePool, posts: &mut [Post]) -> AppResult<()> {
        if posts.is_empty() {
            return Ok(());
        }

        let post_ids: Vec<i64> = posts.iter().map(|post| post.row.id).collect();
        let post_ids = serde_json::to_string(&post_ids).map_err(anyhow::Error::from)?;

        let rows: Vec<(i64, String)> = query_as(
            r#"
            SELECT pt.post_id, tag.name
            FROM post_tag AS pt
            INNER JOIN tag ON pt.tag_id = tag.id
            WHERE pt.post_id IN (SELECT value FROM json_each(?1))
            ORDER BY tag.name
            "#,
        )
        .bind(post_ids)
        .fetch_all(pool)
        .await?;

        let mut tags: HashMap<i64, Vec<String>> = HashMap::new();
        for (post_id, tag_name) in rows {
            tags.entry(post_id).or_default().push(tag_name);
        }

        for post in posts {
            post.tags = tags.remove(&post.row.id).unwrap_or_default();
        }

        Ok(())
    }
}

fn post_not_found() -> AppError {
    AppError::NotFound("post not found".to_owned())
}
