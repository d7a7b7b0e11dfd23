use crate::errors::AppResult;
use crate::model::comment::Comment;
use crate::route::{post_url, render, HtmlResult, Templates};
use crate::util::extractor::Path;
use crate::AppState;
use axum::extract::State;
use axum::response::Redirect;
use axum::routing::{get, post};
use axum::{Extension, Router};
use minijinja::context;
use tracing::info;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/comments/", get(comment_list))
        .route("/comments/{comment_id}/delete", post(delete_comment))
}

async fn comment_list(State(state): State<AppState>, Extension(env): Extension<Templates>) -> HtmlResult {
    let comments = Comment::find_all_newest_first(&state.db).await?;

    render(&env, "comments.html", context! { comments })
}

async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<i64>,
) -> AppResult<Redirect> {
    let post_id = Comment::delete(&state.db, comment_id).await?;
    info!("comment {} deleted from post {}", comment_id, post_id);

    Ok(Redirect::to(&post_url(post_id)))
}
