use crate::errors::{not_found, AppError, AppResult};
use crate::model::comment::{Comment, CommentCreate};
use crate::model::post::Post;
use crate::route::{post_url, render, HtmlResult, Templates};
use crate::util::extractor::{Form, Path};
use crate::AppState;
use axum::extract::State;
use axum::response::Redirect;
use axum::routing::get;
use axum::{Extension, Router};
use minijinja::context;
use tracing::info;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(post_list))
        .route("/{post_id}/", get(post_item).post(add_comment))
}

async fn post_list(State(state): State<AppState>, Extension(env): Extension<Templates>) -> HtmlResult {
    let posts = Post::find_all(&state.db).await?;

    render(&env, "index.html", context! { posts })
}

async fn post_item(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    Extension(env): Extension<Templates>,
) -> HtmlResult {
    let post = Post::find_with_tags(&state.db, post_id).await?;
    let comments = Comment::find_by_post(&state.db, post.row.id).await?;

    render(&env, "post.html", context! { post, comments })
}

// POST-redirect-GET: reloading the post page must not submit the comment again.
// The form is only checked once the post is known to exist, so a missing post is always a 404.
async fn add_comment(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
    form: Result<Form<CommentCreate>, AppError>,
) -> AppResult<Redirect> {
    let post = Post::find_by_id(&state.db, post_id)
        .await?
        .ok_or(not_found("post not found"))?;
    let Form(form) = form?;

    let comment = Comment::create(&state.db, post.id, &form.content).await?;
    info!("comment {} added to post {}", comment.id, post.id);

    Ok(Redirect::to(&post_url(post.id)))
}
