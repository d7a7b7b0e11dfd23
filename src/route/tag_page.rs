use crate::model::post::Post;
use crate::model::tag::Tag;
use crate::route::{render, HtmlResult, Templates};
use crate::util::extractor::Path;
use crate::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Extension, Router};
use minijinja::context;

pub fn create_routes() -> Router<AppState> {
    Router::new().route("/tags/{tag_name}/", get(tag_item))
}

async fn tag_item(
    State(state): State<AppState>,
    Path(tag_name): Path<String>,
    Extension(env): Extension<Templates>,
) -> HtmlResult {
    let tag = Tag::get_by_name(&state.db, &tag_name).await?;
    let posts = Post::find_by_tag(&state.db, tag.id).await?;

    render(&env, "tag.html", context! { tag, posts })
}
