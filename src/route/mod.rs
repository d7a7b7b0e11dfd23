use crate::config::AppConfig;
use crate::errors::AppError;
use crate::AppState;
use axum::response::Html;
use axum::{Extension, Router};
#[cfg(not(debug_assertions))]
use include_dir::{include_dir, Dir};
use minijinja::{Environment, Value};
use std::sync::Arc;

pub mod comment_page;
pub mod post_page;
pub mod tag_page;

pub type HtmlResult = Result<Html<String>, AppError>;

/// The template environment shared by every page handler.
pub type Templates = Arc<Environment<'static>>;

pub fn create_routes(config: &AppConfig) -> Router<AppState> {
    let mut env = Environment::new();
    load_templates(&mut env);
    env.add_global("app_name", config.app_name.clone());
    env.add_global("static_url", config.static_url.clone());

    Router::new()
        .merge(post_page::create_routes())
        .merge(comment_page::create_routes())
        .merge(tag_page::create_routes())
        .layer(Extension(Arc::new(env)))
}

pub(crate) fn render(env: &Environment<'_>, name: &str, ctx: Value) -> HtmlResult {
    let template = env.get_template(name)?;
    Ok(Html(template.render(ctx)?))
}

pub(crate) fn post_url(post_id: i64) -> String {
    format!("/{}/", post_id)
}

#[cfg(not(debug_assertions))]
static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

#[cfg(debug_assertions)]
fn load_templates(env: &mut Environment<'static>) {
    use minijinja::path_loader;
    // In development mode, use the file system to load templates in real-time
    env.set_loader(path_loader("templates"));
}

#[cfg(not(debug_assertions))]
fn load_templates(env: &mut Environment<'static>) {
    // In production mode, load templates from the embedded files using include_dir
    for file in TEMPLATES_DIR.files() {
        // file.path() is relative to templates/, e.g. "index.html"
        let (Some(name), Some(content)) = (file.path().to_str(), file.contents_utf8()) else {
            tracing::warn!("skipping template with a non utf-8 name or content: {:?}", file.path());
            continue;
        };
        if let Err(e) = env.add_template(name, content) {
            tracing::error!("failed to add template {}: {}", name, e);
        }
    }
}
