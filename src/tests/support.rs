use axum::body::{to_bytes, Body};
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use simpleblog::config::db::DB;
use simpleblog::config::AppConfig;
use simpleblog::model::comment::Comment;
use simpleblog::model::post::{Post, PostCreate, PostRow};
use simpleblog::{create_app, AppState};
use tower::ServiceExt;

/// A router backed by its own in-memory database.
pub struct TestApp {
    pub state: AppState,
    router: Router,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = AppConfig::from_env().unwrap();
        let db = DB::in_memory().await.unwrap();
        let state = AppState::from_parts(config, db);
        let router = create_app(state.clone());

        TestApp { state, router }
    }

    pub async fn create_post(&self, title: &str, content: &str) -> PostRow {
        Post::create(
            &self.state.db,
            &PostCreate {
                title: title.to_string(),
                content: content.to_string(),
            },
        )
        .await
        .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_form(&self, uri: &str, form: &str) -> Response {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn comment_count(app: &TestApp, post_id: i64) -> usize {
    Comment::find_by_post(&app.state.db, post_id).await.unwrap().len()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}
