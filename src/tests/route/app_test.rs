#[cfg(test)]
mod tests {
    use crate::tests::support::{body_text, TestApp};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_unknown_route() {
        let app = TestApp::new().await;

        let response = app.get("/no/such/page").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("404"));
    }

    #[tokio::test]
    async fn test_missing_trailing_slash() {
        let app = TestApp::new().await;
        app.create_post("Hello", "content").await;

        assert_eq!(app.get("/1").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let app = TestApp::new().await;

        let response = app.post_form("/comments/", "").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_static_files() {
        let app = TestApp::new().await;

        assert_eq!(app.get("/static/style.css").await.status(), StatusCode::OK);
        assert_eq!(app.get("/static/missing.css").await.status(), StatusCode::NOT_FOUND);
    }
}
