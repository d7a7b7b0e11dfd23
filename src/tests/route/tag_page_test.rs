#[cfg(test)]
mod tests {
    use crate::tests::support::{body_text, TestApp};
    use axum::http::StatusCode;
    use simpleblog::model::post::Post;
    use simpleblog::model::tag::Tag;

    #[tokio::test]
    async fn test_tag_not_found() {
        let app = TestApp::new().await;
        Tag::create(&app.state.db, "rust").await.unwrap();

        assert_eq!(app.get("/tags/python/").await.status(), StatusCode::NOT_FOUND);
        assert_eq!(app.get("/tags/Rust/").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tag_item() {
        let app = TestApp::new().await;
        let tagged = app.create_post("Tagged post", "yes").await;
        app.create_post("Untagged post", "no").await;
        let tag = Tag::create(&app.state.db, "rust").await.unwrap();
        Post::add_tag(&app.state.db, tagged.id, tag.id).await.unwrap();

        let response = app.get("/tags/rust/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("Tagged post"));
        assert!(!body.contains("Untagged post"));
    }

    #[tokio::test]
    async fn test_tag_without_posts() {
        let app = TestApp::new().await;
        Tag::create(&app.state.db, "empty").await.unwrap();

        let response = app.get("/tags/empty/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("No posts with this tag."));
    }

    #[tokio::test]
    async fn test_tag_name_is_percent_decoded() {
        let app = TestApp::new().await;
        let post = app.create_post("Spaced", "content").await;
        let tag = Tag::create(&app.state.db, "hello world").await.unwrap();
        Post::add_tag(&app.state.db, post.id, tag.id).await.unwrap();

        let response = app.get("/tags/hello%20world/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Spaced"));
    }
}
