#[cfg(test)]
mod tests {
    use crate::tests::support::{body_text, comment_count, location, TestApp};
    use axum::http::StatusCode;
    use simpleblog::model::comment::Comment;

    #[tokio::test]
    async fn test_comment_list_newest_first() {
        let app = TestApp::new().await;
        let first = app.create_post("First", "one").await;
        let second = app.create_post("Second", "two").await;

        for (post_id, content) in [(first.id, "a"), (second.id, "b"), (first.id, "c")] {
            Comment::create(&app.state.db, post_id, content).await.unwrap();
        }

        let response = app.get("/comments/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        let positions: Vec<usize> = (1..=3)
            .map(|id| body.find(&format!("id=\"comment-{}\"", id)).unwrap())
            .collect();
        assert!(positions[2] < positions[1]);
        assert!(positions[1] < positions[0]);
        assert!(body.contains("First"));
        assert!(body.contains("Second"));
    }

    #[tokio::test]
    async fn test_comment_list_empty() {
        let app = TestApp::new().await;

        let response = app.get("/comments/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("No comments yet."));
    }

    #[tokio::test]
    async fn test_delete_comment() {
        let app = TestApp::new().await;
        let post = app.create_post("Hello", "Some content").await;
        let keep = Comment::create(&app.state.db, post.id, "Keep me").await.unwrap();
        let gone = Comment::create(&app.state.db, post.id, "Delete me").await.unwrap();

        let response = app
            .post_form(&format!("/comments/{}/delete", gone.id), "")
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), format!("/{}/", post.id));

        let comments = Comment::find_by_post(&app.state.db, post.id).await.unwrap();
        assert_eq!(comments, vec![keep]);

        let body = body_text(app.get(&format!("/{}/", post.id)).await).await;
        assert!(body.contains("Keep me"));
        assert!(!body.contains("Delete me"));
    }

    #[tokio::test]
    async fn test_delete_missing_comment() {
        let app = TestApp::new().await;

        let response = app.post_form("/comments/5/delete", "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app.post_form("/comments/abc/delete", "").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_comment_twice() {
        let app = TestApp::new().await;
        let post = app.create_post("Hello", "Some content").await;
        let comment = Comment::create(&app.state.db, post.id, "once").await.unwrap();
        let uri = format!("/comments/{}/delete", comment.id);

        assert_eq!(app.post_form(&uri, "").await.status(), StatusCode::SEE_OTHER);
        assert_eq!(app.post_form(&uri, "").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_requires_post() {
        let app = TestApp::new().await;
        let post = app.create_post("Hello", "Some content").await;
        let comment = Comment::create(&app.state.db, post.id, "stay").await.unwrap();

        let response = app.get(&format!("/comments/{}/delete", comment.id)).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let count = comment_count(&app, post.id).await;
        assert_eq!(count, 1);
    }
}
