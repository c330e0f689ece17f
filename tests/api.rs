use axum_test::TestServer;
use blog_api::{
    http::{router, AppState},
    Article, ArticleStore, Comment,
};
use http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn server(store: ArticleStore) -> TestServer {
    TestServer::new(router(AppState::new(store))).unwrap()
}

#[tokio::test]
async fn test_get_unseen_article() {
    let state = AppState::new(ArticleStore::new());
    let server = TestServer::new(router(state.clone())).unwrap();

    for _ in 0..2 {
        let response = server.get("/api/articles/learn-react").await;

        response.assert_status_ok();
        response.assert_json(&json!({ "upvotes": 0, "comments": [] }));
    }

    assert!(!state.store.contains("learn-react").await);
}

#[tokio::test]
async fn test_upvote_twice() {
    let server = server(ArticleStore::new());

    server.post("/api/articles/new-post/upvote").await.assert_status_ok();
    let response = server.post("/api/articles/new-post/upvote").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "upvotes": 2, "comments": [] }));

    let article: Article = server.get("/api/articles/new-post").await.json();
    assert_eq!(article, Article::new(2, Vec::new()));
}

#[tokio::test]
async fn test_add_comment_to_unseen_article() {
    let server = server(ArticleStore::new());

    let response = server
        .post("/api/articles/new-post/add-comment")
        .json(&json!({ "username": "Alice", "text": "Nice!" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "upvotes": 0,
        "comments": [{ "username": "Alice", "text": "Nice!" }]
    }));
}

#[tokio::test]
async fn test_comments_keep_order() {
    let server = server(ArticleStore::new());

    for (username, text) in [("a", "one"), ("b", "two"), ("c", "three")] {
        server
            .post("/api/articles/thread/add-comment")
            .json(&json!({ "username": username, "text": text }))
            .await
            .assert_status_ok();
    }

    let article: Article = server.get("/api/articles/thread").await.json();
    assert_eq!(
        article.comments,
        vec![
            Comment::new("a", "one"),
            Comment::new("b", "two"),
            Comment::new("c", "three"),
        ]
    );
}

#[tokio::test]
async fn test_add_comment_with_missing_fields() {
    let server = server(ArticleStore::new());

    let response = server
        .post("/api/articles/quiet/add-comment")
        .json(&json!({}))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "upvotes": 0,
        "comments": [{ "username": "", "text": "" }]
    }));
}

#[tokio::test]
async fn test_malformed_comment_body_is_rejected() {
    let server = server(ArticleStore::new());

    let response = server
        .post("/api/articles/broken/add-comment")
        .text("{\"username\": ")
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].is_string());

    let article: Article = server.get("/api/articles/broken").await.json();
    assert_eq!(article, Article::default());
}

#[tokio::test]
async fn test_add_comment_without_body() {
    let server = server(ArticleStore::new());

    let response = server.post("/api/articles/silent/add-comment").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "upvotes": 0,
        "comments": [{ "username": "", "text": "" }]
    }));
}

#[tokio::test]
async fn test_add_comment_with_empty_json_body() {
    let server = server(ArticleStore::new());

    let response = server
        .post("/api/articles/silent/add-comment")
        .text("")
        .content_type("application/json")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Article>().comments, vec![Comment::new("", "")]);
}

#[tokio::test]
async fn test_add_comment_ignores_non_json_body() {
    let server = server(ArticleStore::new());

    let response = server
        .post("/api/articles/plain/add-comment")
        .text("username=Alice&text=hello")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Article>().comments, vec![Comment::new("", "")]);
}

#[tokio::test]
async fn test_add_comment_with_null_and_non_string_fields() {
    let server = server(ArticleStore::new());

    server
        .post("/api/articles/odd/add-comment")
        .json(&json!({ "username": null, "text": "hi" }))
        .await
        .assert_status_ok();
    let response = server
        .post("/api/articles/odd/add-comment")
        .json(&json!({ "username": 7, "text": false }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "upvotes": 0,
        "comments": [
            { "username": "", "text": "hi" },
            { "username": "7", "text": "false" }
        ]
    }));
}

#[tokio::test]
async fn test_seeded_articles() {
    let server = server(ArticleStore::with_demo_articles());

    let response = server.post("/api/articles/learn-node/upvote").await;

    response.assert_json(&json!({
        "upvotes": 16,
        "comments": [{ "username": "Mike Johnson", "text": "Excellent tutorial" }]
    }));
}

#[tokio::test]
async fn test_health() {
    let server = server(ArticleStore::new());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "OK");

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(timestamp.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}
