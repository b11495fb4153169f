//! Post API integration tests
//!
//! Tests for posts, likes and comments through the HTTP surface.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::assertions::assert_error;
use crate::common::TestApp;

struct Fixture {
    app: TestApp,
    ada: String,
    bob: String,
}

async fn fixture() -> Fixture {
    let app = TestApp::new().await;
    let ada = app.register("Ada", "ada@example.com", "password123").await;
    let bob = app.register("Bob", "bob@example.com", "password123").await;
    Fixture { app, ada, bob }
}

#[tokio::test]
async fn test_posts_require_token() {
    let app = TestApp::new().await;

    let response = app.server.get("/api/posts").await;

    assert_error(&response, StatusCode::UNAUTHORIZED, "No token, authorization denied");
}

#[tokio::test]
async fn test_create_post_snapshots_author() {
    let f = fixture().await;

    let post = f.app.create_post(&f.ada, "Hello world").await;

    assert_eq!(post["text"], "Hello world");
    assert_eq!(post["name"], "Ada");
    assert_eq!(post["likes"], json!([]));
    assert_eq!(post["comments"], json!([]));
    assert!(post["avatar"].as_str().unwrap().starts_with("//www.gravatar.com/avatar/"));
}

#[tokio::test]
async fn test_create_post_requires_text() {
    let f = fixture().await;

    let response = f
        .app
        .server
        .post("/api/posts")
        .authorization_bearer(&f.ada)
        .json(&json!({ "text": "   " }))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Text is required");
}

#[tokio::test]
async fn test_create_post_wrongly_typed_text() {
    let f = fixture().await;

    let response = f
        .app
        .server
        .post("/api/posts")
        .authorization_bearer(&f.ada)
        .json(&json!({ "text": ["not", "a", "string"] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"][0]["field"], "body");
}

#[tokio::test]
async fn test_list_posts_newest_first() {
    let f = fixture().await;
    for text in ["first", "second", "third"] {
        f.app.create_post(&f.ada, text).await;
    }

    let response = f.app.server.get("/api/posts").authorization_bearer(&f.bob).await;

    response.assert_status_ok();
    let posts: Vec<Value> = response.json();
    let texts: Vec<&str> = posts.iter().map(|p| p["text"].as_str().unwrap()).collect();
    assert_eq!(texts, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_get_post_by_id() {
    let f = fixture().await;
    let post = f.app.create_post(&f.ada, "findable").await;
    let id = post["id"].as_str().unwrap();

    let response = f
        .app
        .server
        .get(&format!("/api/posts/{id}"))
        .authorization_bearer(&f.bob)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), post);
}

#[tokio::test]
async fn test_get_post_malformed_and_absent_ids() {
    let f = fixture().await;

    let malformed = f
        .app
        .server
        .get("/api/posts/not-a-uuid")
        .authorization_bearer(&f.ada)
        .await;
    let absent = f
        .app
        .server
        .get(&format!("/api/posts/{}", Uuid::new_v4()))
        .authorization_bearer(&f.ada)
        .await;

    assert_error(&malformed, StatusCode::NOT_FOUND, "Post not found");
    assert_error(&absent, StatusCode::NOT_FOUND, "Post not found");
}

#[tokio::test]
async fn test_delete_post_owner_and_non_owner() {
    let f = fixture().await;
    let post = f.app.create_post(&f.ada, "mine").await;
    let path = format!("/api/posts/{}", post["id"].as_str().unwrap());

    let forbidden = f.app.server.delete(&path).authorization_bearer(&f.bob).await;
    assert_error(&forbidden, StatusCode::FORBIDDEN, "User not authorized");

    let still_there = f.app.server.get(&path).authorization_bearer(&f.ada).await;
    still_there.assert_status_ok();

    let deleted = f.app.server.delete(&path).authorization_bearer(&f.ada).await;
    deleted.assert_status_ok();
    assert_eq!(deleted.json::<Value>()["id"], post["id"]);

    let again = f.app.server.delete(&path).authorization_bearer(&f.ada).await;
    assert_error(&again, StatusCode::NOT_FOUND, "Post not found");
}

#[tokio::test]
async fn test_like_and_unlike_cycle() {
    let f = fixture().await;
    let post = f.app.create_post(&f.ada, "like me").await;
    let id = post["id"].as_str().unwrap();
    let like = format!("/api/posts/like/{id}");
    let unlike = format!("/api/posts/unlike/{id}");

    let not_yet = f.app.server.put(&unlike).authorization_bearer(&f.bob).await;
    assert_error(&not_yet, StatusCode::BAD_REQUEST, "Post has not yet been liked");

    let liked = f.app.server.put(&like).authorization_bearer(&f.bob).await;
    liked.assert_status_ok();
    let likes: Vec<Value> = liked.json();
    assert_eq!(likes.len(), 1);

    let twice = f.app.server.put(&like).authorization_bearer(&f.bob).await;
    assert_error(&twice, StatusCode::BAD_REQUEST, "Post already liked");

    let also = f.app.server.put(&like).authorization_bearer(&f.ada).await;
    let likes: Vec<Value> = also.json();
    assert_eq!(likes.len(), 2);

    let unliked = f.app.server.put(&unlike).authorization_bearer(&f.bob).await;
    unliked.assert_status_ok();
    let likes: Vec<Value> = unliked.json();
    assert_eq!(likes.len(), 1);
}

#[tokio::test]
async fn test_comment_and_remove_comment() {
    let f = fixture().await;
    let post = f.app.create_post(&f.ada, "discuss").await;
    let id = post["id"].as_str().unwrap();

    let response = f
        .app
        .server
        .post(&format!("/api/posts/comment/{id}"))
        .authorization_bearer(&f.bob)
        .json(&json!({ "text": "Nice post" }))
        .await;
    response.assert_status_ok();
    let comments: Vec<Value> = response.json();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["name"], "Bob");
    let comment_id = comments[0]["id"].as_str().unwrap().to_string();
    let path = format!("/api/posts/comment/{id}/{comment_id}");

    let forbidden = f.app.server.delete(&path).authorization_bearer(&f.ada).await;
    assert_error(&forbidden, StatusCode::FORBIDDEN, "User not authorized");

    let removed = f.app.server.delete(&path).authorization_bearer(&f.bob).await;
    removed.assert_status_ok();
    assert_eq!(removed.json::<Vec<Value>>().len(), 0);

    let missing = f.app.server.delete(&path).authorization_bearer(&f.bob).await;
    assert_error(&missing, StatusCode::NOT_FOUND, "Comment does not exist");
}

#[tokio::test]
async fn test_comment_requires_text() {
    let f = fixture().await;
    let post = f.app.create_post(&f.ada, "discuss").await;

    let response = f
        .app
        .server
        .post(&format!("/api/posts/comment/{}", post["id"].as_str().unwrap()))
        .authorization_bearer(&f.bob)
        .json(&json!({}))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, "Text is required");
}
