//! Profile API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::assertions::{assert_error, error_fields};
use crate::common::TestApp;

fn profile_body(status: &str) -> Value {
    json!({
        "status": status,
        "skills": "rust, sql ,  axum",
        "company": "Acme",
        "githubusername": "ada",
        "twitter": "https://twitter.com/ada",
    })
}

async fn app_with_profile() -> (TestApp, String) {
    let app = TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "password123").await;
    app.server
        .post("/api/profile")
        .authorization_bearer(&token)
        .json(&profile_body("Developer"))
        .await
        .assert_status_ok();
    (app, token)
}

#[tokio::test]
async fn test_me_without_profile() {
    let app = TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "password123").await;

    let response = app.server.get("/api/profile/me").authorization_bearer(&token).await;

    assert_error(&response, StatusCode::NOT_FOUND, "There is no profile for this user");
}

#[tokio::test]
async fn test_upsert_and_read_profile() {
    let (app, token) = app_with_profile().await;

    let response = app.server.get("/api/profile/me").authorization_bearer(&token).await;

    response.assert_status_ok();
    let profile: Value = response.json();
    assert_eq!(profile["status"], "Developer");
    assert_eq!(profile["skills"], json!(["rust", "sql", "axum"]));
    assert_eq!(profile["githubusername"], "ada");
    assert_eq!(profile["social"]["twitter"], "https://twitter.com/ada");
    assert_eq!(profile["name"], "Ada");
}

#[tokio::test]
async fn test_upsert_requires_status_and_skills() {
    let app = TestApp::new().await;
    let token = app.register("Ada", "ada@example.com", "password123").await;

    let response = app
        .server
        .post("/api/profile")
        .authorization_bearer(&token)
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(error_fields(&response), vec!["skills", "status"]);
}

#[tokio::test]
async fn test_public_profile_routes() {
    let (app, token) = app_with_profile().await;
    let me: Value = app.server.get("/api/auth").authorization_bearer(&token).await.json();
    let user_id = me["id"].as_str().unwrap();

    let list = app.server.get("/api/profile").await;
    list.assert_status_ok();
    assert_eq!(list.json::<Vec<Value>>().len(), 1);

    let by_user = app.server.get(&format!("/api/profile/user/{user_id}")).await;
    by_user.assert_status_ok();
    assert_eq!(by_user.json::<Value>()["user"], user_id);

    let absent = app.server.get(&format!("/api/profile/user/{}", Uuid::new_v4())).await;
    assert_error(&absent, StatusCode::NOT_FOUND, "Profile not found");

    let malformed = app.server.get("/api/profile/user/xyz").await;
    assert_error(&malformed, StatusCode::NOT_FOUND, "Profile not found");
}

#[tokio::test]
async fn test_profile_writes_require_token() {
    let app = TestApp::new().await;

    let upsert = app.server.post("/api/profile").json(&profile_body("Developer")).await;
    let delete = app.server.delete("/api/profile").await;

    assert_eq!(upsert.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(delete.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_experience_add_and_remove() {
    let (app, token) = app_with_profile().await;

    let added = app
        .server
        .put("/api/profile/experience")
        .authorization_bearer(&token)
        .json(&json!({ "title": "Engineer", "company": "Acme", "from": "2020-01-01", "current": true }))
        .await;
    added.assert_status_ok();
    let profile: Value = added.json();
    let exp_id = profile["experience"][0]["id"].as_str().unwrap().to_string();

    let removed = app
        .server
        .delete(&format!("/api/profile/experience/{exp_id}"))
        .authorization_bearer(&token)
        .await;
    removed.assert_status_ok();
    assert_eq!(removed.json::<Value>()["experience"], json!([]));

    let missing = app
        .server
        .delete(&format!("/api/profile/experience/{exp_id}"))
        .authorization_bearer(&token)
        .await;
    assert_error(&missing, StatusCode::NOT_FOUND, "Experience does not exist");
}

#[tokio::test]
async fn test_education_validation_and_add() {
    let (app, token) = app_with_profile().await;

    let invalid = app
        .server
        .put("/api/profile/education")
        .authorization_bearer(&token)
        .json(&json!({ "school": "MIT" }))
        .await;
    assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);

    let added = app
        .server
        .put("/api/profile/education")
        .authorization_bearer(&token)
        .json(&json!({
            "school": "MIT",
            "degree": "BSc",
            "fieldofstudy": "Computer Science",
            "from": "2015-09-01",
            "to": "2019-06-01",
        }))
        .await;
    added.assert_status_ok();
    let profile: Value = added.json();
    assert_eq!(profile["education"][0]["fieldofstudy"], "Computer Science");
}

#[tokio::test]
async fn test_delete_account_removes_user_profile_and_posts() {
    let (app, token) = app_with_profile().await;
    app.create_post(&token, "soon gone").await;

    let response = app.server.delete("/api/profile").authorization_bearer(&token).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "msg": "User deleted" }));

    let me = app.server.get("/api/auth").authorization_bearer(&token).await;
    assert_eq!(me.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(app.server.get("/api/profile").await.json::<Vec<Value>>().len(), 0);

    let other = app.register("Bob", "bob@example.com", "password123").await;
    let posts: Vec<Value> = app.server.get("/api/posts").authorization_bearer(&other).await.json();
    assert!(posts.is_empty());
}
