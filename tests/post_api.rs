//! Post API integration tests
//!
//! Submission with cover upload, listing and lookup through the full router.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::path::Path;

use common::TestApp;

#[tokio::test]
async fn test_full_publish_flow() {
    let app = TestApp::new().await;
    let cookie = app.session("alice", "secret1").await;

    let response = app.submit_post(Some(cookie), "Hi", "photo.JPG").await;

    response.assert_status_ok();
    let created: Value = response.json();
    assert_eq!(created["title"], "Hi");
    assert_eq!(created["summary"], "Hi summary");
    assert!(created["createdAt"].is_string());

    let cover = created["cover"].as_str().unwrap();
    assert!(cover.ends_with(".JPG"), "cover was {}", cover);
    assert!(Path::new(cover).exists());
    assert!(Path::new(cover).starts_with(app.upload_dir.path()));

    let listed: Vec<Value> = app.server.get("/post").await.json();
    assert_eq!(listed[0]["id"], created["id"]);
    assert_eq!(listed[0]["author"]["username"], "alice");
}

#[tokio::test]
async fn test_created_post_carries_author_id() {
    let app = TestApp::new().await;
    let cookie = app.session("alice", "secret1").await;
    let profile: Value = app.server.get("/profile").add_cookie(cookie.clone()).await.json();

    let created: Value = app.submit_post(Some(cookie), "Hi", "a.png").await.json();

    assert_eq!(created["author"], profile["id"]);
}

#[tokio::test]
async fn test_uploaded_cover_is_served() {
    let app = TestApp::new().await;
    let cookie = app.session("alice", "secret1").await;
    let created: Value = app.submit_post(Some(cookie), "Hi", "photo.png").await.json();

    let cover = Path::new(created["cover"].as_str().unwrap());
    let file_name = cover.file_name().unwrap().to_str().unwrap();

    let response = app.server.get(&format!("/uploads/{}", file_name)).await;
    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"\x89PNG fake image");
}

#[tokio::test]
async fn test_submit_without_cookie_is_rejected() {
    let app = TestApp::new().await;

    let response = app.submit_post(None, "Hi", "photo.JPG").await;

    assert_error_response!(response, StatusCode::BAD_REQUEST, "Invalid token");
    let posts: Vec<Value> = app.server.get("/post").await.json();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_submit_with_forged_cookie_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .submit_post(Some(cookie::Cookie::new("token", "forged")), "Hi", "photo.JPG")
        .await;

    assert_error_response!(response, StatusCode::BAD_REQUEST, "Invalid token");
}

#[tokio::test]
async fn test_submit_without_cover() {
    let app = TestApp::new().await;
    let cookie = app.session("alice", "secret1").await;

    let form = axum_test::multipart::MultipartForm::new().add_text("title", "Hi");
    let response = app.server.post("/post").add_cookie(cookie).multipart(form).await;

    assert_error_response!(response, StatusCode::BAD_REQUEST, "Missing required field: files");
}

#[tokio::test]
async fn test_submit_json_instead_of_multipart_is_json_error() {
    let app = TestApp::new().await;
    let cookie = app.session("alice", "secret1").await;

    let response = app
        .server
        .post("/post")
        .add_cookie(cookie)
        .json(&serde_json::json!({ "title": "Hi" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], 400);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_list_is_newest_first_and_capped() {
    let app = TestApp::new().await;
    let cookie = app.session("alice", "secret1").await;

    for i in 0..22 {
        app.submit_post(Some(cookie.clone()), &format!("post-{}", i), "c.png")
            .await
            .assert_status_ok();
    }

    let listed: Vec<Value> = app.server.get("/post").await.json();
    assert_eq!(listed.len(), 20);
    assert_eq!(listed[0]["title"], "post-21");
    assert_eq!(listed[19]["title"], "post-2");
}

#[tokio::test]
async fn test_get_post_by_id() {
    let app = TestApp::new().await;
    let cookie = app.session("alice", "secret1").await;
    let created: Value = app.submit_post(Some(cookie), "Hi", "a.png").await.json();

    let id = created["id"].as_str().unwrap();
    let fetched: Value = app.server.get(&format!("/post/{}", id)).await.json();

    assert_eq!(fetched["title"], "Hi");
    assert_eq!(fetched["createdAt"], created["createdAt"]);
    assert_eq!(fetched["author"], serde_json::json!({ "username": "alice" }));
}

#[tokio::test]
async fn test_get_post_not_found() {
    let app = TestApp::new().await;

    let response = app
        .server
        .get(&format!("/post/{}", uuid::Uuid::new_v4()))
        .await;
    assert_error_response!(response, StatusCode::NOT_FOUND, "Post not found");

    let response = app.server.get("/post/not-a-uuid").await;
    assert_error_response!(response, StatusCode::NOT_FOUND, "Post not found");
}
