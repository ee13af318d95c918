//! Common test utilities and helpers
//!
//! - `TestApp`: the full router over an in-memory database and a
//!   temporary upload directory
//! - Authentication helpers
//! - Custom assertion macros

#![allow(dead_code)]

pub mod assertions;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};
use cookie::Cookie;
use serde_json::json;
use tempfile::TempDir;

use inkpost::backend::routes::create_router;
use inkpost::backend::server::build_state;
use inkpost::backend::server::config::connect_database;
use inkpost::shared::AppConfig;

pub const TEST_SECRET: &str = "integration-test-secret";

/// A running test server and the upload directory behind it
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let upload_dir = tempfile::tempdir().expect("Failed to create upload dir");
        let config = AppConfig::builder()
            .database_url("sqlite::memory:")
            .jwt_secret(TEST_SECRET)
            .upload_dir(upload_dir.path())
            .bcrypt_cost(inkpost::shared::config::MIN_BCRYPT_COST)
            .build()
            .expect("Invalid test configuration");

        let pool = connect_database(&config.database_url)
            .await
            .expect("Failed to open test database");
        let app = create_router(build_state(config, pool));
        let server = TestServer::new(app).expect("Failed to start test server");

        Self { server, upload_dir }
    }

    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        self.server
            .post("/register")
            .json(&json!({ "username": username, "password": password }))
            .await
    }

    pub async fn login(&self, username: &str, password: &str) -> TestResponse {
        self.server
            .post("/login")
            .json(&json!({ "username": username, "password": password }))
            .await
    }

    /// Register and log in, returning the session cookie
    pub async fn session(&self, username: &str, password: &str) -> Cookie<'static> {
        self.register(username, password).await.assert_status_ok();
        let response = self.login(username, password).await;
        response.assert_status_ok();
        response.cookie("token")
    }

    pub async fn submit_post(
        &self,
        cookie: Option<Cookie<'static>>,
        title: &str,
        file_name: &str,
    ) -> TestResponse {
        let mut request = self.server.post("/post").multipart(post_form(title, file_name));
        if let Some(cookie) = cookie {
            request = request.add_cookie(cookie);
        }
        request.await
    }
}

/// Multipart body for a post with a small cover image
pub fn post_form(title: &str, file_name: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("title", title.to_string())
        .add_text("summary", format!("{} summary", title))
        .add_text("content", format!("<p>{}</p>", title))
        .add_part(
            "files",
            Part::bytes(b"\x89PNG fake image".to_vec())
                .file_name(file_name.to_string())
                .mime_type("image/png"),
        )
}
