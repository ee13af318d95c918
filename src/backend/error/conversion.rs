/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use crate::backend::error::types::BackendError;

/// Request bodies that fail to deserialize are a 400, like every other bad input
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        let status = match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => StatusCode::BAD_REQUEST,
            other => other,
        };
        tracing::warn!("Rejected JSON body: {}", rejection.body_text());
        BackendError::handler(status, rejection.body_text())
    }
}

impl From<MultipartRejection> for BackendError {
    fn from(rejection: MultipartRejection) -> Self {
        tracing::warn!("Rejected multipart body: {}", rejection.body_text());
        BackendError::handler(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::error::types::{AuthError, ValidationError};
    use axum::body::Body;
    use axum::extract::FromRequest;
    use axum::http::Request;

    #[tokio::test]
    async fn test_error_response_body() {
        let response = BackendError::from(AuthError::InvalidToken).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Invalid token");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_validation_response_status() {
        let response =
            BackendError::from(ValidationError::MissingField("files")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_json_field_becomes_bad_request() {
        #[derive(serde::Deserialize, Debug)]
        struct Credentials {
            #[allow(dead_code)]
            username: String,
            #[allow(dead_code)]
            password: String,
        }

        let request = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"username":"alice"}"#))
            .unwrap();
        let rejection = Json::<Credentials>::from_request(request, &())
            .await
            .unwrap_err();

        let err = BackendError::from(rejection);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert!(err.message().contains("password"));
    }
}
