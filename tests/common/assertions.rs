//! Custom assertion macros
//!
//! Provides assertions for the JSON error bodies the server returns.

/// Assert that a response is a JSON error with the given status and message
///
/// Error bodies have the shape `{"error": <message>, "status": <code>}`.
#[macro_export]
macro_rules! assert_error_response {
    ($response:expr, $status:expr, $message:expr) => {{
        let response = &$response;
        response.assert_status($status);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], $message, "unexpected error body: {}", body);
        assert_eq!(body["status"], $status.as_u16());
    }};
}

/// Assert that a string contains a substring
#[macro_export]
macro_rules! assert_contains {
    ($haystack:expr, $needle:expr) => {
        assert!(
            $haystack.contains($needle),
            "Expected '{}' to contain '{}'",
            $haystack,
            $needle
        );
    };
}
