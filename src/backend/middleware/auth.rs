/**
 * Session Cookie Authentication
 *
 * Reads the `token` cookie and verifies it with the session codec. Routes
 * that require a login take a `SessionUser` argument; routes that must run
 * other work before verifying call `session_token` and the codec themselves.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts, HeaderMap},
};
use cookie::{Cookie, SameSite};

use crate::backend::auth::sessions::Claims;
use crate::backend::error::{AuthError, BackendError};
use crate::backend::server::state::AppState;

/// Name of the session cookie
pub const TOKEN_COOKIE: &str = "token";

/// Extract the session token from the request's `Cookie` headers
///
/// Returns `None` when no `token` cookie was sent.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value).filter_map(Result::ok))
        .find(|cookie| cookie.name() == TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_string())
}

/// Cookie carrying a freshly issued session token
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .same_site(SameSite::None)
        .secure(true)
        .build()
}

/// Cookie that overwrites the session token with an empty value
pub fn cleared_session_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, "")).path("/").build()
}

/// Axum extractor for the logged-in user
///
/// Rejects with `AuthError::InvalidToken` when the cookie is missing,
/// empty or fails verification.
#[derive(Clone, Debug)]
pub struct SessionUser(pub Claims);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).unwrap_or_default();

        let claims = state.sessions.verify(&token).map_err(|e: AuthError| {
            tracing::warn!("Rejected session cookie");
            BackendError::from(e)
        })?;

        Ok(SessionUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_session_token_found_among_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark; token=abc.def.ghi"));
        assert_eq!(session_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_session_token_across_cookie_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("token=xyz"));
        assert_eq!(session_token(&headers), Some("xyz".to_string()));
    }

    #[test]
    fn test_session_token_missing() {
        let headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);
    }

    #[test]
    fn test_session_cookie_attributes() {
        let rendered = session_cookie("abc".to_string()).to_string();
        assert!(rendered.starts_with("token=abc"));
        assert!(rendered.contains("SameSite=None"));
        assert!(rendered.contains("Secure"));
    }

    #[test]
    fn test_cleared_cookie_is_empty() {
        let cookie = cleared_session_cookie();
        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "");
    }
}
