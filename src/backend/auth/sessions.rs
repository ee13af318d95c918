/**
 * Session Tokens
 *
 * This module issues and verifies the signed identity tokens carried in the
 * `token` cookie. Tokens are HS256 JWTs keyed with the process-wide secret.
 *
 * Tokens carry no expiry: a session lasts until the client discards the
 * cookie on logout. The signature is never revoked server-side.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

use crate::backend::error::AuthError;

/// The verified identity of a logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username
    pub username: String,
    /// User ID
    pub id: Uuid,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// The identity these claims vouch for
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.id,
            username: self.username.clone(),
        }
    }
}

/// Issues and verifies session tokens
///
/// Built once at startup from the signing secret and shared read-only
/// between requests.
#[derive(Clone)]
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCodec").finish_non_exhaustive()
    }
}

impl SessionCodec {
    /// Create a codec keyed with `secret`
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = false;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Create a signed token for `identity`
    ///
    /// # Returns
    /// Compact JWT string
    pub fn issue(&self, identity: &Identity) -> Result<String, AuthError> {
        let claims = Claims {
            username: identity.username.clone(),
            id: identity.user_id,
            iat: u64::try_from(Utc::now().timestamp()).unwrap_or_default(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Verify and decode a token
    ///
    /// Empty, malformed and forged tokens all fail with `AuthError::InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        if token.is_empty() {
            return Err(AuthError::InvalidToken);
        }

        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                AuthError::InvalidToken
            })
    }
}
