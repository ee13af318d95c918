//! Property-based tests for session tokens
//!
//! Uses proptest to check that every issued token verifies back to the same
//! identity, and that a token only verifies under the secret that signed it.

use proptest::prelude::*;
use uuid::Uuid;

use inkpost::backend::auth::{Identity, SessionCodec};
use inkpost::backend::error::AuthError;

fn identity() -> impl Strategy<Value = Identity> {
    ("\\PC{0,40}", any::<u128>()).prop_map(|(username, id)| Identity {
        user_id: Uuid::from_u128(id),
        username,
    })
}

proptest! {
    #[test]
    fn test_issue_then_verify_round_trips(identity in identity()) {
        let codec = SessionCodec::new("property-secret");
        let token = codec.issue(&identity).unwrap();

        let claims = codec.verify(&token).unwrap();
        prop_assert_eq!(claims.identity(), identity);
    }

    #[test]
    fn test_token_rejected_under_other_secret(
        identity in identity(),
        secret in "[a-zA-Z0-9]{1,32}",
    ) {
        prop_assume!(secret != "property-secret");
        let token = SessionCodec::new("property-secret").issue(&identity).unwrap();

        prop_assert_eq!(
            SessionCodec::new(&secret).verify(&token),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn test_arbitrary_strings_never_verify(token in "\\PC{0,80}") {
        let codec = SessionCodec::new("property-secret");
        prop_assert_eq!(codec.verify(&token), Err(AuthError::InvalidToken));
    }
}
