use crate::{AuthError, SessionClaims, SessionKeys};

use uuid::Uuid;

const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

#[test]
fn given_issued_token_when_verified_then_subject_is_identity_id() {
    let keys = SessionKeys::from_secret(SECRET);
    let identity_id = Uuid::new_v4();

    let token = keys.issue(identity_id).unwrap();
    let claims = keys.verify(&token).unwrap();

    assert_eq!(claims.identity_id().unwrap(), identity_id);
}

#[test]
fn given_token_signed_with_other_secret_when_verified_then_decode_error() {
    let keys = SessionKeys::from_secret(SECRET);
    let other = SessionKeys::from_secret(b"wrong-secret-key-at-least-32-byt");

    let token = other.issue(Uuid::new_v4()).unwrap();
    let result = keys.verify(&token);

    assert!(matches!(result, Err(AuthError::TokenDecode { .. })));
}

#[test]
fn given_garbage_token_when_verified_then_decode_error() {
    let keys = SessionKeys::from_secret(SECRET);

    let result = keys.verify("not.a.token");

    assert!(matches!(result, Err(AuthError::TokenDecode { .. })));
}

#[test]
fn given_expired_claims_when_verified_then_token_expired_error() {
    let keys = SessionKeys::from_secret(SECRET);
    let now = chrono::Utc::now().timestamp();
    let claims = SessionClaims {
        sub: Uuid::new_v4().to_string(),
        exp: now - 3600, // expired an hour ago, beyond leeway
        iat: now - 7200,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(SECRET),
    )
    .unwrap();

    let result = keys.verify(&token);

    assert!(matches!(result, Err(AuthError::TokenExpired { .. })));
}

#[test]
fn given_empty_subject_when_validated_then_invalid_claim_error() {
    let claims = SessionClaims {
        sub: String::new(),
        exp: chrono::Utc::now().timestamp() + 3600,
        iat: chrono::Utc::now().timestamp(),
    };

    let result = claims.validate();

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}
