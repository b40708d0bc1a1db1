//! Token and credential flow tests
//!
//! Exercises the public issue side of the auth crate and the shared
//! password hashing utilities without a database.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use uuid::Uuid;

use bloglist_auth::{issue_token, AuthConfig, Claims};
use bloglist_common::{hash_password, verify_password};

fn test_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-flow-secret".to_string(),
        issuer: None,
        audience: None,
    }
}

#[test]
fn issued_token_carries_subject_and_username() {
    let config = test_config();
    let user_id = Uuid::new_v4();

    let token = issue_token(user_id, "mluukkai", &config).expect("token should issue");

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    let decoded = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(config.jwt_secret.as_ref()),
        &validation,
    )
    .expect("token should decode with the issuing secret");

    assert_eq!(decoded.claims.sub, user_id.to_string());
    assert_eq!(decoded.claims.username, "mluukkai");
    assert!(decoded.claims.exp > decoded.claims.iat);
}

#[test]
fn issued_token_does_not_decode_with_another_secret() {
    let config = test_config();
    let token = issue_token(Uuid::new_v4(), "root", &config).unwrap();

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    let result = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(b"some-other-secret"),
        &validation,
    );

    assert!(result.is_err());
}

#[test]
fn password_hash_roundtrip() {
    let stored = hash_password("salainen").expect("hashing should succeed");

    assert!(verify_password("salainen", &stored));
    assert!(!verify_password("wrong", &stored));
    assert!(!stored.contains("salainen"));
}

#[test]
fn stored_hash_format_is_salt_and_digest() {
    let stored = hash_password("salainen").unwrap();
    let parts: Vec<&str> = stored.split(':').collect();

    assert_eq!(parts.len(), 2);
    // 16-byte salt, 32-byte SHA-256 digest, both hex encoded
    assert_eq!(parts[0].len(), 32);
    assert_eq!(parts[1].len(), 64);
}
