use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;

pub const TEST_SECRET: &str = "test-secret-0001";

pub fn sign_claims(secret: &str, claims: serde_json::Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

/// A token for `user_id` signed with `TEST_SECRET`, valid for an hour.
pub fn sign_token(user_id: &str) -> String {
    let exp = chrono::Utc::now().timestamp() + 3600;
    sign_claims(
        TEST_SECRET,
        json!({"sub": user_id, "email": "student@example.com", "exp": exp}),
    )
}

pub fn bearer(user_id: &str) -> String {
    format!("Bearer {}", sign_token(user_id))
}
