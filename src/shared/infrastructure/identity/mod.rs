// Identity port: turns a bearer credential into the id of the calling user.
//
// The resolved id is trusted for ownership scoping by every use case; the
// resolver itself performs no scoping.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(pub String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Authorization header required")]
    MissingCredential,

    #[error("Invalid authorization header format")]
    MalformedHeader,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Invalid token: missing user ID in token")]
    MissingSubject,
}

pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, bearer_token: &str) -> Result<UserId, IdentityError>;
}

/// Splits an `Authorization` header value of the exact form `Bearer <token>`.
pub fn extract_bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

pub mod jwt;
