use axum::{
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::Response,
};

use crate::shared::infrastructure::identity::{IdentityError, UserId, extract_bearer_token};
use crate::shell::responses::json_error;
use crate::shell::state::AppState;

/// Extractor for authenticated requests. Resolves the bearer token through
/// the configured identity resolver and yields the caller's user id.
pub struct AuthenticatedUser(pub UserId);

fn unauthorized(error: IdentityError) -> Response {
    tracing::debug!(%error, "request refused");
    json_error(StatusCode::UNAUTHORIZED, error.to_string())
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized(IdentityError::MissingCredential))?;

        let token = extract_bearer_token(header)
            .ok_or_else(|| unauthorized(IdentityError::MalformedHeader))?;

        let state = AppState::from_ref(state);
        state
            .identity
            .resolve(token)
            .map(AuthenticatedUser)
            .map_err(unauthorized)
    }
}
