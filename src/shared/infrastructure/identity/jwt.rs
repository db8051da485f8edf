use crate::shared::infrastructure::identity::{IdentityError, IdentityResolver, UserId};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AccessClaims {
    #[serde(default)]
    sub: String,
}

/// Verifies HMAC-signed access tokens and reads the user id from `sub`.
pub struct JwtIdentityResolver {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityResolver {
    pub fn new(secret: &str, audience: Option<&str>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        match audience {
            Some(aud) => validation.set_audience(&[aud]),
            None => validation.validate_aud = false,
        }
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl IdentityResolver for JwtIdentityResolver {
    fn resolve(&self, bearer_token: &str) -> Result<UserId, IdentityError> {
        let data = decode::<AccessClaims>(bearer_token, &self.key, &self.validation)
            .map_err(|e| IdentityError::InvalidToken(e.to_string()))?;
        if data.claims.sub.is_empty() {
            return Err(IdentityError::MissingSubject);
        }
        Ok(UserId(data.claims.sub))
    }
}
