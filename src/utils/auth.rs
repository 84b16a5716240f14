use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

/// Claims we care about from the dashboard token. Everything is optional
/// because the payload is read without verification and the backend is the
/// only party that enforces the token's shape.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    pub sub: Option<String>,
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Expired means `exp` at or before now. A token with no `exp` claim is
    /// never considered expired locally; the backend gets the final word.
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => exp <= chrono::Utc::now().timestamp(),
            None => false,
        }
    }
}

/// Decode the payload of a JWT without checking its signature.
///
/// The session layer never holds the signing key, so this is strictly a
/// best-effort read used for the expiry fast path and for pulling the
/// subject out of `sub`. Real verification happens on the backend.
pub fn decode_unverified(token: &str) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = jsonwebtoken::decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(&[]),
        &validation,
    )?;

    Ok(data.claims)
}
