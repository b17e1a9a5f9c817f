//! Validation of HS256 identity tokens issued by the hosted auth provider.

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims embedded in a provider-issued identity token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IdentityClaims {
    /// Subject -- the provider-side user id.
    pub sub: String,
    /// The account email, when the provider includes it.
    pub email: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Validate and decode an identity token, returning the embedded
/// [`IdentityClaims`].
///
/// Validates the signature and expiration automatically. The secret is the
/// provider's signing secret (`CLOUD_JWT_SECRET`).
pub fn validate_identity_token(
    token: &str,
    secret: &str,
) -> Result<IdentityClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<IdentityClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
