//! Unverified claim inspection for provider-issued tokens.
//!
//! Diagnostics need to answer "what does this key claim to be?" without
//! holding the signing secret, so the claims segment is decoded with
//! signature verification disabled. Nothing here authenticates anything;
//! identity checks go through real validation in the API crate.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims a provider key carries, all optional. `ref` is the project
/// reference the key was issued for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub iss: Option<String>,
    pub role: Option<String>,
    /// Expiry as a UTC Unix timestamp.
    pub exp: Option<i64>,
    #[serde(rename = "ref")]
    pub project_ref: Option<String>,
}

/// Structural failures while peeking at a token. These are reported in
/// diagnostics bodies, never raised as HTTP errors.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token must have exactly 3 dot-separated segments, found {0}")]
    SegmentCount(usize),

    #[error("claims segment did not decode: {0}")]
    Decode(String),
}

/// Decode the middle segment of a three-part base64url token as JSON
/// claims, without verifying the signature.
pub fn peek_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let segments = token.split('.').count();
    if segments != 3 {
        return Err(TokenError::SegmentCount(segments));
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| TokenError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn mint(claims: &TokenClaims) -> String {
        encode(
            &Header::default(), // HS256
            claims,
            &EncodingKey::from_secret(b"some-secret-we-do-not-keep"),
        )
        .expect("encoding should succeed")
    }

    #[test]
    fn peeks_claims_without_the_signing_secret() {
        let token = mint(&TokenClaims {
            iss: Some("repolens-cloud".into()),
            role: Some("anon".into()),
            exp: Some(4_102_444_800), // 2100-01-01
            project_ref: Some("abcd1234".into()),
        });

        let claims = peek_claims(&token).expect("peek should succeed");
        assert_eq!(claims.iss.as_deref(), Some("repolens-cloud"));
        assert_eq!(claims.role.as_deref(), Some("anon"));
        assert_eq!(claims.project_ref.as_deref(), Some("abcd1234"));
        assert_eq!(claims.exp, Some(4_102_444_800));
    }

    #[test]
    fn expired_token_still_peeks() {
        let token = mint(&TokenClaims {
            iss: None,
            role: Some("anon".into()),
            exp: Some(946_684_800), // 2000-01-01, long past
            project_ref: None,
        });
        assert!(peek_claims(&token).is_ok());
    }

    #[test]
    fn two_segments_is_a_structured_error() {
        assert_matches!(peek_claims("head.payload"), Err(TokenError::SegmentCount(2)));
    }

    #[test]
    fn four_segments_is_a_structured_error() {
        assert_matches!(peek_claims("a.b.c.d"), Err(TokenError::SegmentCount(4)));
    }

    #[test]
    fn garbage_payload_is_a_structured_error() {
        assert_matches!(
            peek_claims("xxx.!!!not-base64url!!!.yyy"),
            Err(TokenError::Decode(_))
        );
    }
}
