//! JWT encoding, validation and token extraction helpers

use axum::http::HeaderValue;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::TokenClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Sign a token for `user_id`, valid from `now` for the configured TTL
pub(crate) fn encode_token(
    user_id: Uuid,
    config: &AuthConfig,
    now: DateTime<Utc>,
) -> Result<(String, DateTime<Utc>), AuthError> {
    let expires_at = now + config.token_ttl;
    let claims = TokenClaims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
        iss: config.issuer.clone(),
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, user_id = %user_id, "Failed to sign token");
        AuthError::TokenIssueFailed
    })?;

    Ok((token, expires_at))
}

/// Validate a token's signature, expiry and (when configured) issuer
pub(crate) fn validate_token(token: &str, config: &AuthConfig) -> Result<TokenClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "sub"]);

    if let Some(iss) = &config.issuer {
        validation.set_issuer(&[iss]);
    }

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<TokenClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
///
/// The scheme is matched case-insensitively; a missing or empty token
/// segment is a format error.
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    let (scheme, token) = header_str
        .trim()
        .split_once(' ')
        .ok_or(AuthError::InvalidAuthorizationFormat)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::InvalidAuthorizationFormat);
    }

    let token = token.trim();
    if token.is_empty() || token.contains(' ') {
        return Err(AuthError::InvalidAuthorizationFormat);
    }

    Ok(token.to_string())
}
