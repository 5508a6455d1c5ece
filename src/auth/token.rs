//! JWT access tokens
//!
//! HS256-signed tokens carrying the username in `sub`. Verification checks
//! the signature, the expiry (with jsonwebtoken's default leeway) and that
//! the token is an access token.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: String,
}

impl Claims {
    /// Claims for an access token valid for `ttl_secs` from now.
    pub fn access(username: impl Into<String>, ttl_secs: u64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub: username.into(),
            iat: now,
            exp: now.saturating_add(i64::try_from(ttl_secs).unwrap_or(i64::MAX)),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("unexpected token type: {0}")]
    WrongType(String),
}

pub fn sign(secret: &str, claims: &Claims) -> Result<String, TokenError> {
    let key = EncodingKey::from_secret(secret.as_bytes());
    Ok(jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &key)?)
}

pub fn issue_token(secret: &str, username: &str, ttl_secs: u64) -> Result<String, TokenError> {
    sign(secret, &Claims::access(username, ttl_secs))
}

pub fn verify_token(secret: &str, token: &str) -> Result<Claims, TokenError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::new(Algorithm::HS256);
    let claims = jsonwebtoken::decode::<Claims>(token, &key, &validation)?.claims;
    if claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(TokenError::WrongType(claims.token_type));
    }
    Ok(claims)
}
