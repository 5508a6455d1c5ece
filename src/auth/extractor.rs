//! Bearer-token extractor
//!
//! Parts extractors run before the body is read, so listing
//! `AuthenticatedUser` on a handler rejects unauthenticated callers ahead
//! of any payload validation or storage access.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use tracing::warn;

use super::verify_token;
use crate::api::AppState;
use crate::error::InventoryError;

/// The caller behind a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub username: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = InventoryError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer(&parts.headers).ok_or(InventoryError::NotAuthenticated)?;
        let claims = verify_token(&state.auth.secret, token).map_err(|err| {
            warn!("rejected bearer token: {}", err);
            InventoryError::InvalidToken
        })?;
        Ok(AuthenticatedUser {
            username: claims.sub,
        })
    }
}

/// Token from an `Authorization: Bearer <token>` header, if present.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?;
    let value = value.to_str().ok()?;
    value.strip_prefix("Bearer ").map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer() {
        let mut headers = HeaderMap::new();
        assert!(extract_bearer(&headers).is_none());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(extract_bearer(&headers), Some("abc.def.ghi"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert!(extract_bearer(&headers).is_none());
    }
}
