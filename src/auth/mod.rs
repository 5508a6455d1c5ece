//! Authentication
//!
//! Bearer-token verification for every item route, plus the credential
//! check behind the token endpoint.

mod extractor;
pub mod token;

pub use extractor::{extract_bearer, AuthenticatedUser};
pub use token::{issue_token, verify_token, Claims, TokenError};

use crate::config::Config;

/// Signing secret, token lifetime and the single admin account.
#[derive(Clone)]
pub struct AuthSettings {
    pub secret: String,
    pub token_ttl: u64,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl AuthSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            token_ttl: config.jwt_expiration,
            admin_username: config.admin_username.clone(),
            admin_password: config.admin_password.clone(),
        }
    }

    /// True only when an admin account is configured and both values match.
    pub fn check_credentials(&self, username: &str, password: &str) -> bool {
        match (&self.admin_username, &self.admin_password) {
            (Some(user), Some(pass)) => user == username && pass == password,
            _ => false,
        }
    }
}

// Keep the secret out of logs
impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("token_ttl", &self.token_ttl)
            .field("admin_username", &self.admin_username)
            .finish_non_exhaustive()
    }
}
