//! Configuration Module
//!
//! Loads server, cache and authentication settings from environment variables.

use std::env;
use std::str::FromStr;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of item snapshots the cache can hold
    pub cache_max_entries: usize,
    /// TTL in seconds for cached item snapshots
    pub cache_default_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// HS256 signing secret for access tokens
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub jwt_expiration: u64,
    /// Username accepted by the token endpoint
    pub admin_username: Option<String>,
    /// Password accepted by the token endpoint
    pub admin_password: Option<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `CACHE_MAX_ENTRIES` - Maximum cached items (default: 1000)
    /// - `CACHE_DEFAULT_TTL` - Cache TTL in seconds (default: 300)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    /// - `JWT_SECRET` - Token signing secret (default: random per process)
    /// - `JWT_EXPIRATION` - Token lifetime in seconds (default: 3600)
    /// - `ADMIN_USERNAME` / `ADMIN_PASSWORD` - Token endpoint account (default: unset)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_env("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_max_entries: parse_env("CACHE_MAX_ENTRIES")
                .unwrap_or(defaults.cache_max_entries),
            cache_default_ttl: parse_env("CACHE_DEFAULT_TTL")
                .unwrap_or(defaults.cache_default_ttl),
            cleanup_interval: parse_env("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            jwt_secret: non_empty_env("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            jwt_expiration: parse_env("JWT_EXPIRATION").unwrap_or(defaults.jwt_expiration),
            admin_username: non_empty_env("ADMIN_USERNAME"),
            admin_password: non_empty_env("ADMIN_PASSWORD"),
        }
    }

    /// True when the token endpoint has an account to check against.
    pub fn has_admin_account(&self) -> bool {
        self.admin_username.is_some() && self.admin_password.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            cache_max_entries: 1000,
            cache_default_ttl: 300,
            cleanup_interval: 1,
            jwt_secret: generate_secret(),
            jwt_expiration: 60 * 60,
            admin_username: None,
            admin_password: None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_port", &self.server_port)
            .field("cache_max_entries", &self.cache_max_entries)
            .field("cache_default_ttl", &self.cache_default_ttl)
            .field("cleanup_interval", &self.cleanup_interval)
            .field("jwt_expiration", &self.jwt_expiration)
            .field("admin_username", &self.admin_username)
            .finish_non_exhaustive()
    }
}

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// 48 random bytes, URL-safe base64 encoded (64 characters).
fn generate_secret() -> String {
    let mut bytes = [0u8; 48];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
