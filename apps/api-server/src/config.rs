//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Absolute session lifetime. There is no refresh: an expired session
    /// forces a full re-login.
    pub session_ttl_hours: i64,
    pub reset_token_ttl_mins: i64,
    /// Pre-populate the content store with demo posts and categories.
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7 * 24),
            reset_token_ttl_mins: env::var("RESET_TOKEN_TTL_MINS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
