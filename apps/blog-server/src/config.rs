//! Application configuration loaded from environment variables.

use std::env;

use cryptoblog_infra::RedisBackendConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Set when `REDIS_URL` is present; otherwise posts live in memory.
    pub redis: Option<RedisBackendConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let redis = env::var("REDIS_URL")
            .ok()
            .map(|_| RedisBackendConfig::from_env());

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            redis,
        }
    }
}
