//! Client configuration loaded from environment variables.

use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the blog server.
    pub api_url: String,
    /// Emit logs as JSON lines.
    pub json_logs: bool,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("BLOG_API_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
