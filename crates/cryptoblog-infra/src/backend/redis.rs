//! Redis post backend - posts stored as JSON in a Redis list.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use cryptoblog_core::BackendError;
use cryptoblog_core::domain::{NewPost, Post};
use cryptoblog_core::ports::PostBackend;

use super::now_nanos;

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisBackendConfig {
    /// Redis URL (e.g., redis://localhost:6379)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Prefix for the post list and id counter keys
    pub key_prefix: String,
}

impl Default for RedisBackendConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            connect_timeout: Duration::from_secs(5),
            key_prefix: "cryptoblog".to_string(),
        }
    }
}

impl RedisBackendConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            key_prefix: std::env::var("REDIS_KEY_PREFIX")
                .unwrap_or_else(|_| "cryptoblog".to_string()),
        }
    }

    fn posts_key(&self) -> String {
        format!("{}:posts", self.key_prefix)
    }

    fn next_id_key(&self) -> String {
        format!("{}:next_id", self.key_prefix)
    }
}

/// Redis-backed post store.
///
/// `append` draws an id from `INCR` and pushes the JSON-encoded post onto
/// the tail of the list, so `LRANGE 0 -1` returns posts in creation order.
pub struct RedisPostBackend {
    conn: ConnectionManager,
    config: RedisBackendConfig,
}

impl RedisPostBackend {
    pub async fn new(config: RedisBackendConfig) -> Result<Self, BackendError> {
        let client = Client::open(config.url.as_str())
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn = tokio::time::timeout(config.connect_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| BackendError::Unreachable("Connection timed out".to_string()))?
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        tracing::info!(url = %config.url, prefix = %config.key_prefix, "Connected to Redis post store");

        Ok(Self { conn, config })
    }

    /// Create from environment configuration.
    pub async fn from_env() -> Result<Self, BackendError> {
        Self::new(RedisBackendConfig::from_env()).await
    }
}

#[async_trait]
impl PostBackend for RedisPostBackend {
    async fn list(&self) -> Result<Vec<Post>, BackendError> {
        let mut conn = self.conn.clone();
        let entries: Vec<String> = conn
            .lrange(self.config.posts_key(), 0, -1)
            .await
            .map_err(|e| BackendError::Storage(e.to_string()))?;

        entries
            .iter()
            .map(|entry| {
                serde_json::from_str::<Post>(entry).map_err(|e| BackendError::Decode(e.to_string()))
            })
            .collect()
    }

    async fn append(&self, title: &str, body: &str, author: &str) -> Result<(), BackendError> {
        let mut conn = self.conn.clone();

        let id: u64 = conn
            .incr(self.config.next_id_key(), 1)
            .await
            .map_err(|e| BackendError::Storage(e.to_string()))?;

        let post = NewPost::new(title, body, author).into_post(id, now_nanos());
        let encoded =
            serde_json::to_string(&post).map_err(|e| BackendError::Storage(e.to_string()))?;

        conn.rpush::<_, _, ()>(self.config.posts_key(), encoded)
            .await
            .map_err(|e| BackendError::Storage(e.to_string()))?;

        tracing::debug!(post_id = id, "Post appended to Redis");
        Ok(())
    }
}
