//! Application state - shared across all handlers.

use std::sync::Arc;

use cryptoblog_core::ports::PostBackend;
use cryptoblog_infra::{InMemoryPostBackend, RedisBackendConfig, RedisPostBackend};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostBackend>,
    pub store: &'static str,
}

impl AppState {
    /// Build the state, preferring Redis and falling back to memory.
    pub async fn new(redis: Option<&RedisBackendConfig>) -> Self {
        let Some(config) = redis else {
            tracing::warn!("REDIS_URL not set. Posts are kept in memory only.");
            return Self::in_memory();
        };

        match RedisPostBackend::new(config.clone()).await {
            Ok(backend) => Self {
                posts: Arc::new(backend),
                store: "redis",
            },
            Err(e) => {
                tracing::error!("Failed to connect to Redis: {}. Using in-memory fallback.", e);
                Self::in_memory()
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(InMemoryPostBackend::new()), "memory")
    }

    pub fn with_backend(posts: Arc<dyn PostBackend>, store: &'static str) -> Self {
        Self { posts, store }
    }
}
