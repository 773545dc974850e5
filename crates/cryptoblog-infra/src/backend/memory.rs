//! In-memory post backend.
//!
//! Used by the server when Redis is not configured, and by tests.
//! Note: Data is lost on process restart.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use cryptoblog_core::BackendError;
use cryptoblog_core::domain::{NewPost, Post};
use cryptoblog_core::ports::PostBackend;

use super::now_nanos;

/// Append-only post list kept in insertion order.
pub struct InMemoryPostBackend {
    posts: RwLock<Vec<Post>>,
    next_id: AtomicU64,
}

impl InMemoryPostBackend {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Seed the backend. New ids continue after the highest seeded id.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id + 1).max().unwrap_or(1);
        Self {
            posts: RwLock::new(posts),
            next_id: AtomicU64::new(next_id),
        }
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

impl Default for InMemoryPostBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostBackend for InMemoryPostBackend {
    async fn list(&self) -> Result<Vec<Post>, BackendError> {
        Ok(self.posts.read().await.clone())
    }

    async fn append(&self, title: &str, body: &str, author: &str) -> Result<(), BackendError> {
        // Ids are drawn under the write lock so list order matches id order.
        let mut posts = self.posts.write().await;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        posts.push(NewPost::new(title, body, author).into_post(id, now_nanos()));

        tracing::debug!(post_id = id, total = posts.len(), "Post appended");
        Ok(())
    }
}
