use async_trait::async_trait;

use crate::domain::Post;
use crate::error::BackendError;

/// Post backend - the content service of record.
///
/// The backend owns identity, ordering and persistence. The session only ever
/// reads whole snapshots through `list` and writes through `append`.
#[async_trait]
pub trait PostBackend: Send + Sync {
    /// Return the full current collection, in backend order.
    ///
    /// Must be idempotent and side-effect free.
    async fn list(&self) -> Result<Vec<Post>, BackendError>;

    /// Create a post. The backend assigns id and timestamp; the created post
    /// is observed through a later `list`.
    async fn append(&self, title: &str, body: &str, author: &str) -> Result<(), BackendError>;
}
