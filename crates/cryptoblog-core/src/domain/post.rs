use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a published entry in the feed.
///
/// `id` and `timestamp` are assigned by the backend. The client never edits a
/// post once it has been listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub author: String,
    /// Creation instant in nanoseconds since the Unix epoch.
    pub timestamp: i64,
}

impl Post {
    /// Creation instant as a UTC date-time.
    pub fn created_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_nanos(self.timestamp)
    }

    /// Creation instant formatted in the local time zone, e.g. `3/14/2024, 9:26:53 AM`.
    pub fn created_at_local(&self) -> String {
        self.created_at()
            .with_timezone(&Local)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string()
    }
}

/// Fields of a post about to be appended, before the backend assigns identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub author: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author: author.into(),
        }
    }

    /// Stamp the draft with the identity and instant chosen by a backend.
    pub fn into_post(self, id: u64, timestamp: i64) -> Post {
        Post {
            id,
            title: self.title,
            body: self.body,
            author: self.author,
            timestamp,
        }
    }
}
