//! Data Transfer Objects - request/response types for the posts API.

use cryptoblog_core::domain::{NewPost, Post};
use serde::{Deserialize, Serialize};

/// A post as listed by `GET /api/posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDto {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub author: String,
    /// Nanoseconds since the Unix epoch.
    pub timestamp: i64,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            author: post.author,
            timestamp: post.timestamp,
        }
    }
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            body: dto.body,
            author: dto.author,
            timestamp: dto.timestamp,
        }
    }
}

/// Body of `POST /api/posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPostRequest {
    pub title: String,
    pub body: String,
    pub author: String,
}

impl AddPostRequest {
    /// Names of the fields that are empty after trimming, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("title", &self.title),
            ("body", &self.body),
            ("author", &self.author),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

impl From<AddPostRequest> for NewPost {
    fn from(req: AddPostRequest) -> Self {
        NewPost::new(req.title, req.body, req.author)
    }
}
