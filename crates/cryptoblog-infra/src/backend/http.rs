//! HTTP post backend - talks to a remote blog server's JSON API.
//!
//! No request timeout is configured: a hung server keeps the call pending.

use async_trait::async_trait;
use reqwest::{Client, Response};

use cryptoblog_core::BackendError;
use cryptoblog_core::domain::Post;
use cryptoblog_core::ports::PostBackend;
use cryptoblog_shared::{AddPostRequest, ApiResponse, ErrorResponse, PostDto};

pub struct HttpPostBackend {
    client: Client,
    base_url: String,
}

impl HttpPostBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let client = Client::builder()
            .build()
            .map_err(|e| BackendError::Unreachable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn posts_url(&self) -> String {
        format!("{}/api/posts", self.base_url)
    }
}

fn transport_error(error: reqwest::Error) -> BackendError {
    if error.is_decode() {
        BackendError::Decode(error.to_string())
    } else {
        BackendError::Unreachable(error.to_string())
    }
}

/// Turn a non-2xx response into `Rejected`, using the problem details when
/// the server sent them.
async fn check_status(response: Response) -> Result<Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = match response.json::<ErrorResponse>().await {
        Ok(problem) => problem.summary(),
        Err(_) => status.to_string(),
    };
    Err(BackendError::Rejected(detail))
}

#[async_trait]
impl PostBackend for HttpPostBackend {
    async fn list(&self) -> Result<Vec<Post>, BackendError> {
        let response = self
            .client
            .get(self.posts_url())
            .send()
            .await
            .map_err(transport_error)?;

        let envelope: ApiResponse<Vec<PostDto>> = check_status(response)
            .await?
            .json()
            .await
            .map_err(transport_error)?;

        let posts = envelope
            .data
            .ok_or_else(|| BackendError::Decode("response carried no data".to_string()))?;

        Ok(posts.into_iter().map(Post::from).collect())
    }

    async fn append(&self, title: &str, body: &str, author: &str) -> Result<(), BackendError> {
        let request = AddPostRequest {
            title: title.to_string(),
            body: body.to_string(),
            author: author.to_string(),
        };

        let response = self
            .client
            .post(self.posts_url())
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_url_strips_trailing_slash() {
        let backend = HttpPostBackend::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(backend.posts_url(), "http://127.0.0.1:8080/api/posts");
    }

    #[tokio::test]
    async fn test_unreachable_server_maps_to_unreachable() {
        // Port 9 (discard) is closed on test machines.
        let backend = HttpPostBackend::new("http://127.0.0.1:9").unwrap();

        match backend.list().await {
            Err(BackendError::Unreachable(_)) => {}
            other => panic!("expected Unreachable, got {other:?}"),
        }
    }
}
