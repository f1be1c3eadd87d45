//! HTTP post source.
//!
//! Issues a plain `GET` against the configured endpoint and decodes the body
//! as a JSON array of [`Post`]. No auth, no retries, no timeout: the request
//! waits for the transport to settle.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::feed::{FetchError, Post, PostSource};

pub struct HttpPostSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpPostSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    fn describe(&self) -> &str {
        &self.endpoint
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        info!("GET {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", self.endpoint, e);
                FetchError::Transport(e.to_string())
            })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("Feed returned HTTP {}", status.as_u16());
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read response body: {}", e);
            FetchError::Transport(e.to_string())
        })?;
        debug!("Response body: {} bytes", body.len());

        let posts: Vec<Post> = serde_json::from_slice(&body).map_err(|e| {
            warn!("Failed to decode posts: {}", e);
            FetchError::Transport(format!("invalid response body: {e}"))
        })?;

        info!("Fetched {} posts", posts.len());
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_is_endpoint() {
        let source = HttpPostSource::new("http://localhost:8000/reddit-sentiment");
        assert_eq!(source.describe(), "http://localhost:8000/reddit-sentiment");
    }

    #[test]
    fn unparseable_url_is_transport_failure() {
        let source = HttpPostSource::new("not a url");
        let result = tokio_test::block_on(source.fetch_posts());
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
