//! HTTP implementation of [`CollectionSource`].

use crate::source::CollectionSource;
use async_trait::async_trait;
use blog_core::{BlogError, BlogResult, FetchError};
use blog_domain::{Post, PostId};
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Fetches posts from a JSON endpoint returning an array of
/// `{ id, title, body }` objects.
#[derive(Debug, Clone)]
pub struct HttpPostSource {
    client: Client,
    endpoint: String,
}

impl HttpPostSource {
    /// Create a source without a request timeout; a stalled server leaves the
    /// fetch pending.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a source whose requests give up after `timeout`.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> BlogResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BlogError::Internal(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    fn post_url(&self, id: PostId) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), id)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, (Option<StatusCode>, FetchError)> {
        let response = self
            .client
            .get(url)
            .header(USER_AGENT, format!("blog/{}", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| (None, FetchError::network(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err((Some(status), FetchError::status(status.as_u16())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| (Some(status), FetchError::network(e)))?;
        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl CollectionSource for HttpPostSource {
    async fn fetch_all(&self) -> Result<Vec<Post>, FetchError> {
        debug!("Fetching posts from {}", self.endpoint);

        let bytes = self.get_bytes(&self.endpoint).await.map_err(|(_, e)| {
            warn!("{}", e);
            e
        })?;

        let posts: Vec<Post> = serde_json::from_slice(&bytes).map_err(|e| {
            let e = FetchError::malformed(e);
            warn!("{}", e);
            e
        })?;

        info!("Fetched {} posts from {}", posts.len(), self.endpoint);
        Ok(posts)
    }

    async fn fetch_one(&self, id: PostId) -> BlogResult<Post> {
        let url = self.post_url(id);
        debug!("Fetching post {} from {}", id, url);

        let bytes = self.get_bytes(&url).await.map_err(|(status, e)| match status {
            Some(StatusCode::NOT_FOUND) => BlogError::NotFound(format!("Post {}", id)),
            _ => {
                warn!("{}", e);
                BlogError::Fetch(e)
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| BlogError::Fetch(FetchError::malformed(e)))
    }
}
