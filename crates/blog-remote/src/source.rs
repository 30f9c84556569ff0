use async_trait::async_trait;
use blog_core::{BlogResult, FetchError};
use blog_domain::{Post, PostId};

#[async_trait]
pub trait CollectionSource: Send + Sync {
    /// Fetch the whole collection, preserving the server's order.
    ///
    /// Every failure mode collapses into a single [`FetchError`].
    async fn fetch_all(&self) -> Result<Vec<Post>, FetchError>;

    /// Fetch one post. A missing post is `BlogError::NotFound`.
    async fn fetch_one(&self, id: PostId) -> BlogResult<Post>;
}
