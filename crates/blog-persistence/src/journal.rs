use crate::traits::KeyValueStore;
use blog_core::{BlogError, BlogResult};
use blog_domain::AuthoredPost;

pub const BLOGS_KEY: &str = "blogs";

/// The user's locally authored posts, stored newest first.
pub struct PostJournal<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> PostJournal<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Validate and record a new post at the front of the journal.
    pub async fn create(&self, title: &str, body: &str, author: &str) -> BlogResult<AuthoredPost> {
        let title = title.trim();
        let body = body.trim();
        if title.is_empty() {
            return Err(BlogError::Validation("Title must not be empty".to_string()));
        }
        if body.is_empty() {
            return Err(BlogError::Validation("Body must not be empty".to_string()));
        }

        let post = AuthoredPost::new(title.to_string(), body.to_string(), author.to_string());
        let value = serde_json::to_value(&post)
            .map_err(|e| BlogError::Serialization(e.to_string()))?;
        let count = self.store.prepend_to_list(BLOGS_KEY, value).await?;

        tracing::info!("Created post {} ({} authored posts)", post.id, count);
        Ok(post)
    }

    /// All authored posts, newest first.
    pub async fn list(&self) -> BlogResult<Vec<AuthoredPost>> {
        self.store
            .get_list(BLOGS_KEY)
            .await?
            .into_iter()
            .map(|value| {
                serde_json::from_value(value).map_err(|e| BlogError::Serialization(e.to_string()))
            })
            .collect()
    }
}
