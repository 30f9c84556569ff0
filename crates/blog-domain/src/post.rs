use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PostId = i64;
pub type AuthoredPostId = Uuid;

/// A post from the remote collection.
///
/// Unknown fields in the payload (such as `userId`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: PostId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A post written locally by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoredPost {
    pub id: AuthoredPostId,
    pub title: String,
    pub body: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl AuthoredPost {
    pub fn new(title: String, body: String, author: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            body,
            author,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_ignores_extra_fields() {
        let json = r#"{"userId": 1, "id": 7, "title": "hello", "body": "world"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post, Post::new(7, "hello", "world"));
    }

    #[test]
    fn test_negative_id_is_a_valid_post() {
        let json = r#"[{"id": 1, "title": "a", "body": "x"}, {"id": -2, "title": "b", "body": "y"}]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts[1], Post::new(-2, "b", "y"));
    }

    #[test]
    fn test_post_requires_body() {
        let json = r#"{"id": 7, "title": "hello"}"#;
        assert!(serde_json::from_str::<Post>(json).is_err());
    }

    #[test]
    fn test_authored_posts_get_distinct_ids() {
        let a = AuthoredPost::new("a".into(), "b".into(), "me".into());
        let b = AuthoredPost::new("a".into(), "b".into(), "me".into());
        assert_ne!(a.id, b.id);
    }
}
