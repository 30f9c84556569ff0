//! Navigable locations of the blog reader.

use crate::PostId;
use serde::Serialize;
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    Listing { query: Option<String> },
    Login,
    Register,
    CreatePost,
    Profile,
    PostDetail { id: PostId },
    Settings,
    NotFound,
}

impl Route {
    /// Resolve a path such as `/blogs?q=rust` or `/blog/12`.
    pub fn parse(path: &str) -> Self {
        let (path, query_string) = match path.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (path, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["blogs"] => Self::Listing {
                query: query_string.and_then(search_param),
            },
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["create"] => Self::CreatePost,
            ["profile"] => Self::Profile,
            ["settings"] => Self::Settings,
            ["blog", id] => id
                .parse()
                .map(|id| Self::PostDetail { id })
                .unwrap_or(Self::NotFound),
            _ => Self::NotFound,
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Listing { query: Some(q) } if !q.is_empty() => {
                let encoded: String = form_urlencoded::byte_serialize(q.as_bytes()).collect();
                format!("/blogs?q={}", encoded)
            }
            Self::Listing { .. } => "/blogs".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::CreatePost => "/create".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::PostDetail { id } => format!("/blog/{}", id),
            Self::Settings => "/settings".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }
}

fn search_param(query_string: &str) -> Option<String> {
    form_urlencoded::parse(query_string.as_bytes())
        .find(|(key, _)| matches!(key.as_ref(), "q" | "search"))
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
