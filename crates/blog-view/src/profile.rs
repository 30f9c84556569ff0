//! The user's own posts, searchable but not paginated.

use crate::listing::Notice;
use blog_core::BlogResult;
use blog_domain::search::{CompositeSearcher, PostSearcher};
use blog_domain::AuthoredPost;
use blog_persistence::{KeyValueStore, PostJournal};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSnapshot {
    pub author: String,
    pub query: String,
    pub total_posts: usize,
    pub total_matches: usize,
    pub items: Vec<AuthoredPost>,
    pub notice: Option<Notice>,
    pub message: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    author: String,
    posts: Vec<AuthoredPost>,
    query: String,
    matches: Vec<usize>,
}

impl ProfileView {
    pub fn new(author: impl Into<String>, posts: Vec<AuthoredPost>) -> Self {
        let mut view = Self {
            author: author.into(),
            posts,
            query: String::new(),
            matches: Vec::new(),
        };
        view.refresh();
        view
    }

    /// Build the view from the journal in `store`.
    pub async fn load<S: KeyValueStore + ?Sized>(store: &S, author: &str) -> BlogResult<Self> {
        let posts = PostJournal::new(store).list().await?;
        Ok(Self::new(author, posts))
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    fn refresh(&mut self) {
        let searcher = CompositeSearcher::all(self.query.as_str());
        self.matches = self
            .posts
            .iter()
            .enumerate()
            .filter(|(_, post)| searcher.matches(*post))
            .map(|(idx, _)| idx)
            .collect();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> impl Iterator<Item = &AuthoredPost> + '_ {
        self.matches.iter().map(|&idx| &self.posts[idx])
    }

    pub fn notice(&self) -> Option<Notice> {
        if !self.matches.is_empty() {
            None
        } else if self.query.is_empty() {
            Some(Notice::NoPosts)
        } else {
            Some(Notice::NoResults)
        }
    }

    pub fn snapshot(&self) -> ProfileSnapshot {
        let notice = self.notice();
        ProfileSnapshot {
            author: self.author.clone(),
            query: self.query.clone(),
            total_posts: self.posts.len(),
            total_matches: self.matches.len(),
            items: self.visible().cloned().collect(),
            notice,
            message: notice.map(Notice::message),
        }
    }
}
