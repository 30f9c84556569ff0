//! Post search functionality.
//!
//! Plain case-insensitive substring matching over a post's title and body.
//! Used by both the listing and the profile view for consistent search behavior.

use crate::{AuthoredPost, Post};

/// Anything with a title and a body can be searched.
pub trait Searchable {
    fn title(&self) -> &str;
    fn body(&self) -> &str;
}

impl Searchable for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.body
    }
}

impl Searchable for AuthoredPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn body(&self) -> &str {
        &self.body
    }
}

/// Trait for searching posts by various criteria.
pub trait PostSearcher {
    /// Returns true if the post matches the search criteria.
    fn matches<P: Searchable + ?Sized>(&self, post: &P) -> bool;
}

/// Search posts by title (case-insensitive).
pub struct TitleSearcher {
    query: String,
}

impl TitleSearcher {
    /// Create a new title searcher with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }

    /// Get the lowercased search query.
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl PostSearcher for TitleSearcher {
    fn matches<P: Searchable + ?Sized>(&self, post: &P) -> bool {
        if self.query.is_empty() {
            return true;
        }
        post.title().to_lowercase().contains(&self.query)
    }
}

/// Search posts by body text (case-insensitive).
pub struct BodySearcher {
    query: String,
}

impl BodySearcher {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

impl PostSearcher for BodySearcher {
    fn matches<P: Searchable + ?Sized>(&self, post: &P) -> bool {
        if self.query.is_empty() {
            return true;
        }
        post.body().to_lowercase().contains(&self.query)
    }
}

/// Enum dispatch for searching posts by a specific field.
pub enum SearchBy {
    Title(TitleSearcher),
    Body(BodySearcher),
}

impl SearchBy {
    fn matches<P: Searchable + ?Sized>(&self, post: &P) -> bool {
        match self {
            Self::Title(s) => s.matches(post),
            Self::Body(s) => s.matches(post),
        }
    }
}

/// Composite searcher that matches if any sub-searcher matches.
pub struct CompositeSearcher {
    searchers: Vec<SearchBy>,
}

impl CompositeSearcher {
    /// Create an empty composite searcher (matches all posts).
    pub fn new() -> Self {
        Self {
            searchers: Vec::new(),
        }
    }

    /// Create a composite searcher over both title and body.
    pub fn all(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            searchers: vec![
                SearchBy::Title(TitleSearcher::new(query.clone())),
                SearchBy::Body(BodySearcher::new(query)),
            ],
        }
    }

    /// Add a searcher to the composite (builder pattern).
    pub fn with_search(mut self, searcher: SearchBy) -> Self {
        self.searchers.push(searcher);
        self
    }
}

impl Default for CompositeSearcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PostSearcher for CompositeSearcher {
    fn matches<P: Searchable + ?Sized>(&self, post: &P) -> bool {
        if self.searchers.is_empty() {
            return true;
        }
        self.searchers.iter().any(|searcher| searcher.matches(post))
    }
}

/// True when `query` is empty or occurs, ignoring case, in the post's title
/// or body.
pub fn matches<P: Searchable + ?Sized>(post: &P, query: &str) -> bool {
    CompositeSearcher::all(query).matches(post)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, body: &str) -> Post {
        Post::new(1, title, body)
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches(&post("", ""), ""));
        assert!(matches(&post("Rust", "ownership"), ""));
    }

    #[test]
    fn test_title_match_ignores_case() {
        let p = post("Learning Rust Ownership", "borrowing rules");
        assert!(matches(&p, "rust"));
        assert!(matches(&p, "OWNERSHIP"));
    }

    #[test]
    fn test_body_match() {
        let p = post("Weekly notes", "We discussed Lifetimes today");
        assert!(matches(&p, "lifetimes"));
        assert!(!matches(&p, "traits"));
    }

    #[test]
    fn test_no_token_or_fuzzy_matching() {
        let p = post("async runtime", "tokio");
        assert!(!matches(&p, "async tokio"));
        assert!(!matches(&p, "asnyc"));
    }

    #[test]
    fn test_matches_agrees_with_substring_definition() {
        let posts = [
            post("Alpha", "first"),
            post("beta", "Second ALPHA"),
            post("Gamma", "third"),
        ];
        for query in ["", "a", "alpha", "ALP", "second", "zzz", "ha"] {
            for p in &posts {
                let lowered = query.to_lowercase();
                let expected = query.is_empty()
                    || p.title.to_lowercase().contains(&lowered)
                    || p.body.to_lowercase().contains(&lowered);
                assert_eq!(matches(p, query), expected, "query {:?}", query);
            }
        }
    }

    #[test]
    fn test_single_field_searchers() {
        let p = post("title words", "body words");

        assert!(TitleSearcher::new("TITLE").matches(&p));
        assert!(!TitleSearcher::new("body").matches(&p));
        assert!(BodySearcher::new("body").matches(&p));
        assert_eq!(BodySearcher::new("BoDy").query(), "body");
    }

    #[test]
    fn test_composite_searcher_empty() {
        let searcher = CompositeSearcher::new();
        assert!(searcher.matches(&post("anything", "at all")));

        let searcher = CompositeSearcher::new().with_search(SearchBy::Title(TitleSearcher::new("x")));
        assert!(!searcher.matches(&post("abc", "xyz")));
    }

    #[test]
    fn test_authored_posts_are_searchable() {
        let p = AuthoredPost::new("Draft".into(), "Hidden Gem".into(), "me".into());
        assert!(matches(&p, "gem"));
    }
}
