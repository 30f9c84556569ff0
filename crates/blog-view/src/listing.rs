//! State of the paginated, searchable post listing.
//!
//! [`ListingController`] owns the fetched collection, the search query and the
//! pagination state. Every mutating entry point recomputes the filtered view
//! and the page before returning, so readers never observe stale derived
//! state.

use blog_core::config::DEFAULT_PAGE_SIZE;
use blog_core::{FetchError, Page, PageInfo};
use blog_domain::search::{CompositeSearcher, PostSearcher};
use blog_domain::{Post, PostId, Theme};
use serde::Serialize;
use std::num::NonZeroUsize;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    /// Not activated.
    Idle,
    /// Fetch in flight.
    Loading,
    Loaded,
    Failed,
}

/// Tag identifying one activation. Fetch results carrying an older tag are
/// discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Presentation settings handed to the controller at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    pub page_size: NonZeroUsize,
    pub theme: Theme,
}

impl ViewConfig {
    pub fn new(page_size: NonZeroUsize, theme: Theme) -> Self {
        Self { page_size, theme }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, Theme::default())
    }
}

/// Why the listing has nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// The fetch failed.
    CouldNotLoad,
    /// Posts exist but none match the query.
    NoResults,
    /// The collection itself is empty.
    NoPosts,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Self::CouldNotLoad => FetchError::USER_MESSAGE,
            Self::NoResults => "No results for this search",
            Self::NoPosts => "No Blogs Found",
        }
    }
}

/// Owned copy of everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingSnapshot {
    pub state: LoadState,
    pub query: String,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub items: Vec<Post>,
    pub is_loading: bool,
    pub is_error: bool,
    pub theme: Theme,
    pub notice: Option<Notice>,
    pub message: Option<&'static str>,
}

#[derive(Debug, Clone)]
pub struct ListingController {
    config: ViewConfig,
    state: LoadState,
    generation: Generation,
    posts: Vec<Post>,
    query: String,
    /// Indices into `posts` matching `query`, in collection order.
    matches: Vec<usize>,
    page: Page,
}

impl ListingController {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            state: LoadState::Idle,
            generation: Generation(0),
            posts: Vec::new(),
            query: String::new(),
            matches: Vec::new(),
            page: Page::new(0, config.page_size),
        }
    }

    /// Start a new activation: drop any previous data, reset the query and
    /// page, and enter `Loading`. The returned generation must accompany the
    /// fetch result passed to [`complete`](Self::complete).
    pub fn activate(&mut self) -> Generation {
        self.generation = self.generation.next();
        self.reset_to_defaults();
        self.state = LoadState::Loading;
        info!("Activated listing (generation {})", self.generation.value());
        self.generation
    }

    /// Apply a fetch result. Returns false, changing nothing, when the result
    /// belongs to a superseded activation or the controller is not loading.
    pub fn complete(&mut self, generation: Generation, result: Result<Vec<Post>, FetchError>) -> bool {
        if generation != self.generation || self.state != LoadState::Loading {
            warn!(
                "Discarding fetch result for generation {} (current {}, {:?})",
                generation.value(),
                self.generation.value(),
                self.state
            );
            return false;
        }

        match result {
            Ok(posts) => {
                info!("Loaded {} posts", posts.len());
                self.posts = posts;
                self.state = LoadState::Loaded;
            }
            Err(e) => {
                warn!("Listing fetch failed: {}", e);
                self.posts.clear();
                self.state = LoadState::Failed;
            }
        }
        self.refresh();
        true
    }

    /// Tear down the current activation. Pending fetch results become stale.
    pub fn deactivate(&mut self) {
        self.generation = self.generation.next();
        self.reset_to_defaults();
        self.state = LoadState::Idle;
        debug!("Deactivated listing");
    }

    /// Replace the search query. Always returns to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page.reset();
        self.refresh();
    }

    /// Move to `page`, clamped into range. Returns the page selected.
    pub fn request_page(&mut self, page: usize) -> usize {
        let selected = self.page.request_page(page);
        debug!("Requested page {}, showing {}", page, selected);
        selected
    }

    pub fn next_page(&mut self) -> usize {
        self.page.next_page()
    }

    pub fn prev_page(&mut self) -> usize {
        self.page.prev_page()
    }

    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.config.page_size = page_size;
        self.page.set_page_size(page_size);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.config.theme = theme;
    }

    pub fn update_config(&mut self, config: ViewConfig) {
        self.set_theme(config.theme);
        self.set_page_size(config.page_size);
    }

    fn reset_to_defaults(&mut self) {
        self.posts.clear();
        self.query.clear();
        self.page = Page::new(0, self.config.page_size);
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
        self.page.set_total_items(self.matches.len());
        debug!(
            "Query {:?} matches {} of {} posts ({} pages)",
            self.query,
            self.matches.len(),
            self.posts.len(),
            self.page.total_pages()
        );
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn config(&self) -> ViewConfig {
        self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn is_error(&self) -> bool {
        self.state == LoadState::Failed
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn total_pages(&self) -> usize {
        self.page.total_pages()
    }

    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    pub fn page_info(&self) -> PageInfo {
        self.page.info()
    }

    /// Posts on the current page, in collection order.
    pub fn page_items(&self) -> impl Iterator<Item = &Post> + '_ {
        self.matches[self.page.info().range()]
            .iter()
            .map(|&idx| &self.posts[idx])
    }

    /// Look up a loaded post regardless of the current query.
    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    pub fn notice(&self) -> Option<Notice> {
        match self.state {
            LoadState::Failed => Some(Notice::CouldNotLoad),
            LoadState::Loaded if self.matches.is_empty() => {
                if self.query.is_empty() {
                    Some(Notice::NoPosts)
                } else {
                    Some(Notice::NoResults)
                }
            }
            _ => None,
        }
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        let notice = self.notice();
        ListingSnapshot {
            state: self.state,
            query: self.query.clone(),
            current_page: self.current_page(),
            total_pages: self.total_pages(),
            total_matches: self.total_matches(),
            items: self.page_items().cloned().collect(),
            is_loading: self.is_loading(),
            is_error: self.is_error(),
            theme: self.config.theme,
            notice,
            message: notice.map(Notice::message),
        }
    }
}

impl Default for ListingController {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(n: i64) -> Vec<Post> {
        (1..=n)
            .map(|id| Post::new(id, format!("Post {}", id), format!("Body of post {}", id)))
            .collect()
    }

    fn loaded(items: Vec<Post>) -> ListingController {
        let mut controller = ListingController::default();
        let generation = controller.activate();
        assert!(controller.complete(generation, Ok(items)));
        controller
    }

    fn ids(controller: &ListingController) -> Vec<PostId> {
        controller.page_items().map(|p| p.id).collect()
    }

    #[test]
    fn test_starts_idle() {
        let controller = ListingController::default();
        assert_eq!(controller.state(), LoadState::Idle);
        assert_eq!(controller.total_pages(), 1);
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.notice(), None);
    }

    #[test]
    fn test_three_pages_of_twenty_five() {
        let mut controller = loaded(posts(25));

        assert_eq!(controller.state(), LoadState::Loaded);
        assert_eq!(controller.total_pages(), 3);
        assert_eq!(ids(&controller), (1..=10).collect::<Vec<_>>());

        assert_eq!(controller.request_page(3), 3);
        assert_eq!(ids(&controller), (21..=25).collect::<Vec<_>>());
    }

    #[test]
    fn test_request_beyond_last_page_clamps() {
        let mut controller = loaded(posts(25));
        assert_eq!(controller.request_page(5), 3);
        assert_eq!(controller.current_page(), 3);
        assert_eq!(controller.request_page(0), 1);
    }

    #[test]
    fn test_query_narrows_and_resets_page() {
        let mut items = posts(25);
        // Twelve of the posts mention rust
        for post in items.iter_mut().filter(|p| p.id % 2 == 0) {
            post.body.push_str(" about Rust");
        }
        let mut controller = loaded(items);
        controller.request_page(3);

        controller.set_query("rust");

        assert_eq!(controller.total_matches(), 12);
        assert_eq!(controller.total_pages(), 2);
        assert_eq!(controller.current_page(), 1);
        assert_eq!(ids(&controller), vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20]);
    }

    #[test]
    fn test_every_query_change_returns_to_first_page() {
        let mut controller = loaded(posts(40));
        for query in ["", "post", "1", "", "body", "nothing matches this"] {
            controller.request_page(4);
            controller.set_query(query);
            assert_eq!(controller.current_page(), 1, "query {:?}", query);
        }
    }

    #[test]
    fn test_page_request_keeps_query() {
        let mut controller = loaded(posts(30));
        controller.set_query("post");
        controller.request_page(2);
        assert_eq!(controller.query(), "post");
    }

    #[test]
    fn test_fetch_failure() {
        let mut controller = ListingController::default();
        let generation = controller.activate();
        assert!(controller.complete(generation, Err(FetchError::status(502))));

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, LoadState::Failed);
        assert!(snapshot.is_error);
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total_pages, 1);
        assert_eq!(snapshot.notice, Some(Notice::CouldNotLoad));
        assert_eq!(snapshot.message, Some("Couldn't load blogs"));
    }

    #[test]
    fn test_empty_collection() {
        let controller = loaded(Vec::new());
        let snapshot = controller.snapshot();

        assert_eq!(snapshot.state, LoadState::Loaded);
        assert_eq!(snapshot.total_pages, 1);
        assert_eq!(snapshot.current_page, 1);
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.message, Some("No Blogs Found"));
    }

    #[test]
    fn test_no_results_notice() {
        let mut controller = loaded(posts(5));
        controller.set_query("zebra");
        assert_eq!(controller.notice(), Some(Notice::NoResults));
        assert_eq!(controller.total_pages(), 1);
    }

    #[test]
    fn test_stale_generation_is_discarded() {
        let mut controller = ListingController::default();
        let first = controller.activate();
        let second = controller.activate();

        assert!(!controller.complete(first, Ok(posts(3))));
        assert_eq!(controller.state(), LoadState::Loading);
        assert_eq!(controller.total_matches(), 0);

        assert!(controller.complete(second, Ok(posts(4))));
        assert_eq!(controller.total_matches(), 4);
    }

    #[test]
    fn test_result_after_deactivate_is_discarded() {
        let mut controller = ListingController::default();
        let generation = controller.activate();
        controller.deactivate();

        assert!(!controller.complete(generation, Ok(posts(3))));
        assert_eq!(controller.state(), LoadState::Idle);
    }

    #[test]
    fn test_duplicate_completion_is_ignored() {
        let mut controller = ListingController::default();
        let generation = controller.activate();
        assert!(controller.complete(generation, Ok(posts(3))));
        assert!(!controller.complete(generation, Err(FetchError::status(500))));
        assert_eq!(controller.state(), LoadState::Loaded);
    }

    #[test]
    fn test_loading_allows_interaction() {
        let mut controller = ListingController::default();
        let generation = controller.activate();

        controller.set_query("post 1");
        assert_eq!(controller.request_page(4), 1);
        assert!(controller.is_loading());
        assert_eq!(controller.notice(), None);

        controller.complete(generation, Ok(posts(25)));
        // post 1, 10..=19
        assert_eq!(controller.total_matches(), 11);
        assert_eq!(controller.query(), "post 1");
    }

    #[test]
    fn test_reactivation_resets_query_and_page() {
        let mut controller = loaded(posts(30));
        controller.set_query("post");
        controller.request_page(2);

        controller.activate();
        assert_eq!(controller.query(), "");
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.total_matches(), 0);
    }

    #[test]
    fn test_page_size_change_reclamps() {
        let mut controller = loaded(posts(25));
        controller.request_page(3);

        controller.set_page_size(NonZeroUsize::new(25).unwrap());
        assert_eq!(controller.total_pages(), 1);
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.page_items().count(), 25);
    }

    #[test]
    fn test_theme_update() {
        let mut controller = ListingController::default();
        controller.update_config(ViewConfig::new(NonZeroUsize::new(5).unwrap(), Theme::Dark));

        assert_eq!(controller.snapshot().theme, Theme::Dark);
        assert_eq!(controller.config().page_size.get(), 5);
    }

    #[test]
    fn test_post_lookup_ignores_query() {
        let mut controller = loaded(posts(12));
        controller.set_query("post 3");
        assert_eq!(controller.post(7).map(|p| p.id), Some(7));
        assert!(controller.post(99).is_none());
    }
}
