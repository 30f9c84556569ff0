//! Binds a [`ListingController`] to a [`CollectionSource`].
//!
//! Each activation spawns exactly one fetch task. The task applies its result
//! through the controller's generation check, so a result from a superseded
//! or torn-down activation never touches current state.

use crate::listing::{Generation, ListingController, ListingSnapshot, ViewConfig};
use blog_core::BlogResult;
use blog_domain::{Post, PostId, Theme};
use blog_remote::CollectionSource;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub struct ListingSession<S: CollectionSource + 'static> {
    source: Arc<S>,
    controller: Arc<Mutex<ListingController>>,
    task: Option<JoinHandle<()>>,
}

impl<S: CollectionSource + 'static> ListingSession<S> {
    pub fn new(source: Arc<S>, config: ViewConfig) -> Self {
        Self {
            source,
            controller: Arc::new(Mutex::new(ListingController::new(config))),
            task: None,
        }
    }

    /// Start a new activation and its fetch. Must be called within a tokio
    /// runtime.
    pub fn activate(&mut self) -> Generation {
        self.cancel_fetch();
        let generation = self.controller.lock().activate();
        self.spawn_fetch(generation);
        generation
    }

    /// Activate with an initial search query, as when the listing is opened
    /// with a search parameter.
    pub fn activate_with_query(&mut self, query: impl Into<String>) -> Generation {
        let generation = self.activate();
        self.controller.lock().set_query(query);
        generation
    }

    fn spawn_fetch(&mut self, generation: Generation) {
        let source = Arc::clone(&self.source);
        let controller = Arc::clone(&self.controller);

        self.task = Some(tokio::spawn(async move {
            let result = source.fetch_all().await;
            controller.lock().complete(generation, result);
        }));
    }

    fn cancel_fetch(&mut self) {
        if let Some(task) = self.task.take() {
            if !task.is_finished() {
                tracing::debug!("Cancelling superseded fetch");
            }
            task.abort();
        }
    }

    /// Wait for the in-flight fetch, if any, to finish.
    pub async fn settle(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    tracing::error!("Listing fetch task failed: {}", e);
                }
            }
        }
    }

    /// Tear the view down. A fetch still in flight can no longer change state.
    pub fn teardown(&mut self) {
        self.cancel_fetch();
        self.controller.lock().deactivate();
    }

    pub fn is_fetching(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.controller.lock().set_query(query);
    }

    pub fn request_page(&self, page: usize) -> usize {
        self.controller.lock().request_page(page)
    }

    pub fn next_page(&self) -> usize {
        self.controller.lock().next_page()
    }

    pub fn prev_page(&self) -> usize {
        self.controller.lock().prev_page()
    }

    pub fn set_page_size(&self, page_size: NonZeroUsize) {
        self.controller.lock().set_page_size(page_size);
    }

    pub fn set_theme(&self, theme: Theme) {
        self.controller.lock().set_theme(theme);
    }

    pub fn snapshot(&self) -> ListingSnapshot {
        self.controller.lock().snapshot()
    }

    /// A single post for the detail view. Served from the loaded collection
    /// when possible, otherwise fetched on its own.
    pub async fn post_detail(&self, id: PostId) -> BlogResult<Post> {
        let cached = self.controller.lock().post(id).cloned();
        match cached {
            Some(post) => Ok(post),
            None => self.source.fetch_one(id).await,
        }
    }
}

impl<S: CollectionSource + 'static> Drop for ListingSession<S> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{LoadState, Notice};
    use async_trait::async_trait;
    use blog_core::{BlogError, FetchError};
    use mockall::mock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::watch;

    mock! {
        pub Source {}

        #[async_trait]
        impl CollectionSource for Source {
            async fn fetch_all(&self) -> Result<Vec<Post>, FetchError>;
            async fn fetch_one(&self, id: PostId) -> BlogResult<Post>;
        }
    }

    fn posts(n: i64) -> Vec<Post> {
        (1..=n)
            .map(|id| Post::new(id, format!("Post {}", id), "body".to_string()))
            .collect()
    }

    /// Source whose fetches block until released. Call `n` answers with
    /// `responses[n]`.
    struct GatedSource {
        calls: AtomicUsize,
        release: watch::Receiver<bool>,
        responses: Vec<Result<Vec<Post>, FetchError>>,
    }

    impl GatedSource {
        fn new(responses: Vec<Result<Vec<Post>, FetchError>>) -> (Arc<Self>, watch::Sender<bool>) {
            let (tx, rx) = watch::channel(false);
            let source = Arc::new(Self {
                calls: AtomicUsize::new(0),
                release: rx,
                responses,
            });
            (source, tx)
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        async fn wait_for_calls(&self, n: usize) {
            while self.calls() < n {
                tokio::task::yield_now().await;
            }
        }
    }

    #[async_trait]
    impl CollectionSource for GatedSource {
        async fn fetch_all(&self) -> Result<Vec<Post>, FetchError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let mut release = self.release.clone();
            let _ = release.wait_for(|released| *released).await;
            self.responses[call].clone()
        }

        async fn fetch_one(&self, id: PostId) -> BlogResult<Post> {
            Err(BlogError::NotFound(format!("Post {}", id)))
        }
    }

    #[tokio::test]
    async fn test_activation_fetches_once_and_loads() {
        let mut source = MockSource::new();
        source.expect_fetch_all().times(1).returning(|| Ok(posts(25)));

        let mut session = ListingSession::new(Arc::new(source), ViewConfig::default());
        session.activate();
        session.settle().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, LoadState::Loaded);
        assert_eq!(snapshot.total_pages, 3);
        assert_eq!(snapshot.items.len(), 10);

        assert_eq!(session.request_page(3), 3);
        assert_eq!(session.snapshot().items.len(), 5);
    }

    #[tokio::test]
    async fn test_fetch_failure_shows_empty_failed_view() {
        let mut source = MockSource::new();
        source
            .expect_fetch_all()
            .times(1)
            .returning(|| Err(FetchError::network("connection refused")));

        let mut session = ListingSession::new(Arc::new(source), ViewConfig::default());
        session.activate();
        session.settle().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, LoadState::Failed);
        assert!(snapshot.items.is_empty());
        assert_eq!(snapshot.total_pages, 1);
        assert_eq!(snapshot.notice, Some(Notice::CouldNotLoad));
    }

    #[tokio::test]
    async fn test_activate_with_query() {
        let mut source = MockSource::new();
        source.expect_fetch_all().returning(|| Ok(posts(30)));

        let mut session = ListingSession::new(Arc::new(source), ViewConfig::default());
        session.activate_with_query("post 2");
        session.settle().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.query, "post 2");
        // post 2, 20..=29
        assert_eq!(snapshot.total_matches, 11);
        assert_eq!(snapshot.current_page, 1);
    }

    #[tokio::test]
    async fn test_stays_loading_while_fetch_pending() {
        let (source, _release) = GatedSource::new(vec![Ok(posts(5))]);
        let mut session = ListingSession::new(source.clone(), ViewConfig::default());

        session.activate();
        source.wait_for_calls(1).await;

        assert!(session.is_fetching());
        session.set_query("anything");
        assert_eq!(session.request_page(2), 1);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, LoadState::Loading);
        assert!(snapshot.is_loading);
        assert!(snapshot.items.is_empty());
    }

    #[tokio::test]
    async fn test_reactivation_supersedes_first_fetch() {
        let (source, release) = GatedSource::new(vec![Ok(posts(3)), Ok(posts(7))]);
        let mut session = ListingSession::new(source.clone(), ViewConfig::default());

        session.activate();
        source.wait_for_calls(1).await;
        let second = session.activate();
        source.wait_for_calls(2).await;

        release.send(true).unwrap();
        session.settle().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, LoadState::Loaded);
        assert_eq!(snapshot.total_matches, 7);
        assert_eq!(second.value(), 2);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_teardown_discards_late_result() {
        let (source, release) = GatedSource::new(vec![Ok(posts(3))]);
        let mut session = ListingSession::new(source.clone(), ViewConfig::default());

        session.activate();
        source.wait_for_calls(1).await;
        session.teardown();

        release.send(true).unwrap();
        session.settle().await;
        tokio::task::yield_now().await;

        let snapshot = session.snapshot();
        assert_eq!(snapshot.state, LoadState::Idle);
        assert_eq!(snapshot.total_matches, 0);
        assert!(!session.is_fetching());
    }

    #[tokio::test]
    async fn test_post_detail_prefers_loaded_collection() {
        let mut source = MockSource::new();
        source.expect_fetch_all().returning(|| Ok(posts(3)));
        source
            .expect_fetch_one()
            .withf(|id| *id == 42)
            .times(1)
            .returning(|id| Ok(Post::new(id, "remote", "fetched")));

        let mut session = ListingSession::new(Arc::new(source), ViewConfig::default());
        session.activate();
        session.settle().await;

        assert_eq!(session.post_detail(2).await.unwrap().title, "Post 2");
        assert_eq!(session.post_detail(42).await.unwrap().title, "remote");
    }

    #[tokio::test]
    async fn test_theme_and_page_size_updates() {
        let mut source = MockSource::new();
        source.expect_fetch_all().returning(|| Ok(posts(12)));

        let mut session = ListingSession::new(Arc::new(source), ViewConfig::default());
        session.activate();
        session.settle().await;

        session.set_theme(Theme::Dark);
        session.set_page_size(NonZeroUsize::new(5).unwrap());
        assert_eq!(session.next_page(), 2);
        assert_eq!(session.prev_page(), 1);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.theme, Theme::Dark);
        assert_eq!(snapshot.total_pages, 3);
    }
}
