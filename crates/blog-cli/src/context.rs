use crate::cli::Cli;
use blog_core::{AppConfig, BlogResult};
use blog_persistence::{JsonFileStore, ThemePreference};
use blog_remote::HttpPostSource;
use blog_view::ViewConfig;
use std::num::NonZeroUsize;
use std::sync::Arc;

pub struct CliContext {
    pub config: AppConfig,
    store: JsonFileStore,
}

impl CliContext {
    /// Resolve configuration: command-line flags, then the config file, then
    /// defaults.
    pub fn load(cli: &Cli) -> BlogResult<Self> {
        let mut config = match &cli.config {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load(),
        };
        if let Some(endpoint) = &cli.endpoint {
            config.endpoint = Some(endpoint.clone());
        }
        if let Some(store) = &cli.store {
            config.store_path = Some(store.clone());
        }

        let store = JsonFileStore::new(config.effective_store_path());
        tracing::debug!(
            "Using endpoint {} and store {}",
            config.effective_endpoint(),
            store.path().display()
        );

        Ok(Self { config, store })
    }

    pub fn store(&self) -> &JsonFileStore {
        &self.store
    }

    pub fn source(&self) -> BlogResult<Arc<HttpPostSource>> {
        let endpoint = self.config.effective_endpoint();
        let source = match self.config.effective_timeout() {
            Some(timeout) => HttpPostSource::with_timeout(endpoint, timeout)?,
            None => HttpPostSource::new(endpoint),
        };
        Ok(Arc::new(source))
    }

    pub fn author(&self) -> &str {
        self.config.effective_author()
    }

    /// View settings from the config file and the stored theme.
    pub async fn view_config(&self, page_size: Option<NonZeroUsize>) -> BlogResult<ViewConfig> {
        let theme = ThemePreference::new(&self.store).load().await?;
        let page_size = page_size.unwrap_or_else(|| self.config.effective_page_size());
        Ok(ViewConfig::new(page_size, theme))
    }
}
