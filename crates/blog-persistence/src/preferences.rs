use crate::traits::KeyValueStore;
use blog_core::BlogResult;
use blog_domain::Theme;

pub const THEME_KEY: &str = "theme";

/// Reads and writes the persisted theme preference.
pub struct ThemePreference<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> ThemePreference<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The stored theme. Missing or unrecognized values read as the default.
    pub async fn load(&self) -> BlogResult<Theme> {
        let stored = self.store.get(THEME_KEY).await?;
        let theme = match stored.as_deref().map(str::parse::<Theme>) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                tracing::warn!("Ignoring stored theme: {}", e);
                Theme::default()
            }
            None => Theme::default(),
        };
        Ok(theme)
    }

    pub async fn save(&self, theme: Theme) -> BlogResult<()> {
        self.store.set(THEME_KEY, theme.as_str().to_string()).await
    }

    /// Flip between light and dark, persisting and returning the new theme.
    pub async fn toggle(&self) -> BlogResult<Theme> {
        let theme = self.load().await?.toggled();
        self.save(theme).await?;
        Ok(theme)
    }
}
