pub mod journal;
pub mod preferences;
pub mod store;
pub mod traits;

pub use journal::{PostJournal, BLOGS_KEY};
pub use preferences::{ThemePreference, THEME_KEY};
pub use store::*;
pub use traits::*;
