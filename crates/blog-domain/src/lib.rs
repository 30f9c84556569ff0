pub mod post;
pub mod route;
pub mod search;
pub mod theme;

pub use post::{AuthoredPost, AuthoredPostId, Post, PostId};
pub use route::Route;
pub use search::{matches, CompositeSearcher, PostSearcher, SearchBy, Searchable};
pub use theme::Theme;
