//! Where the post collection comes from.
//!
//! [`CollectionSource`] is the seam the view layer depends on;
//! [`HttpPostSource`] is the production implementation.

pub mod http;
pub mod source;

pub use http::HttpPostSource;
pub use source::CollectionSource;
