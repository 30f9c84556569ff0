pub mod config;
pub mod error;
pub mod pagination;
pub mod result;

pub use config::AppConfig;
pub use error::{BlogError, FetchError};
pub use pagination::{paginate, Page, PageInfo, Paginated};
pub use result::BlogResult;
