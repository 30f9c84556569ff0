pub mod listing;
pub mod post;
pub mod profile;
pub mod route;
pub mod theme;
