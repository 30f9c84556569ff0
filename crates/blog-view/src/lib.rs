pub mod listing;
pub mod profile;
pub mod session;

pub use listing::{Generation, ListingController, ListingSnapshot, LoadState, Notice, ViewConfig};
pub use profile::{ProfileSnapshot, ProfileView};
pub use session::ListingSession;
