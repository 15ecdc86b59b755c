pub mod cafe;
pub mod search;
pub mod viewer;

pub use cafe::{Cafe, CafeListResponse, Listing, RandomCafeResponse};
pub use search::{SearchMode, SearchQuery};
pub use viewer::Viewer;
