//! Where the listing controller gets its cafes from.

use async_trait::async_trait;

use crate::error::ClientError;
use crate::models::{Listing, SearchQuery};

#[async_trait]
pub trait CafeSource: Send + Sync {
    /// The full collection, as served by `/all`.
    async fn fetch_all(&self) -> Result<Listing, ClientError>;

    /// A filtered subset from `/search_name` or `/search_loc`.
    async fn search(&self, query: &SearchQuery) -> Result<Listing, ClientError>;
}
