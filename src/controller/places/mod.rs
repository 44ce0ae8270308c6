pub mod client;
pub mod photos;
pub mod resolver;

use async_trait::async_trait;

use crate::error::LookupError;
use crate::model::{PhotoRef, PlaceCandidate, PlaceId, TextSearchRequest};

pub use client::*;
pub use photos::*;
pub use resolver::*;

/// The two provider calls the resolvers need. Implemented over HTTP by
/// [`GooglePlacesClient`]; tests swap in counting stubs.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Ranked candidates for a free-text query, best first.
    async fn text_search(
        &self,
        request: &TextSearchRequest,
    ) -> Result<Vec<PlaceCandidate>, LookupError>;

    /// Photo references attached to a place, in provider order.
    async fn place_photos(&self, place_id: &PlaceId) -> Result<Vec<PhotoRef>, LookupError>;
}
