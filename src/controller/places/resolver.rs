use std::sync::Arc;
use tracing::{debug, warn};

use super::PlacesApi;
use crate::model::{Coordinates, PlaceMatch, TextSearchRequest};

pub const SEARCH_RADIUS_METERS: u32 = 5000;
pub const DEFAULT_MAX_MATCH_DISTANCE_MILES: f64 = 2.0;

/// Matches a course to a provider place by text search, biased toward the
/// course's coordinates when it has them.
pub struct PlaceResolver {
    api: Arc<dyn PlacesApi>,
    max_distance_miles: f64,
}

#[must_use]
pub fn search_query(name: &str, address: &str) -> String {
    format!("{name} golf course {address}")
}

impl PlaceResolver {
    #[must_use]
    pub fn new(api: Arc<dyn PlacesApi>, max_distance_miles: f64) -> Self {
        Self {
            api,
            max_distance_miles,
        }
    }

    #[must_use]
    pub fn max_distance_miles(&self) -> f64 {
        self.max_distance_miles
    }

    /// Only the first candidate is considered. With coordinates, a candidate
    /// further than the max distance is rejected; a candidate at exactly the
    /// max distance is kept. Every provider failure becomes `NotFound`.
    pub async fn resolve(
        &self,
        name: &str,
        address: &str,
        coordinates: Option<Coordinates>,
    ) -> PlaceMatch {
        let request = TextSearchRequest {
            query: search_query(name, address),
            location: coordinates,
            radius_meters: SEARCH_RADIUS_METERS,
        };

        let candidates = match self.api.text_search(&request).await {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(course = name, error = %e, "place search failed");
                return PlaceMatch::NotFound;
            }
        };

        let Some(first) = candidates.into_iter().next() else {
            debug!(course = name, "place search returned no candidates");
            return PlaceMatch::NotFound;
        };

        let Some(origin) = coordinates else {
            return PlaceMatch::Found(first.place_id);
        };

        let Some(location) = first.location else {
            warn!(course = name, place_id = %first.place_id, "candidate has no location");
            return PlaceMatch::NotFound;
        };

        let distance = origin.distance_miles(&location);
        if distance > self.max_distance_miles {
            debug!(
                course = name,
                place_id = %first.place_id,
                distance_miles = distance,
                "rejecting candidate, too far from course"
            );
            return PlaceMatch::NotFound;
        }

        PlaceMatch::Found(first.place_id)
    }
}
