use reqwest::Url;
use std::sync::Arc;
use tracing::warn;

use super::PlacesApi;
use crate::model::{PhotoRef, PhotoSet, PlaceId};

pub const DEFAULT_MAX_PHOTOS: usize = 5;
pub const PREVIEW_MAX_PHOTOS: usize = 1;
pub const DEFAULT_PHOTO_WIDTH: u32 = 800;

pub struct PhotoResolver {
    api: Arc<dyn PlacesApi>,
}

impl PhotoResolver {
    #[must_use]
    pub fn new(api: Arc<dyn PlacesApi>) -> Self {
        Self { api }
    }

    /// At most `max_count` photo references, empty on any provider failure.
    pub async fn photos(&self, place_id: &PlaceId, max_count: usize) -> PhotoSet {
        match self.api.place_photos(place_id).await {
            Ok(mut photos) => {
                photos.truncate(max_count);
                photos
            }
            Err(e) => {
                warn!(%place_id, error = %e, "photo lookup failed");
                Vec::new()
            }
        }
    }
}

/// Builds displayable image urls from photo references. No network involved.
#[derive(Debug, Clone)]
pub struct PhotoUrlBuilder {
    base_url: String,
    api_key: String,
}

impl PhotoUrlBuilder {
    #[must_use]
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    #[must_use]
    pub fn url(&self, photo: &PhotoRef, max_width: u32) -> Option<String> {
        photo_url(&self.base_url, photo, max_width, &self.api_key)
    }
}

/// Encoded image url for a photo reference, or `None` when `base_url` does
/// not parse as a url.
#[must_use]
pub fn photo_url(base_url: &str, photo: &PhotoRef, max_width: u32, api_key: &str) -> Option<String> {
    let endpoint = format!("{}/photo", base_url.trim_end_matches('/'));
    let params = [
        ("maxwidth", max_width.to_string()),
        ("photo_reference", photo.reference.clone()),
        ("key", api_key.to_string()),
    ];
    match Url::parse_with_params(&endpoint, &params) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            warn!(base_url, error = %e, "cannot build photo url");
            None
        }
    }
}
