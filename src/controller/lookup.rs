use futures::{StreamExt, stream};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::clock::Clock;
use crate::controller::cache::{LOOKUP_CACHE_DURATION, LookupCache};
use crate::controller::pacer::{DEFAULT_CALL_INTERVAL, Pacer};
use crate::controller::places::{
    DEFAULT_MAX_MATCH_DISTANCE_MILES, DEFAULT_PHOTO_WIDTH, GooglePlacesClient, PREVIEW_MAX_PHOTOS,
    PhotoResolver, PhotoUrlBuilder, PlaceResolver, PlacesApi,
};
use crate::error::ConfigError;
use crate::model::{CourseRecord, PhotoSet, PlaceId, PlaceMatch};

#[derive(Debug, Clone)]
pub struct LookupSettings {
    pub ttl: chrono::Duration,
    pub call_interval: Duration,
    pub max_distance_miles: f64,
    pub preview_concurrency: usize,
    pub photo_width: u32,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            ttl: LOOKUP_CACHE_DURATION,
            call_interval: DEFAULT_CALL_INTERVAL,
            max_distance_miles: DEFAULT_MAX_MATCH_DISTANCE_MILES,
            preview_concurrency: 1,
            photo_width: DEFAULT_PHOTO_WIDTH,
        }
    }
}

/// What the gallery can show for one course.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CoursePhotos {
    Disabled { reason: String },
    NotFound,
    Photos { place_id: PlaceId, urls: Vec<String> },
}

impl CoursePhotos {
    #[must_use]
    pub fn urls(&self) -> &[String] {
        match self {
            CoursePhotos::Photos { urls, .. } => urls,
            _ => &[],
        }
    }
}

/// Cache key for a place lookup: the full resolver input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlaceKey {
    name: String,
    address: String,
    coordinates: Option<(u64, u64)>,
}

impl PlaceKey {
    #[must_use]
    pub fn for_course(course: &CourseRecord) -> Self {
        Self {
            name: course.name.clone(),
            address: course.address.clone(),
            coordinates: course
                .coordinates()
                .map(|c| (c.lat.to_bits(), c.lon.to_bits())),
        }
    }
}

struct EnabledLookup {
    places: PlaceResolver,
    photos: PhotoResolver,
    urls: PhotoUrlBuilder,
    place_cache: LookupCache<PlaceKey, PlaceMatch>,
    photo_cache: LookupCache<(PlaceId, usize), PhotoSet>,
    pacer: Pacer,
    settings: LookupSettings,
}

enum LookupState {
    Disabled(ConfigError),
    Enabled(Box<EnabledLookup>),
}

/// Course → place → photos, with every provider call cached and paced.
pub struct CourseLookup {
    state: LookupState,
}

impl CourseLookup {
    #[must_use]
    pub fn new(
        api: Arc<dyn PlacesApi>,
        urls: PhotoUrlBuilder,
        settings: LookupSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let enabled = EnabledLookup {
            places: PlaceResolver::new(api.clone(), settings.max_distance_miles),
            photos: PhotoResolver::new(api),
            urls,
            place_cache: LookupCache::new("place", settings.ttl, clock.clone()),
            photo_cache: LookupCache::new("photos", settings.ttl, clock),
            pacer: Pacer::new(settings.call_interval),
            settings,
        };
        Self {
            state: LookupState::Enabled(Box::new(enabled)),
        }
    }

    #[must_use]
    pub fn disabled(reason: ConfigError) -> Self {
        Self {
            state: LookupState::Disabled(reason),
        }
    }

    /// Wires the http client when an api key is present, otherwise comes up
    /// disabled.
    #[must_use]
    pub fn from_config(
        api_key: Option<&str>,
        base_url: &str,
        settings: LookupSettings,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let Some(api_key) = api_key.map(str::trim).filter(|k| !k.is_empty()) else {
            warn!("{}; course photos are disabled", ConfigError::MissingApiKey);
            return Self::disabled(ConfigError::MissingApiKey);
        };
        match GooglePlacesClient::new(base_url, api_key) {
            Ok(client) => {
                info!(base_url, "course photo lookups enabled");
                Self::new(
                    Arc::new(client),
                    PhotoUrlBuilder::new(base_url, api_key),
                    settings,
                    clock,
                )
            }
            Err(e) => {
                let reason = ConfigError::HttpClient(e.to_string());
                warn!("{reason}; course photos are disabled");
                Self::disabled(reason)
            }
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        matches!(self.state, LookupState::Enabled(_))
    }

    #[must_use]
    pub fn disabled_reason(&self) -> Option<&ConfigError> {
        match &self.state {
            LookupState::Disabled(reason) => Some(reason),
            LookupState::Enabled(_) => None,
        }
    }

    fn enabled(&self) -> Result<&EnabledLookup, ConfigError> {
        match &self.state {
            LookupState::Enabled(enabled) => Ok(enabled),
            LookupState::Disabled(reason) => Err(reason.clone()),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` only when lookups are disabled by configuration
    pub async fn resolve_place(&self, course: &CourseRecord) -> Result<PlaceMatch, ConfigError> {
        let lookup = self.enabled()?;
        let key = PlaceKey::for_course(course);
        let matched = lookup
            .place_cache
            .get_or_fetch(key, move || async move {
                lookup.pacer.wait_turn().await;
                lookup
                    .places
                    .resolve(&course.name, &course.address, course.coordinates())
                    .await
            })
            .await;
        Ok(matched)
    }

    /// # Errors
    ///
    /// Will return `Err` only when lookups are disabled by configuration
    pub async fn place_photos(
        &self,
        place_id: &PlaceId,
        max_count: usize,
    ) -> Result<PhotoSet, ConfigError> {
        let lookup = self.enabled()?;
        let photos = lookup
            .photo_cache
            .get_or_fetch((place_id.clone(), max_count), move || async move {
                lookup.pacer.wait_turn().await;
                lookup.photos.photos(place_id, max_count).await
            })
            .await;
        Ok(photos)
    }

    pub async fn course_photos(&self, course: &CourseRecord, max_count: usize) -> CoursePhotos {
        let lookup = match self.enabled() {
            Ok(lookup) => lookup,
            Err(reason) => {
                return CoursePhotos::Disabled {
                    reason: reason.to_string(),
                };
            }
        };
        let place_id = match self.resolve_place(course).await {
            Ok(PlaceMatch::Found(place_id)) => place_id,
            Ok(PlaceMatch::NotFound) => return CoursePhotos::NotFound,
            Err(reason) => {
                return CoursePhotos::Disabled {
                    reason: reason.to_string(),
                };
            }
        };
        let photos = self
            .place_photos(&place_id, max_count)
            .await
            .unwrap_or_default();
        let urls = photos
            .iter()
            .filter_map(|p| lookup.urls.url(p, lookup.settings.photo_width))
            .collect();
        CoursePhotos::Photos { place_id, urls }
    }

    /// One preview photo per course, in the order given. Calls are capped at
    /// the configured concurrency and spaced by the pacer.
    pub async fn preview(&self, courses: &[CourseRecord]) -> Vec<(String, CoursePhotos)> {
        let concurrency = match &self.state {
            LookupState::Enabled(lookup) => lookup.settings.preview_concurrency.max(1),
            LookupState::Disabled(_) => 1,
        };
        stream::iter(courses)
            .map(|course| async move {
                let photos = self.course_photos(course, PREVIEW_MAX_PHOTOS).await;
                (course.name.clone(), photos)
            })
            .buffered(concurrency)
            .collect()
            .await
    }
}
