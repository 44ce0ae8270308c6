use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::PlacesApi;
use crate::error::LookupError;
use crate::model::{Coordinates, PhotoRef, PlaceCandidate, PlaceId, TextSearchRequest};

pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct GooglePlacesClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GooglePlacesClient {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl PlacesApi for GooglePlacesClient {
    async fn text_search(
        &self,
        request: &TextSearchRequest,
    ) -> Result<Vec<PlaceCandidate>, LookupError> {
        let url = format!("{}/textsearch/json", self.base_url);
        let mut params = vec![
            ("query", request.query.clone()),
            ("key", self.api_key.clone()),
        ];
        if let Some(location) = request.location {
            params.push(("location", format!("{},{}", location.lat, location.lon)));
            params.push(("radius", request.radius_meters.to_string()));
        }

        debug!(query = %request.query, "places text search");
        let resp = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        let body: TextSearchResponse = resp.json().await?;
        body.into_candidates()
    }

    async fn place_photos(&self, place_id: &PlaceId) -> Result<Vec<PhotoRef>, LookupError> {
        let url = format!("{}/details/json", self.base_url);
        let params = [
            ("place_id", place_id.0.as_str()),
            ("fields", "photos"),
            ("key", self.api_key.as_str()),
        ];

        debug!(%place_id, "places details");
        let resp = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await?
            .error_for_status()?;
        let body: DetailsResponse = resp.json().await?;
        body.into_photos()
    }
}

#[derive(Deserialize)]
pub(crate) struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<TextSearchResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct TextSearchResult {
    place_id: String,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
pub(crate) struct DetailsResponse {
    status: String,
    #[serde(default)]
    result: Option<DetailsResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct DetailsResult {
    #[serde(default)]
    photos: Vec<PhotoJson>,
}

#[derive(Deserialize)]
struct PhotoJson {
    photo_reference: String,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
}

fn check_status(status: &str, error_message: Option<&str>) -> Result<bool, LookupError> {
    match status {
        "OK" => Ok(true),
        "ZERO_RESULTS" => Ok(false),
        other => Err(LookupError::Status(match error_message {
            Some(msg) => format!("{other}: {msg}"),
            None => other.to_string(),
        })),
    }
}

impl TextSearchResponse {
    pub(crate) fn into_candidates(self) -> Result<Vec<PlaceCandidate>, LookupError> {
        if !check_status(&self.status, self.error_message.as_deref())? {
            return Ok(Vec::new());
        }
        Ok(self
            .results
            .into_iter()
            .map(|r| PlaceCandidate {
                place_id: PlaceId(r.place_id),
                location: r.geometry.map(|g| Coordinates {
                    lat: g.location.lat,
                    lon: g.location.lng,
                }),
            })
            .collect())
    }
}

impl DetailsResponse {
    pub(crate) fn into_photos(self) -> Result<Vec<PhotoRef>, LookupError> {
        if !check_status(&self.status, self.error_message.as_deref())? {
            return Ok(Vec::new());
        }
        Ok(self
            .result
            .map(|r| r.photos)
            .unwrap_or_default()
            .into_iter()
            .map(|p| PhotoRef {
                reference: p.photo_reference,
                width: p.width,
                height: p.height,
            })
            .collect())
    }
}
