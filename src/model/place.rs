use serde::{Deserialize, Serialize};
use std::fmt;

pub const EARTH_RADIUS_MILES: f64 = 3959.0;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Great-circle distance on a sphere of radius [`EARTH_RADIUS_MILES`].
    #[must_use]
    pub fn distance_miles(&self, other: &Coordinates) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();
        let a = (d_lat / 2.0).sin().powi(2)
            + self.lat.to_radians().cos() * other.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_MILES * c
    }
}

/// Opaque provider key for a real-world venue.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PlaceId(pub String);

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "status", content = "place_id")]
pub enum PlaceMatch {
    Found(PlaceId),
    NotFound,
}

impl PlaceMatch {
    #[must_use]
    pub fn place_id(&self) -> Option<&PlaceId> {
        match self {
            PlaceMatch::Found(id) => Some(id),
            PlaceMatch::NotFound => None,
        }
    }
}

/// Opaque provider token redeemable for an image at a given width.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PhotoRef {
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

pub type PhotoSet = Vec<PhotoRef>;

/// One candidate returned by a place text search.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PlaceCandidate {
    pub place_id: PlaceId,
    pub location: Option<Coordinates>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextSearchRequest {
    pub query: String,
    pub location: Option<Coordinates>,
    pub radius_meters: u32,
}
