#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;

use rusty_golf_guide::controller::places::PlacesApi;
use rusty_golf_guide::controller::repository::parse_courses;
use rusty_golf_guide::error::LookupError;
use rusty_golf_guide::model::{
    Coordinates, CourseRecord, CourseType, PhotoRef, PlaceCandidate, PlaceId, TextSearchRequest,
};

pub const DATASET: &str = include_str!("../../data/charlotte_courses.json");

pub fn dataset() -> Vec<CourseRecord> {
    parse_courses(DATASET).expect("bundled dataset should parse")
}

pub fn course(name: &str, weekday_price: f64, star_rating: f64, holes: u8, yardage: u32) -> CourseRecord {
    CourseRecord {
        name: name.to_string(),
        address: format!("{name} Rd, Charlotte, NC"),
        phone: "(704) 555-0000".to_string(),
        description: format!("{name} description"),
        designer: "Unknown".to_string(),
        course_type: CourseType::Public,
        year_opened: 1990,
        holes,
        par: if holes == 9 { 36 } else { 72 },
        yardage,
        slope: 120,
        rating: 70.0,
        weekday_price,
        weekend_price: weekday_price + 10.0,
        star_rating,
        driving_range: true,
        latitude: None,
        longitude: None,
    }
}

pub fn with_coordinates(mut course: CourseRecord, lat: f64, lon: f64) -> CourseRecord {
    course.latitude = Some(lat);
    course.longitude = Some(lon);
    course
}

pub fn names(courses: &[CourseRecord]) -> Vec<&str> {
    courses.iter().map(|c| c.name.as_str()).collect()
}

pub enum SearchBehavior {
    /// One candidate per query, id `place:<query>`, sitting on the search location.
    Echo,
    Fixed(Vec<PlaceCandidate>),
    Fail,
}

/// In-memory provider that counts and timestamps every call.
pub struct StubPlacesApi {
    pub search: SearchBehavior,
    pub photos_per_place: usize,
    pub fail_photos: bool,
    pub delay: Option<Duration>,
    pub search_calls: AtomicUsize,
    pub photo_calls: AtomicUsize,
    pub requests: Mutex<Vec<TextSearchRequest>>,
    pub call_times: Mutex<Vec<Instant>>,
}

impl StubPlacesApi {
    pub fn new(search: SearchBehavior) -> Self {
        Self {
            search,
            photos_per_place: 8,
            fail_photos: false,
            delay: None,
            search_calls: AtomicUsize::new(0),
            photo_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            call_times: Mutex::new(Vec::new()),
        }
    }

    pub fn searches(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn photo_lookups(&self) -> usize {
        self.photo_calls.load(Ordering::SeqCst)
    }

    async fn pause(&self) {
        self.call_times.lock().unwrap().push(Instant::now());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl PlacesApi for StubPlacesApi {
    async fn text_search(
        &self,
        request: &TextSearchRequest,
    ) -> Result<Vec<PlaceCandidate>, LookupError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.pause().await;
        match &self.search {
            SearchBehavior::Echo => Ok(vec![PlaceCandidate {
                place_id: PlaceId(format!("place:{}", request.query)),
                location: Some(request.location.unwrap_or(Coordinates { lat: 0.0, lon: 0.0 })),
            }]),
            SearchBehavior::Fixed(candidates) => Ok(candidates.clone()),
            SearchBehavior::Fail => Err(LookupError::Network("connection refused".to_string())),
        }
    }

    async fn place_photos(&self, place_id: &PlaceId) -> Result<Vec<PhotoRef>, LookupError> {
        self.photo_calls.fetch_add(1, Ordering::SeqCst);
        self.pause().await;
        if self.fail_photos {
            return Err(LookupError::Status("OVER_QUERY_LIMIT".to_string()));
        }
        Ok((0..self.photos_per_place)
            .map(|i| PhotoRef {
                reference: format!("{place_id}#{i}"),
                width: Some(1024),
                height: Some(768),
            })
            .collect())
    }
}
