use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Coordinates;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CourseRecord {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub description: String,
    pub designer: String,
    pub course_type: CourseType,
    pub year_opened: i32,
    pub holes: u8,
    pub par: u32,
    pub yardage: u32,
    pub slope: u32,
    pub rating: f64,
    pub weekday_price: f64,
    pub weekend_price: f64,
    pub star_rating: f64,
    pub driving_range: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Every field a dataset record has to carry; only the coordinates are optional.
pub const REQUIRED_FIELDS: &[&str] = &[
    "name",
    "address",
    "phone",
    "description",
    "designer",
    "course_type",
    "year_opened",
    "holes",
    "par",
    "yardage",
    "slope",
    "rating",
    "weekday_price",
    "weekend_price",
    "star_rating",
    "driving_range",
];

impl CourseRecord {
    /// Coordinates only when both halves are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
            _ => None,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` with a reason if the record breaks a dataset rule
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name is empty".to_string());
        }
        if self.holes != 9 && self.holes != 18 {
            return Err(format!("holes must be 9 or 18, got {}", self.holes));
        }
        if self.yardage == 0 {
            return Err("yardage must be positive".to_string());
        }
        if self.weekday_price < 0.0 || self.weekend_price < 0.0 {
            return Err("prices cannot be negative".to_string());
        }
        if !(1.0..=5.0).contains(&self.star_rating) {
            return Err(format!(
                "star_rating must be within 1.0 and 5.0, got {}",
                self.star_rating
            ));
        }
        if (self.star_rating * 2.0).fract() != 0.0 {
            return Err(format!(
                "star_rating must be a whole or half star, got {}",
                self.star_rating
            ));
        }
        if self.latitude.is_some() != self.longitude.is_some() {
            return Err("latitude and longitude must be given together".to_string());
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum CourseType {
    Public,
    Municipal,
    SemiPrivate,
    Resort,
    Private,
    Other(String),
}

impl From<String> for CourseType {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => CourseType::Public,
            "municipal" => CourseType::Municipal,
            "semi-private" | "semi private" | "semiprivate" => CourseType::SemiPrivate,
            "resort" => CourseType::Resort,
            "private" => CourseType::Private,
            _ => CourseType::Other(s),
        }
    }
}

impl From<CourseType> for String {
    fn from(t: CourseType) -> Self {
        t.to_string()
    }
}

impl fmt::Display for CourseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseType::Public => write!(f, "Public"),
            CourseType::Municipal => write!(f, "Municipal"),
            CourseType::SemiPrivate => write!(f, "Semi-Private"),
            CourseType::Resort => write!(f, "Resort"),
            CourseType::Private => write!(f, "Private"),
            CourseType::Other(s) => write!(f, "{s}"),
        }
    }
}
