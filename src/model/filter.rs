use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::model::CourseRecord;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HoleFilter {
    #[default]
    Any,
    Nine,
    Eighteen,
}

impl HoleFilter {
    #[must_use]
    pub fn accepts(self, holes: u8) -> bool {
        match self {
            HoleFilter::Any => true,
            HoleFilter::Nine => holes == 9,
            HoleFilter::Eighteen => holes == 18,
        }
    }

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            HoleFilter::Any => "all",
            HoleFilter::Nine => "9",
            HoleFilter::Eighteen => "18",
        }
    }
}

impl FromStr for HoleFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" | "any" => Ok(HoleFilter::Any),
            "9" => Ok(HoleFilter::Nine),
            "18" => Ok(HoleFilter::Eighteen),
            other => Err(format!("holes must be one of all, 9, 18; got '{other}'")),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    NameAsc,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    YardageDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::NameAsc,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::RatingDesc,
        SortKey::YardageDesc,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::RatingDesc => "Rating: High to Low",
            SortKey::YardageDesc => "Yardage: Long to Short",
        }
    }

    #[must_use]
    pub fn as_param(self) -> &'static str {
        match self {
            SortKey::NameAsc => "name",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::RatingDesc => "rating",
            SortKey::YardageDesc => "yardage",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_param() == s.trim())
            .ok_or_else(|| format!("unknown sort key '{s}'"))
    }
}

/// Conjunctive filter over a course list. Each field left at its no-op value
/// lets every record through.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FilterSpec {
    pub search: Option<String>,
    pub price_min: f64,
    pub price_max: f64,
    pub min_stars: f64,
    pub holes: HoleFilter,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search: None,
            price_min: 0.0,
            price_max: f64::INFINITY,
            min_stars: 1.0,
            holes: HoleFilter::Any,
        }
    }
}

impl FilterSpec {
    /// The no-op filter for a dataset, with the price range spanning the data.
    #[must_use]
    pub fn unconstrained(records: &[CourseRecord]) -> Self {
        let bounds = PriceBounds::of(records);
        Self {
            price_min: bounds.min,
            price_max: bounds.max,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn matches(&self, course: &CourseRecord) -> bool {
        self.matches_name(course)
            && course.weekday_price >= self.price_min
            && course.weekday_price <= self.price_max
            && course.star_rating >= self.min_stars
            && self.holes.accepts(course.holes)
    }

    fn matches_name(&self, course: &CourseRecord) -> bool {
        match self.search.as_deref() {
            None | Some("") => true,
            Some(needle) => course
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
        }
    }
}

/// Cheapest and priciest weekday rate in a dataset.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    #[must_use]
    pub fn of(records: &[CourseRecord]) -> Self {
        let mut prices = records.iter().map(|c| c.weekday_price);
        match prices.next() {
            None => Self { min: 0.0, max: 0.0 },
            Some(first) => prices.fold(Self { min: first, max: first }, |b, p| Self {
                min: b.min.min(p),
                max: b.max.max(p),
            }),
        }
    }
}
