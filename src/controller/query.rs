use std::cmp::Ordering;

use crate::model::{CourseRecord, FilterSpec, SortKey};

/// Filtered and ordered copy of `records`. The input is left as is; equal
/// keys keep their load order, for descending keys too.
#[must_use]
pub fn query(records: &[CourseRecord], filter: &FilterSpec, sort: SortKey) -> Vec<CourseRecord> {
    let mut visible: Vec<CourseRecord> = records
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect();
    sort_courses(&mut visible, sort);
    visible
}

/// Stable in-place sort by a single key.
pub fn sort_courses(courses: &mut [CourseRecord], sort: SortKey) {
    courses.sort_by(|a, b| compare(a, b, sort));
}

fn compare(a: &CourseRecord, b: &CourseRecord, sort: SortKey) -> Ordering {
    match sort {
        SortKey::NameAsc => a.name.cmp(&b.name),
        SortKey::PriceAsc => a.weekday_price.total_cmp(&b.weekday_price),
        SortKey::PriceDesc => b.weekday_price.total_cmp(&a.weekday_price),
        SortKey::RatingDesc => b.star_rating.total_cmp(&a.star_rating),
        SortKey::YardageDesc => b.yardage.cmp(&a.yardage),
    }
}

/// "Showing 4 of 12 courses"
#[must_use]
pub fn result_summary(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} courses")
}
