use std::collections::HashMap;

use crate::model::{CourseRecord, FilterSpec, HoleFilter, SortKey};

#[must_use]
pub fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map_or("", |s| s.trim())
}

/// "1" / "true" switch a flag on, anything else leaves it off.
#[must_use]
pub fn get_param_flag(query: &HashMap<String, String>, key: &str) -> bool {
    match get_param_str(query, key) {
        "1" => true,
        other => other.parse().unwrap_or(false),
    }
}

fn parse_number(query: &HashMap<String, String>, key: &str) -> Result<Option<f64>, String> {
    match get_param_str(query, key) {
        "" => Ok(None),
        raw => raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| format!("{key} must be a number")),
    }
}

/// Builds the filter and sort for a request. Missing parameters fall back to
/// the no-op filter for `records`.
///
/// # Errors
///
/// Will return `Err` if a parameter is present but unparseable or out of range
pub fn filter_from_params(
    query: &HashMap<String, String>,
    records: &[CourseRecord],
) -> Result<(FilterSpec, SortKey), String> {
    let mut filter = FilterSpec::unconstrained(records);

    // searched as typed, surrounding spaces included
    if let Some(search) = query.get("search").filter(|s| !s.is_empty()) {
        filter.search = Some(search.clone());
    }
    if let Some(min) = parse_number(query, "price_min")? {
        filter.price_min = min;
    }
    if let Some(max) = parse_number(query, "price_max")? {
        filter.price_max = max;
    }
    if filter.price_min > filter.price_max {
        return Err("price_min cannot be above price_max".to_string());
    }
    if let Some(stars) = parse_number(query, "min_stars")? {
        if !(1.0..=5.0).contains(&stars) {
            return Err("min_stars must be between 1 and 5".to_string());
        }
        filter.min_stars = stars;
    }
    filter.holes = get_param_str(query, "holes").parse::<HoleFilter>()?;

    let sort = match get_param_str(query, "sort") {
        "" => SortKey::default(),
        raw => raw.parse::<SortKey>()?,
    };

    Ok((filter, sort))
}
