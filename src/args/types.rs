use clap::Parser;
use std::path::PathBuf;

use crate::controller::places::DEFAULT_PLACES_BASE_URL;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Guide to public golf courses", long_about = None)]
pub struct Args {
    /// Course dataset, a json array of course records.
    #[arg(
        short = 'c',
        long,
        value_name = "COURSES_JSON",
        env = "GOLF_GUIDE_COURSES_JSON",
        default_value = "data/charlotte_courses.json"
    )]
    pub courses_json: PathBuf,
    #[arg(
        short = 'b',
        long,
        value_name = "ADDRESS",
        env = "GOLF_GUIDE_BIND",
        default_value = "0.0.0.0:8081"
    )]
    pub bind: String,
    /// Places api key. Without one, course photos are disabled.
    #[arg(
        long,
        value_name = "API_KEY",
        env = "GOOGLE_PLACES_API_KEY",
        hide_env_values = true
    )]
    pub places_api_key: Option<String>,
    #[arg(
        long,
        value_name = "URL",
        env = "GOOGLE_PLACES_BASE_URL",
        default_value = DEFAULT_PLACES_BASE_URL
    )]
    pub places_base_url: String,
    /// How long place and photo lookups stay cached.
    #[arg(long, value_name = "SECONDS", default_value = "3600")]
    pub lookup_ttl_secs: i64,
    /// How long the dataset is served before it is re-read.
    #[arg(long, value_name = "SECONDS", default_value = "60")]
    pub dataset_staleness_secs: i64,
    /// Minimum gap between two calls to the places provider.
    #[arg(long, value_name = "MILLISECONDS", default_value = "100")]
    pub rate_limit_ms: u64,
    #[arg(long, value_name = "COUNT", default_value = "1")]
    pub preview_concurrency: usize,
    /// A matched place further than this from the course is rejected.
    #[arg(long, value_name = "MILES", default_value = "2.0")]
    pub max_match_miles: f64,
    #[arg(long, value_name = "PIXELS", default_value = "800")]
    pub photo_width: u32,
    #[arg(long, value_name = "COUNT", default_value = "5")]
    pub gallery_photos: usize,
    #[arg(long, value_name = "DIR", default_value = "./static")]
    pub static_dir: PathBuf,
    #[arg(long, value_name = "FILTER", env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub courses_json: PathBuf,
    pub bind: String,
    pub places_api_key: Option<String>,
    pub places_base_url: String,
    pub lookup_ttl: chrono::Duration,
    pub dataset_staleness: chrono::Duration,
    pub rate_limit: std::time::Duration,
    pub preview_concurrency: usize,
    pub max_match_miles: f64,
    pub photo_width: u32,
    pub gallery_photos: usize,
    pub static_dir: PathBuf,
    pub log_level: String,
}
