use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use crate::controller::lookup::LookupSettings;

/// # Errors
///
/// Will return `Err` if the arguments are invalid
pub fn args_checks() -> Result<CleanArgs, String> {
    let mut xx = Args::parse();
    xx.validate()?;
    Ok(CleanArgs::new(xx))
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            courses_json: args.courses_json,
            bind: args.bind,
            places_api_key: args.places_api_key,
            places_base_url: args.places_base_url,
            lookup_ttl: chrono::Duration::seconds(args.lookup_ttl_secs),
            dataset_staleness: chrono::Duration::seconds(args.dataset_staleness_secs),
            rate_limit: std::time::Duration::from_millis(args.rate_limit_ms),
            preview_concurrency: args.preview_concurrency,
            max_match_miles: args.max_match_miles,
            photo_width: args.photo_width,
            gallery_photos: args.gallery_photos,
            static_dir: args.static_dir,
            log_level: args.log_level,
        }
    }

    #[must_use]
    pub fn lookup_settings(&self) -> LookupSettings {
        LookupSettings {
            ttl: self.lookup_ttl,
            call_interval: self.rate_limit,
            max_distance_miles: self.max_match_miles,
            preview_concurrency: self.preview_concurrency,
            photo_width: self.photo_width,
        }
    }
}
