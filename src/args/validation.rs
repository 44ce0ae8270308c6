use super::types::Args;

/// The provider refuses photo widths outside 1..=1600.
pub const MAX_PHOTO_WIDTH: u32 = 1600;
pub const MAX_GALLERY_PHOTOS: usize = 10;

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if any setting is out of range
    pub fn validate(&mut self) -> Result<(), String> {
        if self.lookup_ttl_secs <= 0 {
            return Err("lookup ttl must be a positive number of seconds".to_string());
        }
        if self.dataset_staleness_secs < 0 {
            return Err("dataset staleness cannot be negative".to_string());
        }
        if self.preview_concurrency == 0 {
            return Err("preview concurrency must be at least 1".to_string());
        }
        if !self.max_match_miles.is_finite() || self.max_match_miles <= 0.0 {
            return Err("max match distance must be a positive number of miles".to_string());
        }
        if self.photo_width == 0 || self.photo_width > MAX_PHOTO_WIDTH {
            return Err(format!(
                "photo width must be between 1 and {MAX_PHOTO_WIDTH} pixels"
            ));
        }
        if self.gallery_photos == 0 || self.gallery_photos > MAX_GALLERY_PHOTOS {
            return Err(format!(
                "gallery photos must be between 1 and {MAX_GALLERY_PHOTOS}"
            ));
        }
        if self.places_base_url.trim().is_empty() {
            return Err("places base url cannot be empty".to_string());
        }
        // an empty key from the environment means "no key"
        if self
            .places_api_key
            .as_deref()
            .is_some_and(|k| k.trim().is_empty())
        {
            self.places_api_key = None;
        }
        Ok(())
    }
}
