pub mod args;
pub mod clock;
pub mod error;
pub mod model;
pub mod controller {
    pub mod cache;
    pub mod http_handlers;
    pub mod lookup;
    pub mod pacer;
    pub mod params;
    pub mod places;
    pub mod query;
    pub mod repository;
}
pub mod view {
    pub mod courses;
    pub mod gallery;
    pub mod index;
}

const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

pub use controller::query::query;
pub use controller::repository::{CourseRepository, CourseSnapshot};
pub use error::{ConfigError, DataLoadError, LookupError};
