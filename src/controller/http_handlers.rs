use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

use crate::args::CleanArgs;
use crate::clock::{Clock, SystemClock};
use crate::controller::lookup::CourseLookup;
use crate::controller::params::{filter_from_params, get_param_flag, get_param_str};
use crate::controller::query::{query as run_query, result_summary};
use crate::controller::repository::CourseRepository;
use crate::error::DataLoadError;
use crate::model::{PriceBounds, format_time_ago};
use crate::view::courses::render_course_list;
use crate::view::gallery::{render_gallery, render_preview};
use crate::view::index::{render_filter_form, render_index_template};

pub const PREVIEW_COURSES: usize = 6;

pub struct AppState {
    pub title: String,
    pub repository: CourseRepository,
    pub lookup: CourseLookup,
    pub gallery_photos: usize,
    /// Same clock the repository stamps snapshots with.
    pub clock: Arc<dyn Clock>,
}

pub const GUIDE_TITLE: &str = "Charlotte Golf Guide";

impl AppState {
    /// Loads the dataset and wires the photo lookups.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the course dataset cannot be loaded
    pub async fn from_args(args: &CleanArgs) -> Result<Self, DataLoadError> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let repository =
            CourseRepository::open(&args.courses_json, args.dataset_staleness, clock.clone())
                .await?;
        let lookup = CourseLookup::from_config(
            args.places_api_key.as_deref(),
            &args.places_base_url,
            args.lookup_settings(),
            clock.clone(),
        );
        Ok(Self {
            title: GUIDE_TITLE.to_string(),
            repository,
            lookup,
            gallery_photos: args.gallery_photos,
            clock,
        })
    }
}

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message }))
}

fn html(markup: maud::Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let snapshot = state.repository.snapshot().await;
    let (filter, sort) = match filter_from_params(&query, &snapshot.courses) {
        Ok(parsed) => parsed,
        Err(e) => return bad_request(&e),
    };
    let visible = run_query(&snapshot.courses, &filter, sort);
    let last_refresh = format_time_ago(state.clock.now() - snapshot.loaded_at);

    let sidebar = render_filter_form(
        &filter,
        sort,
        PriceBounds::of(&snapshot.courses),
        state.lookup.is_enabled(),
    );
    let courses = render_course_list(&visible, snapshot.courses.len(), &last_refresh);
    html(render_index_template(&state.title, sidebar, courses))
}

pub async fn courses(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let snapshot = state.repository.snapshot().await;
    let (filter, sort) = match filter_from_params(&query, &snapshot.courses) {
        Ok(parsed) => parsed,
        Err(e) => return bad_request(&e),
    };
    let visible = run_query(&snapshot.courses, &filter, sort);

    if get_param_flag(&query, "json") {
        HttpResponse::Ok().json(json!({
            "summary": result_summary(visible.len(), snapshot.courses.len()),
            "shown": visible.len(),
            "total": snapshot.courses.len(),
            "courses": visible,
        }))
    } else {
        let last_refresh = format_time_ago(state.clock.now() - snapshot.loaded_at);
        html(render_course_list(
            &visible,
            snapshot.courses.len(),
            &last_refresh,
        ))
    }
}

pub async fn photos(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let name = get_param_str(&query, "course");
    if name.is_empty() {
        return bad_request("course parameter is required");
    }
    let max_count = match get_param_str(&query, "max") {
        "" => state.gallery_photos,
        raw => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n.min(state.gallery_photos),
            _ => return bad_request("max must be a positive integer"),
        },
    };

    let snapshot = state.repository.snapshot().await;
    let Some(course) = snapshot.courses.iter().find(|c| c.name == name) else {
        return HttpResponse::NotFound().json(json!({ "error": format!("no course named '{name}'") }));
    };

    let photos = state.lookup.course_photos(course, max_count).await;
    if get_param_flag(&query, "json") {
        HttpResponse::Ok().json(photos)
    } else {
        html(render_gallery(&course.name, &photos))
    }
}

pub async fn preview(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    if !state.lookup.is_enabled() {
        return html(render_preview(&[]));
    }
    let snapshot = state.repository.snapshot().await;
    let (filter, sort) = match filter_from_params(&query, &snapshot.courses) {
        Ok(parsed) => parsed,
        Err(e) => return bad_request(&e),
    };
    let mut visible = run_query(&snapshot.courses, &filter, sort);
    visible.truncate(PREVIEW_COURSES);

    let entries = state.lookup.preview(&visible).await;
    if get_param_flag(&query, "json") {
        let body: Vec<_> = entries
            .iter()
            .map(|(name, photos)| json!({ "course": name, "photos": photos }))
            .collect();
        HttpResponse::Ok().json(body)
    } else {
        html(render_preview(&entries))
    }
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/courses", web::get().to(courses))
        .route("/photos", web::get().to(photos))
        .route("/preview", web::get().to(preview))
        .route("/health", web::get().to(health));
}
