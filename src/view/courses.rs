use maud::{Markup, html};

use crate::controller::query::result_summary;
use crate::model::{CourseRecord, format_price, format_yardage, star_display};

pub const NO_MATCHES_MESSAGE: &str =
    "No courses match your current filters. Try adjusting the sidebar options.";

#[must_use]
pub fn render_course_list(courses: &[CourseRecord], total: usize, last_refresh: &str) -> Markup {
    html! {
        p class="summary" {
            strong { (result_summary(courses.len(), total)) }
        }
        @if courses.is_empty() {
            div class="info" { (NO_MATCHES_MESSAGE) }
        } @else {
            @for course in courses {
                (render_course_card(course))
            }
        }
        p class="refresh" { "Course data loaded " (last_refresh) " ago" }
    }
}

#[must_use]
pub fn render_course_card(course: &CourseRecord) -> Markup {
    let gallery_vals = serde_json::json!({ "course": course.name }).to_string();
    let range_status = if course.driving_range { "✅ Yes" } else { "❌ No" };
    html! {
        div class="course-card" {
            div class="card-top" {
                div class="card-left" {
                    h3 class="course-name" { (course.name) }
                    p class="stars" {
                        (star_display(course.star_rating)) " (" (course.star_rating) "/5)"
                    }
                    p class="description" { em { (course.description) } }
                }
                div class="card-right" {
                    div class="metric" { span class="label" { "Weekday" } span class="value" { (format_price(course.weekday_price)) } }
                    div class="metric" { span class="label" { "Weekend" } span class="value" { (format_price(course.weekend_price)) } }
                }
            }
            hr;
            div class="card-details" {
                div {
                    p { strong { "Address:" } " " (course.address) }
                    p { strong { "Phone:" } " " (course.phone) }
                }
                div {
                    p { strong { "Holes:" } " " (course.holes) "  |  " strong { "Par:" } " " (course.par) }
                    p { strong { "Yardage:" } " " (format_yardage(course.yardage)) }
                }
                div {
                    p { strong { "Slope:" } " " (course.slope) }
                    p { strong { "Course Rating:" } " " (course.rating) }
                }
                div {
                    p { strong { "Designer:" } " " (course.designer) }
                    p { strong { "Year Opened:" } " " (course.year_opened) }
                }
            }
            p class="extras" {
                strong { "Driving Range:" } " " (range_status) "  |  " strong { "Type:" } " " (course.course_type.to_string())
            }
            div class="gallery" {
                button hx-get="photos" hx-vals=(gallery_vals) hx-target="closest .gallery" hx-swap="innerHTML" {
                    "Show photos"
                }
            }
        }
    }
}
