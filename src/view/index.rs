use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::model::{FilterSpec, HoleFilter, PriceBounds, SortKey};

const STAR_STEPS: [f64; 9] = [1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0];

#[must_use]
pub fn render_index_template(title: &str, sidebar: Markup, courses: Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { "⛳ " (title) }
            p class="caption" { "Your guide to public golf in the Queen City" }
            hr;
            div class="layout" {
                aside id="filters" { (sidebar) }
                main {
                    div id="preview" hx-get="preview" hx-include="#filter-form" hx-trigger="load" hx-swap="innerHTML" {}
                    div id="courses" { (courses) }
                }
            }
        }
    }
}

#[must_use]
pub fn render_filter_form(
    filter: &FilterSpec,
    sort: SortKey,
    bounds: PriceBounds,
    photos_enabled: bool,
) -> Markup {
    let search = filter.search.clone().unwrap_or_default();
    html! {
        h2 { "Filter Courses" }
        form id="filter-form"
            hx-get="courses"
            hx-target="#courses"
            hx-trigger="change, keyup changed delay:300ms from:#search" {
            label for="search" { "Search by course name" }
            input id="search" type="text" name="search" value=(search);

            fieldset {
                legend { "Weekday Price Range" }
                input type="number" name="price_min" min=(bounds.min) max=(bounds.max) value=(filter.price_min);
                " to "
                input type="number" name="price_max" min=(bounds.min) max=(bounds.max) value=(filter.price_max);
            }

            label for="min_stars" { "Minimum Star Rating" }
            select id="min_stars" name="min_stars" {
                @for step in STAR_STEPS {
                    option value=(step) selected[step == filter.min_stars] { (format!("{step:.1}")) }
                }
            }

            fieldset {
                legend { "Number of Holes" }
                @for (mode, label) in [(HoleFilter::Any, "All"), (HoleFilter::Nine, "9-Hole Only"), (HoleFilter::Eighteen, "18-Hole Only")] {
                    label {
                        input type="radio" name="holes" value=(mode.as_param()) checked[mode == filter.holes];
                        (label)
                    }
                }
            }

            label for="sort" { "Sort By" }
            select id="sort" name="sort" {
                @for key in SortKey::ALL {
                    option value=(key.as_param()) selected[key == sort] { (key.label()) }
                }
            }
        }
        @if !photos_enabled {
            p class="notice" { "Course photos are turned off: no places api key is configured." }
        }
    }
}
