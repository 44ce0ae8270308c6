use maud::{Markup, html};

use crate::controller::lookup::CoursePhotos;

pub const PHOTOS_COMING_SOON: &str = "Photos coming soon";

#[must_use]
pub fn render_gallery(course_name: &str, photos: &CoursePhotos) -> Markup {
    let disabled = match photos {
        CoursePhotos::Disabled { reason } => Some(reason),
        _ => None,
    };
    html! {
        @if let Some(reason) = disabled {
            p class="photos-disabled" { "Photos are unavailable: " (reason) }
        } @else if !photos.urls().is_empty() {
            div class="photo-strip" {
                @for (i, url) in photos.urls().iter().enumerate() {
                    img src=(url) alt=(format!("{course_name} photo {}", i + 1)) loading="lazy";
                }
            }
        } @else {
            p class="photos-missing" { "📷 " (PHOTOS_COMING_SOON) }
        }
    }
}

/// One thumbnail per course, in list order.
#[must_use]
pub fn render_preview(entries: &[(String, CoursePhotos)]) -> Markup {
    html! {
        @if !entries.is_empty() {
            div class="preview-strip" {
                @for (name, photos) in entries {
                    figure class="preview" {
                        @if let Some(url) = photos.urls().first() {
                            img src=(url) alt=(name) loading="lazy";
                        } @else {
                            div class="preview-placeholder" { "⛳" }
                        }
                        figcaption { (name) }
                    }
                }
            }
        }
    }
}
