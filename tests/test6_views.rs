mod common;

use chrono::Duration;
use common::{course, dataset};
use scraper::{Html, Selector};
use std::collections::HashMap;

use rusty_golf_guide::controller::lookup::CoursePhotos;
use rusty_golf_guide::controller::params::filter_from_params;
use rusty_golf_guide::controller::query::query;
use rusty_golf_guide::model::{
    FilterSpec, HoleFilter, PlaceId, PriceBounds, SortKey, format_price, format_time_ago,
    format_yardage, star_display,
};
use rusty_golf_guide::view::courses::{NO_MATCHES_MESSAGE, render_course_list};
use rusty_golf_guide::view::gallery::{PHOTOS_COMING_SOON, render_gallery, render_preview};
use rusty_golf_guide::view::index::{render_filter_form, render_index_template};

fn sel(selector: &str) -> Selector {
    Selector::parse(selector).unwrap()
}

fn text_of(doc: &Html, selector: &str) -> Vec<String> {
    doc.select(&sel(selector))
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect()
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn test6_course_list_renders_one_card_per_course() {
    let courses = dataset();
    let markup = render_course_list(&courses, courses.len(), "5 minutes");
    let doc = Html::parse_fragment(&markup.into_string());

    assert_eq!(doc.select(&sel("div.course-card")).count(), 12);
    assert_eq!(text_of(&doc, "p.summary"), vec!["Showing 12 of 12 courses"]);
    assert_eq!(text_of(&doc, "h3.course-name")[0], "Park Ridge Golf Club");
    assert!(text_of(&doc, "p.refresh")[0].contains("5 minutes ago"));
    assert_eq!(doc.select(&sel("div.info")).count(), 0);
}

#[test]
fn test6_empty_list_shows_the_no_match_message() {
    let markup = render_course_list(&[], 12, "1 minute");
    let doc = Html::parse_fragment(&markup.into_string());

    assert_eq!(doc.select(&sel("div.course-card")).count(), 0);
    assert_eq!(text_of(&doc, "div.info"), vec![NO_MATCHES_MESSAGE]);
    assert_eq!(text_of(&doc, "p.summary"), vec!["Showing 0 of 12 courses"]);
}

#[test]
fn test6_card_shows_course_details() {
    let courses = dataset();
    let mallard = courses
        .iter()
        .find(|c| c.name == "Mallard Point Golf Course")
        .unwrap();
    let markup = render_course_list(std::slice::from_ref(mallard), 12, "3 seconds");
    let html = markup.into_string();
    let doc = Html::parse_fragment(&html);

    let stars = &text_of(&doc, "p.stars")[0];
    assert!(stars.starts_with("★★★★½"), "got {stars}");
    assert!(text_of(&doc, "span.value").contains(&"$62".to_string()));
    assert!(text_of(&doc, "p.extras")[0].contains("Semi-Private"));
    assert!(html.contains("7,012"));

    let button = doc.select(&sel("div.gallery button")).next().unwrap();
    assert_eq!(button.value().attr("hx-get"), Some("photos"));
    let vals: serde_json::Value =
        serde_json::from_str(button.value().attr("hx-vals").unwrap()).unwrap();
    assert_eq!(vals["course"], "Mallard Point Golf Course");
}

#[test]
fn test6_gallery_falls_back_to_coming_soon() {
    let photos = CoursePhotos::Photos {
        place_id: PlaceId("p".to_string()),
        urls: vec!["http://img/1".to_string(), "http://img/2".to_string()],
    };
    let doc = Html::parse_fragment(&render_gallery("Park Ridge", &photos).into_string());
    let srcs: Vec<&str> = doc
        .select(&sel("div.photo-strip img"))
        .filter_map(|img| img.value().attr("src"))
        .collect();
    assert_eq!(srcs, vec!["http://img/1", "http://img/2"]);

    for empty in [
        CoursePhotos::NotFound,
        CoursePhotos::Photos {
            place_id: PlaceId("p".to_string()),
            urls: Vec::new(),
        },
    ] {
        let doc = Html::parse_fragment(&render_gallery("Park Ridge", &empty).into_string());
        assert_eq!(doc.select(&sel("img")).count(), 0);
        assert!(text_of(&doc, "p.photos-missing")[0].contains(PHOTOS_COMING_SOON));
    }

    let disabled = CoursePhotos::Disabled {
        reason: "no key".to_string(),
    };
    let doc = Html::parse_fragment(&render_gallery("Park Ridge", &disabled).into_string());
    assert!(text_of(&doc, "p.photos-disabled")[0].contains("no key"));
}

#[test]
fn test6_preview_keeps_order_and_uses_placeholders() {
    let entries = vec![
        (
            "Catawba Bluffs Golf Club".to_string(),
            CoursePhotos::Photos {
                place_id: PlaceId("c".to_string()),
                urls: vec!["http://img/c".to_string()],
            },
        ),
        ("Mint Hill Nine".to_string(), CoursePhotos::NotFound),
    ];
    let doc = Html::parse_fragment(&render_preview(&entries).into_string());

    assert_eq!(
        text_of(&doc, "figure.preview figcaption"),
        vec!["Catawba Bluffs Golf Club", "Mint Hill Nine"]
    );
    assert_eq!(doc.select(&sel("figure.preview img")).count(), 1);
    assert_eq!(doc.select(&sel("div.preview-placeholder")).count(), 1);

    let doc = Html::parse_fragment(&render_preview(&[]).into_string());
    assert_eq!(doc.select(&sel("div.preview-strip")).count(), 0);
}

#[test]
fn test6_filter_form_reflects_current_choices() {
    let courses = dataset();
    let (filter, sort) = filter_from_params(
        &params(&[("sort", "price_desc"), ("holes", "9"), ("min_stars", "3.5")]),
        &courses,
    )
    .unwrap();
    let sidebar = render_filter_form(&filter, sort, PriceBounds::of(&courses), false);
    let page = render_index_template("Charlotte Golf Guide", sidebar, maud::html! {});
    let doc = Html::parse_document(&page.into_string());

    let selected: Vec<&str> = doc
        .select(&sel("select#sort option[selected]"))
        .filter_map(|o| o.value().attr("value"))
        .collect();
    assert_eq!(selected, vec!["price_desc"]);

    let checked: Vec<&str> = doc
        .select(&sel("input[name=holes][checked]"))
        .filter_map(|i| i.value().attr("value"))
        .collect();
    assert_eq!(checked, vec!["9"]);

    assert_eq!(doc.select(&sel("select#min_stars option[selected]")).count(), 1);
    assert_eq!(doc.select(&sel("p.notice")).count(), 1);
    assert_eq!(doc.select(&sel("div#preview")).count(), 1);
    assert!(text_of(&doc, "h1")[0].contains("Charlotte Golf Guide"));
}

#[test]
fn test6_params_default_to_the_unconstrained_filter() {
    let courses = dataset();
    let (filter, sort) = filter_from_params(&HashMap::new(), &courses).unwrap();
    assert_eq!(filter, FilterSpec::unconstrained(&courses));
    assert_eq!(filter.price_min, 18.0);
    assert_eq!(filter.price_max, 75.0);
    assert_eq!(sort, SortKey::NameAsc);

    let (filter, _) = filter_from_params(
        &params(&[("search", "park "), ("price_min", "20"), ("price_max", "60"), ("holes", "18")]),
        &courses,
    )
    .unwrap();
    assert_eq!(filter.search.as_deref(), Some("park "));
    assert_eq!(filter.holes, HoleFilter::Eighteen);

    let (filter, _) = filter_from_params(&params(&[("search", "")]), &courses).unwrap();
    assert_eq!(filter.search, None);
}

#[test]
fn test6_search_param_is_matched_as_typed() {
    let courses = dataset();
    let (filter, sort) = filter_from_params(&params(&[("search", "Park ")]), &courses).unwrap();
    let shown = query(&courses, &filter, sort);
    let names: Vec<&str> = shown.iter().map(|c| c.name.as_str()).collect();
    // "Parkview 9" has no space after "Park"
    assert_eq!(names, vec!["Freedom Park Municipal", "Park Ridge Golf Club"]);
}

#[test]
fn test6_bad_params_are_rejected() {
    let courses = vec![course("A", 30.0, 3.0, 18, 6000)];
    for bad in [
        params(&[("price_min", "70"), ("price_max", "20")]),
        params(&[("price_min", "cheap")]),
        params(&[("price_max", "NaN")]),
        params(&[("min_stars", "6")]),
        params(&[("min_stars", "0.5")]),
        params(&[("holes", "27")]),
        params(&[("sort", "random")]),
    ] {
        assert!(filter_from_params(&bad, &courses).is_err(), "{bad:?}");
    }
}

#[test]
fn test6_display_helpers() {
    assert_eq!(star_display(3.0), "★★★");
    assert_eq!(star_display(3.5), "★★★½");
    assert_eq!(format_price(45.0), "$45");
    assert_eq!(format_price(45.5), "$45.50");
    assert_eq!(format_yardage(6842), "6,842");
    assert_eq!(format_yardage(705), "705");
    assert_eq!(format_time_ago(Duration::seconds(1)), "1 second");
    assert_eq!(format_time_ago(Duration::seconds(125)), "2 minutes");
    assert_eq!(format_time_ago(Duration::hours(26)), "1 day");
}
