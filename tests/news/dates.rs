use chrono_tz::America::{Denver, New_York};
use serde_json::{Value, json};
use stocknews_rs::news::{DATE_FORMAT_ERROR, NO_DATE, format_published};

fn fmt(v: Value) -> String {
    format_published(Some(&v), Denver)
}

#[test]
fn winter_timestamp_uses_standard_time() {
    assert_eq!(fmt(json!("2024-01-15T15:30:00Z")), "2024-01-15 08:30:00 AM");
}

#[test]
fn summer_timestamp_uses_daylight_time() {
    assert_eq!(fmt(json!("2024-07-04T18:00:00Z")), "2024-07-04 12:00:00 PM");
}

#[test]
fn conversion_tracks_the_spring_forward_transition() {
    // 02:00 MST on 2024-03-10 is 09:00 UTC; clocks jump to 03:00 MDT.
    assert_eq!(fmt(json!("2024-03-10T08:59:59Z")), "2024-03-10 01:59:59 AM");
    assert_eq!(fmt(json!("2024-03-10T09:00:00Z")), "2024-03-10 03:00:00 AM");
}

#[test]
fn conversion_can_cross_midnight() {
    assert_eq!(fmt(json!("2024-02-01T03:15:00Z")), "2024-01-31 08:15:00 PM");
}

#[test]
fn target_zone_is_a_parameter() {
    let v = json!("2024-01-15T15:30:00Z");
    assert_eq!(format_published(Some(&v), New_York), "2024-01-15 10:30:00 AM");
}

#[test]
fn absent_dates_use_no_date_sentinel() {
    assert_eq!(format_published(None, Denver), NO_DATE);
    assert_eq!(fmt(Value::Null), NO_DATE);
    assert_eq!(fmt(json!("")), NO_DATE);
}

#[test]
fn anything_but_the_exact_shape_is_a_format_error() {
    for raw in [
        json!("2024-01-15 15:30:00"),
        json!("2024-01-15T15:30:00"),
        json!("2024-01-15T15:30:00.000Z"),
        json!("2024-01-15T15:30:00+00:00"),
        json!("2024-01-15"),
        json!("2024-13-01T00:00:00Z"),
        json!("2024-01-15T15:30:00Z trailing"),
        json!("garbage"),
        json!(1_705_332_600),
        json!({ "iso": "2024-01-15T15:30:00Z" }),
    ] {
        assert_eq!(fmt(raw.clone()), DATE_FORMAT_ERROR, "{raw}");
    }
}
