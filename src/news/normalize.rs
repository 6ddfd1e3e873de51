use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde_json::Value;

use crate::gateway::RawNewsRecord;
use crate::news::model::{
    Article, DATE_FORMAT_ERROR, NO_CONTENT_TYPE, NO_DATE, NO_LINK, NO_SUMMARY, NO_TITLE,
};
use crate::sentiment::Sentiment;

const SOURCE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d %I:%M:%S %p";

/// Converts one raw news record into an [`Article`].
///
/// Never fails: a missing `content` block, absent keys, nulls and values of the wrong
/// type all resolve to the documented per-field default. The returned article carries
/// [`Sentiment::Unknown`]; classification happens later in the pipeline.
#[must_use]
pub fn normalize(record: &RawNewsRecord, tz: Tz) -> Article {
    let content = record
        .as_value()
        .get("content")
        .filter(|c| c.is_object())
        .unwrap_or(&Value::Null);

    Article {
        sentiment: Sentiment::Unknown,
        published_at: format_published(content.get("pubDate"), tz),
        title: text_or(content, "/title", NO_TITLE),
        link: text_or(content, "/canonicalUrl/url", NO_LINK),
        content_type: text_or(content, "/contentType", NO_CONTENT_TYPE),
        summary: text_or(content, "/summary", NO_SUMMARY),
        thumbnail_url: resolve_thumbnail(content),
    }
}

/// String at `pointer` inside `v`, if every step exists and the leaf is a string.
///
/// Intermediate nodes of the wrong shape (a string where an object was expected, an
/// out-of-range index) resolve to `None` rather than failing.
fn text_at<'a>(v: &'a Value, pointer: &str) -> Option<&'a str> {
    v.pointer(pointer).and_then(Value::as_str)
}

fn text_or(v: &Value, pointer: &str, default: &str) -> String {
    text_at(v, pointer).unwrap_or(default).to_string()
}

fn non_empty_text_at<'a>(v: &'a Value, pointer: &str) -> Option<&'a str> {
    text_at(v, pointer).filter(|s| !s.trim().is_empty())
}

/// Original full-size image first, then the first listed resolution, else nothing.
fn resolve_thumbnail(content: &Value) -> Option<String> {
    non_empty_text_at(content, "/thumbnail/originalUrl")
        .or_else(|| non_empty_text_at(content, "/thumbnail/resolutions/0/url"))
        .map(str::to_string)
}

/// Renders a `YYYY-MM-DDThh:mm:ssZ` UTC timestamp in `tz` on a 12-hour clock.
///
/// A missing, null or empty value gives [`NO_DATE`]; anything else that does not have
/// exactly that shape (including non-string values) gives [`DATE_FORMAT_ERROR`].
#[must_use]
pub fn format_published(raw: Option<&Value>, tz: Tz) -> String {
    let s = match raw {
        None | Some(Value::Null) => return NO_DATE.to_string(),
        Some(Value::String(s)) if s.is_empty() => return NO_DATE.to_string(),
        Some(Value::String(s)) => s,
        Some(_) => return DATE_FORMAT_ERROR.to_string(),
    };

    match NaiveDateTime::parse_from_str(s, SOURCE_DATE_FORMAT) {
        Ok(naive) => Utc
            .from_utc_datetime(&naive)
            .with_timezone(&tz)
            .format(DISPLAY_DATE_FORMAT)
            .to_string(),
        Err(_) => DATE_FORMAT_ERROR.to_string(),
    }
}
