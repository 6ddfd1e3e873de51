//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo chart API base (symbol is appended).
pub(crate) const DEFAULT_BASE_CHART: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";

/// Yahoo news stream base (`xhr/ncp` is appended).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://finance.yahoo.com/";

/// Gemini REST API base (`models/{model}:generateContent` is appended).
pub(crate) const DEFAULT_GEMINI_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/";

/// Model used for sentiment classification unless overridden.
pub(crate) const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-lite";

/// Time zone article timestamps are rendered in unless overridden.
pub(crate) const DEFAULT_TIMEZONE: chrono_tz::Tz = chrono_tz::America::Denver;
