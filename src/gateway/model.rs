use serde::Serialize;

/// One trading session's open and close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceSession {
    /// Session start as a Unix timestamp (seconds), when the source provides one.
    pub ts: Option<i64>,
    pub open: f64,
    pub close: f64,
}

impl PriceSession {
    /// A session without a timestamp.
    #[must_use]
    pub const fn new(open: f64, close: f64) -> Self {
        Self {
            ts: None,
            open,
            close,
        }
    }
}

/// A news record exactly as the source returned it.
///
/// Fields may be missing, null, or of an unexpected type; see [`crate::news::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawNewsRecord(pub serde_json::Value);

impl RawNewsRecord {
    /// Borrow the underlying JSON value.
    #[must_use]
    pub const fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for RawNewsRecord {
    fn from(v: serde_json::Value) -> Self {
        Self(v)
    }
}
