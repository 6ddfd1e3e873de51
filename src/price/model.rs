use serde::Serialize;

/// Price-change summary for a ticker at run time.
///
/// When price history could not be fetched all price fields are `None` and only
/// `ticker` is set. `previous_close` and `previous_close_change_pct` are either both
/// present or both absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSnapshot {
    pub ticker: String,
    /// Start of the most recent session as a Unix timestamp (seconds), when known.
    pub session_ts: Option<i64>,
    /// Open of the most recent session.
    pub open: Option<f64>,
    /// Close (or last price) of the most recent session.
    pub close: Option<f64>,
    /// `(close - open) / open * 100`; `None` when `open` is zero.
    pub intraday_change_pct: Option<f64>,
    /// Close of the session before the most recent one.
    pub previous_close: Option<f64>,
    /// `(close - previous_close) / previous_close * 100`.
    pub previous_close_change_pct: Option<f64>,
}

impl PriceSnapshot {
    /// A snapshot that identifies the ticker but carries no price data.
    #[must_use]
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            session_ts: None,
            open: None,
            close: None,
            intraday_change_pct: None,
            previous_close: None,
            previous_close_change_pct: None,
        }
    }

    #[must_use]
    pub const fn has_prices(&self) -> bool {
        self.close.is_some()
    }
}
