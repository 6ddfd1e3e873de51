//! Intraday and day-over-day price changes from a short session history.

mod model;

pub use model::PriceSnapshot;

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::gateway::PriceSession;

/// Builds a [`PriceSnapshot`] from `sessions` ordered oldest first.
///
/// One session yields open, close and the intraday change; a second one adds the
/// previous close and the change against it. Prices and percentages are rounded to two
/// decimals, midpoints away from zero. A zero (or non-finite) denominator makes the
/// corresponding change unavailable; for the previous close that drops both fields.
#[must_use]
pub fn snapshot(ticker: &str, sessions: &[PriceSession]) -> PriceSnapshot {
    let mut snap = PriceSnapshot::empty(ticker);

    let Some(last) = sessions.last() else {
        return snap;
    };
    let (Some(open), Some(close)) = (to_decimal(last.open), to_decimal(last.close)) else {
        return snap;
    };

    snap.session_ts = last.ts;
    snap.open = round2(open);
    snap.close = round2(close);
    snap.intraday_change_pct = pct_change(open, close);

    if let [.., prev, _] = sessions
        && let Some(prev_close) = to_decimal(prev.close)
        && let Some(change) = pct_change(prev_close, close)
    {
        snap.previous_close = round2(prev_close);
        snap.previous_close_change_pct = Some(change);
    }

    snap
}

fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    // Go through the shortest decimal rendering so 110.1 stays 110.1 rather than its
    // binary expansion.
    Decimal::from_str(&value.to_string()).ok()
}

fn round2(value: Decimal) -> Option<f64> {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
}

fn pct_change(from: Decimal, to: Decimal) -> Option<f64> {
    if from.is_zero() {
        return None;
    }
    let change = (to - from).checked_div(from)?.checked_mul(Decimal::ONE_HUNDRED)?;
    round2(change)
}
