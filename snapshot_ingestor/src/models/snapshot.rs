//! The serializable market snapshot handed to the language model.

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::{
    compact,
    indicators::IndicatorSeries,
    models::{series::TimeframeSeries, timeframe::Timeframe},
};

/// Compacted price history and indicators for one timeframe.
///
/// The payload keys mirror the request contract the system prompt is
/// written against: the five price sequences plus `ema20` and `atr`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeframeReport {
    #[serde(flatten)]
    pub series: TimeframeSeries,
    pub ema20: Vec<f64>,
    pub atr: Vec<f64>,
}

/// The single unit of exchange with the language model.
///
/// Assembled once per run and immutable afterwards; serialized exactly once
/// as the user-message payload. Timeframe entries keep insertion order so
/// the faster timeframe always lists first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub symbol: String,
    #[serde(rename = "markPrice")]
    pub mark_price: f64,
    #[serde(rename = "capturedAt")]
    pub captured_at: String,
    #[serde(flatten)]
    pub timeframes: IndexMap<String, TimeframeReport>,
}

impl Snapshot {
    /// Merges the per-timeframe series and indicators into the flat payload,
    /// compacting every sequence to the same `window` on the way in.
    ///
    /// Numeric values pass through as `f64` untouched; serialization must
    /// not round.
    pub fn assemble(
        symbol: &str,
        mark_price: f64,
        captured_at: DateTime<Utc>,
        per_timeframe: Vec<(Timeframe, TimeframeSeries, IndicatorSeries)>,
        window: usize,
    ) -> Self {
        let mut timeframes = IndexMap::with_capacity(per_timeframe.len());
        for (timeframe, mut series, mut indicators) in per_timeframe {
            compact::compact_series(&mut series, window);
            compact::compact_tail(&mut indicators.ema, window);
            compact::compact_tail(&mut indicators.atr, window);
            timeframes.insert(
                timeframe.bar_str().to_string(),
                TimeframeReport {
                    series,
                    ema20: indicators.ema,
                    atr: indicators.atr,
                },
            );
        }
        Self {
            symbol: symbol.to_string(),
            mark_price,
            captured_at: captured_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            timeframes,
        }
    }
}
