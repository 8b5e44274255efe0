//! Per-timeframe technical indicator computation.

mod atr;
mod ema;

pub use atr::atr;
pub use ema::ema;

use crate::models::series::TimeframeSeries;

/// Trend and volatility series derived from one timeframe's prices.
///
/// Both sequences are aligned to the tail of the source series (warm-up
/// consumes the leading points, no padding). After compaction their lengths
/// need not match the price series and must not be assumed index-aligned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorSeries {
    pub ema: Vec<f64>,
    pub atr: Vec<f64>,
}

/// Indicator periods for the snapshot pipeline.
#[derive(Debug, Clone, Copy)]
pub struct IndicatorParams {
    pub trend_period: usize,
    pub volatility_period: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            trend_period: 20,
            volatility_period: 14,
        }
    }
}

/// Computes the indicator set for one timeframe, strictly from that
/// timeframe's own price sequences.
///
/// Inputs shorter than a period yield an empty sequence for that indicator;
/// downstream consumers tolerate empty indicator output.
pub fn compute(series: &TimeframeSeries, params: IndicatorParams) -> IndicatorSeries {
    IndicatorSeries {
        ema: ema(&series.close, params.trend_period),
        atr: atr(&series.high, &series.low, &series.close, params.volatility_period),
    }
}
