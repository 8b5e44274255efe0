//! End-to-end snapshot construction from a market data provider.

use chrono::Utc;
use futures::future::try_join_all;
use tracing::debug;

use crate::{
    errors::Error,
    indicators::{self, IndicatorParams},
    models::{instrument::InstType, snapshot::Snapshot, timeframe::Timeframe},
    normalize,
    providers::MarketDataProvider,
};

/// Tunables for one snapshot build.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotConfig {
    /// Most-recent points retained per sequence before transmission.
    pub window: usize,
    /// Candles requested per timeframe, before the closed-bar filter.
    pub candle_limit: u32,
    pub indicators: IndicatorParams,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            window: 20,
            candle_limit: 200,
            indicators: IndicatorParams::default(),
        }
    }
}

/// Builds the snapshot for `symbol`: fetches every timeframe's candles and
/// the mark price together, then normalizes, computes indicators, and
/// assembles the payload.
///
/// The candle fetches and the mark-price fetch are issued jointly and all
/// must resolve before any series is built; an error from any of them
/// abandons the run without publishing partial state. Mark price is always
/// read from the SWAP listing, as the instrument being advised on is a
/// derivative.
pub async fn build_snapshot<P: MarketDataProvider>(
    provider: &P,
    symbol: &str,
    timeframes: &[Timeframe],
    config: SnapshotConfig,
) -> Result<Snapshot, Error> {
    let captured_at = Utc::now();

    let (candle_sets, mark_price) = tokio::try_join!(
        try_join_all(
            timeframes
                .iter()
                .map(|tf| provider.candles(symbol, *tf, captured_at, config.candle_limit)),
        ),
        provider.mark_price(InstType::Swap, symbol),
    )?;

    let mut per_timeframe = Vec::with_capacity(timeframes.len());
    for (timeframe, raw) in timeframes.iter().zip(candle_sets) {
        let series = normalize::normalize(&raw)?;
        debug!(
            timeframe = timeframe.bar_str(),
            closed_bars = series.len(),
            "normalized series"
        );
        let indicator_series = indicators::compute(&series, config.indicators);
        per_timeframe.push((*timeframe, series, indicator_series));
    }

    Ok(Snapshot::assemble(
        symbol,
        mark_price,
        captured_at,
        per_timeframe,
        config.window,
    ))
}
