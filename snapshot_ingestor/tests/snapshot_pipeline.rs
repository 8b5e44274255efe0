//! End-to-end snapshot build against a canned provider.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use snapshot_ingestor::{
    models::{
        candle::RawCandle,
        instrument::{InstType, Instrument},
        timeframe::Timeframe,
    },
    pipeline::{SnapshotConfig, build_snapshot},
    providers::{MarketDataProvider, ProviderError},
};

struct FixedProvider {
    candles: Vec<RawCandle>,
    mark_price: f64,
}

#[async_trait]
impl MarketDataProvider for FixedProvider {
    async fn instruments(&self, _inst_type: InstType) -> Result<Vec<Instrument>, ProviderError> {
        Ok(Vec::new())
    }

    async fn candles(
        &self,
        _inst_id: &str,
        _bar: Timeframe,
        _after: DateTime<Utc>,
        _limit: u32,
    ) -> Result<Vec<RawCandle>, ProviderError> {
        Ok(self.candles.clone())
    }

    async fn mark_price(
        &self,
        _inst_type: InstType,
        _inst_id: &str,
    ) -> Result<f64, ProviderError> {
        Ok(self.mark_price)
    }
}

/// Fifteen closed bars topped by one still-forming bar, newest-first as the
/// exchange delivers them. Chronological closes are 101.5, 102.5, .. 115.5.
fn wire_candles() -> Vec<RawCandle> {
    let mut rows = vec![RawCandle::new(
        "16000", "116.0", "117.0", "115.0", "116.5", "10", false,
    )];
    for i in (1..=15).rev() {
        let price = 100.0 + i as f64;
        rows.push(RawCandle::new(
            &format!("{i}000"),
            &price.to_string(),
            &(price + 1.0).to_string(),
            &(price - 1.0).to_string(),
            &(price + 0.5).to_string(),
            "10",
            true,
        ));
    }
    rows
}

fn config(window: usize) -> SnapshotConfig {
    SnapshotConfig {
        window,
        ..SnapshotConfig::default()
    }
}

#[tokio::test]
async fn open_bar_is_dropped_and_wide_window_is_a_noop() {
    let provider = FixedProvider {
        candles: wire_candles(),
        mark_price: 115.7,
    };
    let timeframes = [Timeframe::M15, Timeframe::H1];

    let snapshot = build_snapshot(&provider, "BTC-USDT-SWAP", &timeframes, config(20))
        .await
        .unwrap();

    assert_eq!(snapshot.symbol, "BTC-USDT-SWAP");
    assert_eq!(snapshot.mark_price, 115.7);
    assert_eq!(snapshot.timeframes.len(), 2);

    let report = &snapshot.timeframes["15m"];
    // 15 closed bars survive the filter; 15 <= 20 so compaction is a no-op.
    assert_eq!(report.series.len(), 15);
    assert_eq!(report.series.close[0], 101.5);
    assert_eq!(report.series.close[14], 115.5);
    // Trend period 20 exceeds the 15 available points: empty is valid.
    assert!(report.ema20.is_empty());
    // ATR period 14 over 15 points leaves 2 values.
    assert_eq!(report.atr.len(), 2);
}

#[tokio::test]
async fn narrow_window_keeps_the_last_ten_chronological_points() {
    let provider = FixedProvider {
        candles: wire_candles(),
        mark_price: 115.7,
    };
    let timeframes = [Timeframe::M15];

    let snapshot = build_snapshot(&provider, "BTC-USDT-SWAP", &timeframes, config(10))
        .await
        .unwrap();

    let report = &snapshot.timeframes["15m"];
    assert_eq!(report.series.len(), 10);
    assert_eq!(report.series.close[0], 106.5);
    assert_eq!(report.series.close[9], 115.5);
    assert_eq!(report.series.open[0], 106.0);
    assert_eq!(report.series.volume, vec![10.0; 10]);
}

#[tokio::test]
async fn malformed_candle_aborts_the_build() {
    let mut candles = wire_candles();
    candles.push(RawCandle::new("500", "bogus", "1", "1", "1", "1", true));
    let provider = FixedProvider {
        candles,
        mark_price: 115.7,
    };

    let err = build_snapshot(&provider, "BTC-USDT-SWAP", &[Timeframe::M15], config(20))
        .await
        .unwrap_err();
    assert!(err.to_string().contains("open"));
}
