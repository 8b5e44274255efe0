//! The candle row exactly as the OKX market endpoint delivers it.

use serde::Deserialize;

/// One candle as returned by `/api/v5/market/candles`: a positional array
/// of strings, newest bar first in the payload.
///
/// Layout: `[ts, open, high, low, close, vol, volCcy, volCcyQuote, confirm]`.
/// `confirm` is `"1"` once the bar has closed; a still-forming bar carries
/// `"0"` and is not eligible for normalization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCandle(
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
    String,
);

impl RawCandle {
    /// Builds a candle row from its logical fields. The two quote-volume
    /// columns are not consumed by the pipeline and default to `"0"`.
    pub fn new(
        ts: &str,
        open: &str,
        high: &str,
        low: &str,
        close: &str,
        volume: &str,
        closed: bool,
    ) -> Self {
        Self(
            ts.to_string(),
            open.to_string(),
            high.to_string(),
            low.to_string(),
            close.to_string(),
            volume.to_string(),
            "0".to_string(),
            "0".to_string(),
            if closed { "1" } else { "0" }.to_string(),
        )
    }

    /// Bar open time in epoch milliseconds, as delivered.
    pub fn ts(&self) -> &str {
        &self.0
    }

    pub fn open(&self) -> &str {
        &self.1
    }

    pub fn high(&self) -> &str {
        &self.2
    }

    pub fn low(&self) -> &str {
        &self.3
    }

    pub fn close(&self) -> &str {
        &self.4
    }

    pub fn volume(&self) -> &str {
        &self.5
    }

    /// Whether the exchange marks this bar as closed rather than forming.
    pub fn is_closed(&self) -> bool {
        self.8 == "1"
    }
}
