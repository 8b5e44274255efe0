//! Provider abstraction for exchange market data.
//!
//! [`MarketDataProvider`] is the unified interface over the three exchange
//! endpoints the snapshot pipeline consumes: instrument listing, candle
//! history, and mark price. The trait is async and object-safe so callers
//! can select a provider at runtime.

pub mod errors;
pub mod okx_rest;

pub use errors::ProviderError;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::{
    candle::RawCandle,
    instrument::{InstType, Instrument},
    timeframe::Timeframe,
};

#[async_trait]
pub trait MarketDataProvider {
    /// Lists the instruments of one class.
    async fn instruments(&self, inst_type: InstType) -> Result<Vec<Instrument>, ProviderError>;

    /// Fetches up to `limit` candles for `inst_id` at interval `bar`,
    /// covering bars strictly before `after`. Rows come back exactly as the
    /// exchange delivers them: newest first, numeric fields as strings.
    async fn candles(
        &self,
        inst_id: &str,
        bar: Timeframe,
        after: DateTime<Utc>,
        limit: u32,
    ) -> Result<Vec<RawCandle>, ProviderError>;

    /// Latest mark price for a derivative instrument.
    async fn mark_price(&self, inst_type: InstType, inst_id: &str)
        -> Result<f64, ProviderError>;
}
