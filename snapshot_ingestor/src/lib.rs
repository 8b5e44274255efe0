//! Multi-timeframe OHLCV snapshot construction.
//!
//! Fetches candle history and the mark price from the exchange, reduces the
//! candles to fixed-window numeric series augmented with EMA/ATR indicators,
//! and assembles the single serializable payload handed to the language
//! model.

pub mod compact;
pub mod errors;
pub mod indicators;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod providers;
