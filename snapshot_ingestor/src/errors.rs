use thiserror::Error;

use crate::{normalize::ParseError, providers::ProviderError};

/// The unified error type for the `snapshot_ingestor` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from the market data provider.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// A malformed candle field in the exchange payload.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The requested symbol is not listed on the exchange.
    #[error("symbol {0:?} is not listed as a SPOT or SWAP instrument")]
    UnknownSymbol(String),
}
