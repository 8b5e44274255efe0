use thiserror::Error;

/// Errors that can occur within a `MarketDataProvider` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The exchange returned a non-success HTTP status or error envelope.
    #[error("API error: {0}")]
    Api(String),

    /// A payload field did not have the expected shape.
    #[error("Malformed payload: {0}")]
    Payload(String),
}
