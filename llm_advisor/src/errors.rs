use thiserror::Error;

/// The unified error type for the `llm_advisor` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An error during the completion request or while reading its body.
    #[error("Completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The completion endpoint rejected the request.
    #[error("Completion API error {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The accumulated final answer is empty or not valid JSON. The raw
    /// buffer is carried so the offending model output can be inspected.
    #[error("model response is not valid JSON ({source}); raw buffer: {raw:?}")]
    InvalidPlan {
        raw: String,
        #[source]
        source: serde_json::Error,
    },
}
