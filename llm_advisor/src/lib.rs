//! Streaming client for an OpenAI-compatible chat-completions endpoint.
//!
//! The completion is consumed incrementally as two interleaved channels: a
//! reasoning side-channel forwarded live, and a final-answer buffer that
//! accumulates silently and is parsed as JSON once the stream completes.

pub mod client;
pub mod errors;
pub mod stream;

pub use client::{ChatClient, Message};
pub use errors::Error;
pub use stream::CompletionStream;

/// Parses the accumulated final answer as a JSON document.
///
/// An empty buffer violates the response contract and surfaces as the same
/// parse failure as syntactically invalid JSON; the raw buffer rides along
/// so a bad model response can be diagnosed.
pub fn parse_plan(raw: &str) -> Result<serde_json::Value, Error> {
    serde_json::from_str(raw).map_err(|source| Error::InvalidPlan {
        raw: raw.to_string(),
        source,
    })
}
