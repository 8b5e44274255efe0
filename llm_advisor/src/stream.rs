//! Incremental consumption of the completion response.
//!
//! The response body is a server-sent-event stream. Each event's delta
//! carries either a fragment of the final answer or a fragment of the
//! model's reasoning, never both channels at once. Final-answer fragments
//! accumulate silently in the demultiplexer while reasoning fragments are
//! forwarded live; the buffer is yielded as one string when the upstream
//! signals completion.

use futures::StreamExt;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::debug;

use crate::errors::Error;

#[derive(Debug, Deserialize)]
struct ChunkPayload {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    delta: Delta,
}

/// The delta of one stream chunk. At most one of the two channels is
/// populated; a delta carrying neither is ignored by the demultiplexer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Delta {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub reasoning_content: Option<String>,
}

/// One decoded server-sent event.
#[derive(Debug, PartialEq)]
pub enum SseEvent {
    /// The payload of a `data:` line.
    Data(String),
    /// The `[DONE]` sentinel ending the stream.
    Done,
}

/// Accumulates response bytes and yields complete `data:` payloads.
///
/// Network chunks can split an event anywhere, including inside a UTF-8
/// sequence, so the buffer holds raw bytes and a line is only decoded once
/// its terminating newline has arrived.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buf: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, bytes: &[u8]) -> Vec<SseEvent> {
        self.buf.extend_from_slice(bytes);
        let mut events = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            let Ok(line) = std::str::from_utf8(&line) else {
                debug!("skipping non-UTF-8 stream line");
                continue;
            };
            let Some(payload) = line.trim().strip_prefix("data:") else {
                continue;
            };
            let payload = payload.trim();
            if payload == "[DONE]" {
                events.push(SseEvent::Done);
            } else if !payload.is_empty() {
                events.push(SseEvent::Data(payload.to_string()));
            }
        }
        events
    }
}

/// Splits stream deltas into the final-answer buffer and the live
/// reasoning channel.
///
/// The demultiplexer is the sole owner of the buffer while the stream is
/// running; [`finish`](Self::finish) consumes it, so the buffer can be read
/// exactly once and only after the stream is done.
#[derive(Debug, Default)]
pub struct ResponseDemux {
    plan: String,
}

impl ResponseDemux {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes one delta. A final-answer fragment is appended to the buffer
    /// and nothing is emitted; a reasoning fragment is returned for the
    /// live view and never buffered. An unrecognized shape is a no-op so
    /// one malformed chunk cannot void the rest of the response.
    pub fn accept(&mut self, delta: Delta) -> Option<String> {
        if let Some(fragment) = delta.content {
            self.plan.push_str(&fragment);
            None
        } else {
            delta.reasoning_content
        }
    }

    /// Ends the stream and yields the accumulated final answer. An empty
    /// buffer comes back as-is; deciding that it violates the response
    /// contract is the caller's job.
    pub fn finish(self) -> String {
        self.plan
    }
}

/// A live completion stream plus the demultiplexer that consumes it.
pub struct CompletionStream {
    response: reqwest::Response,
}

impl CompletionStream {
    pub(crate) fn new(response: reqwest::Response) -> Self {
        Self { response }
    }

    /// Consumes the stream chunk-by-chunk, strictly in arrival order.
    /// Reasoning fragments are sent on `reasoning` as they arrive; the
    /// final answer accumulates silently and is returned once the upstream
    /// signals completion.
    ///
    /// A dropped receiver does not stop accumulation: the final buffer is
    /// still collected and returned.
    pub async fn collect_plan(self, reasoning: mpsc::Sender<String>) -> Result<String, Error> {
        let mut body = self.response.bytes_stream();
        let mut decoder = SseDecoder::new();
        let mut demux = ResponseDemux::new();

        'stream: while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            for event in decoder.feed(&chunk) {
                match event {
                    SseEvent::Done => break 'stream,
                    SseEvent::Data(payload) => {
                        let payload: ChunkPayload = match serde_json::from_str(&payload) {
                            Ok(payload) => payload,
                            Err(err) => {
                                debug!(%err, "skipping malformed stream event");
                                continue;
                            }
                        };
                        let Some(choice) = payload.choices.into_iter().next() else {
                            continue;
                        };
                        if let Some(fragment) = demux.accept(choice.delta) {
                            let _ = reasoning.send(fragment).await;
                        }
                    }
                }
            }
        }

        Ok(demux.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_delta(s: &str) -> Delta {
        Delta {
            content: Some(s.to_string()),
            reasoning_content: None,
        }
    }

    fn reasoning_delta(s: &str) -> Delta {
        Delta {
            content: None,
            reasoning_content: Some(s.to_string()),
        }
    }

    #[test]
    fn demux_splits_the_two_channels() {
        let mut demux = ResponseDemux::new();
        let mut live = Vec::new();

        for delta in [
            reasoning_delta("a"),
            final_delta("{"),
            final_delta("\"x\":1}"),
            reasoning_delta("b"),
        ] {
            if let Some(fragment) = demux.accept(delta) {
                live.push(fragment);
            }
        }

        assert_eq!(live, vec!["a", "b"]);
        assert_eq!(demux.finish(), "{\"x\":1}");
    }

    #[test]
    fn unrecognized_delta_shape_is_a_noop() {
        let mut demux = ResponseDemux::new();
        assert_eq!(demux.accept(Delta::default()), None);
        demux.accept(final_delta("{}"));
        assert_eq!(demux.accept(Delta::default()), None);
        assert_eq!(demux.finish(), "{}");
    }

    #[test]
    fn empty_stream_finishes_with_an_empty_buffer() {
        let demux = ResponseDemux::new();
        assert_eq!(demux.finish(), "");
    }

    #[test]
    fn decoder_reassembles_events_split_across_chunks() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.feed(b"data: {\"choi").is_empty());
        let events = decoder.feed(b"ces\":[]}\n\ndata: [DONE]\n");
        assert_eq!(
            events,
            vec![
                SseEvent::Data("{\"choices\":[]}".to_string()),
                SseEvent::Done,
            ]
        );
    }

    #[test]
    fn decoder_skips_comment_and_blank_lines() {
        let mut decoder = SseDecoder::new();
        let events = decoder.feed(b": keep-alive\n\ndata: {\"a\":1}\n");
        assert_eq!(events, vec![SseEvent::Data("{\"a\":1}".to_string())]);
    }

    #[test]
    fn delta_parses_either_channel_from_the_wire() {
        let payload: ChunkPayload =
            serde_json::from_str(r#"{"choices":[{"delta":{"reasoning_content":"hmm"}}]}"#)
                .unwrap();
        assert_eq!(
            payload.choices[0].delta,
            Delta {
                content: None,
                reasoning_content: Some("hmm".to_string())
            }
        );

        let payload: ChunkPayload =
            serde_json::from_str(r#"{"choices":[{"delta":{"content":"{"}}]}"#).unwrap();
        assert_eq!(payload.choices[0].delta.content.as_deref(), Some("{"));
    }
}
