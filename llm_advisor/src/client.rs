//! Chat-completion request construction.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;

use crate::{errors::Error, stream::CompletionStream};

const DEFAULT_MAX_TOKENS: u32 = 10_000;

/// A chat message in the OpenAI wire format.
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
    temperature: f32,
    response_format: ResponseFormat,
    max_tokens: u32,
}

/// Streaming client for an OpenAI-compatible chat-completions endpoint.
pub struct ChatClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: SecretString,
    max_tokens: u32,
}

impl ChatClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: SecretString,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            model: model.into(),
            api_key,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Caps the completion's output tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Opens a streaming completion. Sampling is deterministic
    /// (`temperature: 0`) and the response contract is a single JSON
    /// object.
    pub async fn stream_chat(&self, messages: &[Message]) -> Result<CompletionStream, Error> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            stream: true,
            temperature: 0.0,
            response_format: ResponseFormat {
                format_type: "json_object".to_string(),
            },
            max_tokens: self.max_tokens,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!(%url, model = %self.model, "opening completion stream");
        let response = self
            .http
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }
        Ok(CompletionStream::new(response))
    }
}
