use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    models::{
        candle::RawCandle,
        instrument::{InstType, Instrument},
        timeframe::Timeframe,
    },
    providers::{MarketDataProvider, ProviderError},
};

use super::response::{MarkPriceRow, OkxEnvelope};

const BASE_URL: &str = "https://www.okx.com";

/// Client for the OKX v5 public REST endpoints.
///
/// None of the endpoints the snapshot pipeline uses require authentication,
/// so the provider carries no credentials.
pub struct OkxRestProvider {
    client: Client,
    base_url: String,
}

impl OkxRestProvider {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_base_url(BASE_URL)
    }

    /// Points the provider at a different host; used by tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, ProviderError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self.client.get(&url).query(query).send().await?;

        if !response.status().is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(message));
        }

        let envelope = response.json::<OkxEnvelope<T>>().await?;
        if envelope.code != "0" {
            return Err(ProviderError::Api(format!(
                "code {}: {}",
                envelope.code, envelope.msg
            )));
        }
        Ok(envelope.data)
    }
}

#[async_trait]
impl MarketDataProvider for OkxRestProvider {
    async fn instruments(&self, inst_type: InstType) -> Result<Vec<Instrument>, ProviderError> {
        self.get_data(
            "/api/v5/public/instruments",
            &[("instType", inst_type.as_str().to_string())],
        )
        .await
    }

    async fn candles(
        &self,
        inst_id: &str,
        bar: Timeframe,
        after: DateTime<Utc>,
        limit: u32,
    ) -> Result<Vec<RawCandle>, ProviderError> {
        self.get_data(
            "/api/v5/market/candles",
            &[
                ("instId", inst_id.to_string()),
                ("bar", bar.bar_str().to_string()),
                ("after", after.timestamp_millis().to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    async fn mark_price(
        &self,
        inst_type: InstType,
        inst_id: &str,
    ) -> Result<f64, ProviderError> {
        let rows: Vec<MarkPriceRow> = self
            .get_data(
                "/api/v5/public/mark-price",
                &[
                    ("instType", inst_type.as_str().to_string()),
                    ("instId", inst_id.to_string()),
                ],
            )
            .await?;

        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Payload("mark-price returned no rows".to_string()))?;
        row.mark_px.parse::<f64>().map_err(|_| {
            ProviderError::Payload(format!("markPx is not numeric: {:?}", row.mark_px))
        })
    }
}
