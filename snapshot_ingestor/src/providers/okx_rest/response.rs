use serde::Deserialize;

/// The standard OKX v5 response envelope: every endpoint wraps its rows in
/// `{code, msg, data}` with a string status code (`"0"` = success).
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct OkxEnvelope<T> {
    pub code: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Vec<T>,
}

/// One row of the mark-price endpoint; the price arrives as a numeric
/// string.
#[derive(Debug, Deserialize)]
pub struct MarkPriceRow {
    #[serde(rename = "markPx")]
    pub mark_px: String,
}
