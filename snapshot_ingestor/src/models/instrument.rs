//! Exchange instrument listings, used for symbol membership validation.

use serde::Deserialize;

use crate::errors::Error;

/// The instrument classes the advisor validates symbols against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstType {
    Spot,
    Swap,
}

impl InstType {
    /// The wire value for the `instType` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstType::Spot => "SPOT",
            InstType::Swap => "SWAP",
        }
    }
}

/// A listed instrument, reduced to the fields membership validation needs.
/// Unknown payload fields are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Instrument {
    #[serde(rename = "instId")]
    pub inst_id: String,
    #[serde(rename = "instType")]
    pub inst_type: String,
}

/// Confirms `symbol` appears in at least one of the two listings.
///
/// Runs before any candle or model work; an unknown symbol is fatal to the
/// run and carries the symbol in the message so the caller can correct it.
pub fn validate_symbol(
    symbol: &str,
    spot: &[Instrument],
    swap: &[Instrument],
) -> Result<(), Error> {
    if spot.iter().chain(swap.iter()).any(|inst| inst.inst_id == symbol) {
        Ok(())
    } else {
        Err(Error::UnknownSymbol(symbol.to_string()))
    }
}
