//! Candle-to-series normalization.

use thiserror::Error;

use crate::models::{candle::RawCandle, series::TimeframeSeries};

/// A candle field that could not be coerced to a number.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("malformed candle: field `{field}` at index {index} is not numeric ({value:?})")]
pub struct ParseError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Position of the candle in the wire payload.
    pub index: usize,
    /// The raw value that failed coercion.
    pub value: String,
}

/// Converts the exchange's newest-first candle rows into five equal-length
/// chronological sequences, dropping bars that are still forming.
///
/// A field that fails numeric coercion aborts the whole series rather than
/// being zeroed or skipped; either would desynchronize the five parallel
/// sequences.
pub fn normalize(candles: &[RawCandle]) -> Result<TimeframeSeries, ParseError> {
    let mut series = TimeframeSeries::default();
    for (index, candle) in candles.iter().enumerate().rev() {
        if !candle.is_closed() {
            continue;
        }
        let open = parse_field(candle.open(), "open", index)?;
        let high = parse_field(candle.high(), "high", index)?;
        let low = parse_field(candle.low(), "low", index)?;
        let close = parse_field(candle.close(), "close", index)?;
        let volume = parse_field(candle.volume(), "volume", index)?;
        series.push(open, high, low, close, volume);
    }
    Ok(series)
}

fn parse_field(raw: &str, field: &'static str, index: usize) -> Result<f64, ParseError> {
    raw.parse::<f64>().map_err(|_| ParseError {
        field,
        index,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn closed(ts: &str, open: &str, close: &str) -> RawCandle {
        RawCandle::new(ts, open, "10", "1", close, "100", true)
    }

    #[test]
    fn emits_equal_length_ascending_sequences() {
        // Wire order is newest-first; the series must come out oldest-first.
        let candles = vec![
            closed("3000", "3.0", "3.5"),
            closed("2000", "2.0", "2.5"),
            closed("1000", "1.0", "1.5"),
        ];
        let series = normalize(&candles).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.open, vec![1.0, 2.0, 3.0]);
        assert_eq!(series.close, vec![1.5, 2.5, 3.5]);
        assert_eq!(series.high.len(), series.volume.len());
    }

    #[test]
    fn forming_bars_are_dropped() {
        let candles = vec![
            RawCandle::new("3000", "3.0", "10", "1", "3.5", "100", false),
            closed("2000", "2.0", "2.5"),
            closed("1000", "1.0", "1.5"),
        ];
        let series = normalize(&candles).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.close, vec![1.5, 2.5]);
    }

    #[test]
    fn malformed_field_names_field_and_index() {
        let candles = vec![
            closed("2000", "2.0", "2.5"),
            RawCandle::new("1000", "1.0", "10", "1", "not-a-number", "100", true),
        ];
        let err = normalize(&candles).unwrap_err();
        assert_eq!(err.field, "close");
        assert_eq!(err.index, 1);
        assert_eq!(err.value, "not-a-number");
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let series = normalize(&[]).unwrap();
        assert!(series.is_empty());
    }
}
