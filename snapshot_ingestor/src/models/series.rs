//! Parallel numeric price sequences for one timeframe.

use serde::Serialize;

/// Five parallel chronological sequences for a single timeframe.
///
/// Invariant: all five vectors have equal length at every point in the
/// pipeline, and index `i` across all five refers to the same time bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeframeSeries {
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
}

impl TimeframeSeries {
    /// Number of time buckets in the series.
    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    /// Appends one bucket to all five sequences, preserving the equal-length
    /// invariant.
    pub(crate) fn push(&mut self, open: f64, high: f64, low: f64, close: f64, volume: f64) {
        self.open.push(open);
        self.high.push(high);
        self.low.push(low);
        self.close.push(close);
        self.volume.push(volume);
    }
}
