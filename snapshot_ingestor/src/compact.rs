//! Fixed-window truncation applied to every outbound sequence.

use crate::models::series::TimeframeSeries;

/// Keeps the last `window` elements of `values`, in place.
///
/// No-op when the sequence already fits, which makes the operation
/// idempotent; empty input is valid and stays empty. Applies identically to
/// raw price sequences and derived indicator output.
pub fn compact_tail(values: &mut Vec<f64>, window: usize) {
    if values.len() > window {
        values.drain(..values.len() - window);
    }
}

/// Compacts all five price sequences of a series to the same window.
pub fn compact_series(series: &mut TimeframeSeries, window: usize) {
    compact_tail(&mut series.open, window);
    compact_tail(&mut series.high, window);
    compact_tail(&mut series.low, window);
    compact_tail(&mut series.close, window);
    compact_tail(&mut series.volume, window);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn keeps_the_most_recent_points() {
        let mut values: Vec<f64> = (0..30).map(f64::from).collect();
        compact_tail(&mut values, 10);
        assert_eq!(values, (20..30).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn short_input_is_untouched() {
        let mut values = vec![1.0, 2.0, 3.0];
        compact_tail(&mut values, 20);
        assert_eq!(values, vec![1.0, 2.0, 3.0]);

        let mut empty: Vec<f64> = Vec::new();
        compact_tail(&mut empty, 20);
        assert!(empty.is_empty());
    }

    proptest! {
        #[test]
        fn compacting_twice_equals_compacting_once(
            values in proptest::collection::vec(-1e9f64..1e9, 0..64),
            window in 0usize..48,
        ) {
            let mut once = values.clone();
            compact_tail(&mut once, window);
            prop_assert!(once.len() <= window);

            let mut twice = once.clone();
            compact_tail(&mut twice, window);
            prop_assert_eq!(once, twice);
        }
    }
}
