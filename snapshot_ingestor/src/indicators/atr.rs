/// Average true range with Wilder smoothing.
///
/// True range for the first bar is `high - low` (no prior close); afterwards
/// it is `max(high-low, |high-prev_close|, |low-prev_close|)`. The first ATR
/// value is the simple mean of the first `period` true ranges, then
/// `atr = (prev·(period−1) + tr) / period`. Output length follows the same
/// warm-up contract as [`ema`](super::ema): `len - period + 1`, empty when
/// the input is shorter than `period`.
pub fn atr(high: &[f64], low: &[f64], close: &[f64], period: usize) -> Vec<f64> {
    debug_assert!(high.len() == low.len() && low.len() == close.len());
    let n = close.len();
    if period == 0 || n < period {
        return Vec::new();
    }

    let mut true_ranges = Vec::with_capacity(n);
    for i in 0..n {
        let range = high[i] - low[i];
        let tr = if i == 0 {
            range
        } else {
            let prev_close = close[i - 1];
            range
                .max((high[i] - prev_close).abs())
                .max((low[i] - prev_close).abs())
        };
        true_ranges.push(tr);
    }

    let seed = true_ranges[..period].iter().sum::<f64>() / period as f64;
    let mut out = Vec::with_capacity(n - period + 1);
    out.push(seed);
    let mut prev = seed;
    for &tr in &true_ranges[period..] {
        prev = (prev * (period as f64 - 1.0) + tr) / period as f64;
        out.push(prev);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wilder_smoothing_matches_hand_computation() {
        let high = [12.0, 13.0, 14.0, 15.0];
        let low = [10.0, 11.0, 12.0, 13.0];
        let close = [11.0, 12.0, 13.0, 14.0];
        // TR = [2, max(2,|13-11|,|11-11|)=2, 2, 2]
        let out = atr(&high, &low, &close, 2);
        assert_eq!(out.len(), 3);
        assert!((out[0] - 2.0).abs() < 1e-10);
        assert!((out[1] - 2.0).abs() < 1e-10);
        assert!((out[2] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn gap_down_widens_true_range() {
        let high = [12.0, 9.0];
        let low = [10.0, 8.0];
        let close = [11.0, 8.5];
        // TR[1] = max(1, |9-11|, |8-11|) = 3; seed over period 2 = (2+3)/2
        let out = atr(&high, &low, &close, 2);
        assert_eq!(out.len(), 1);
        assert!((out[0] - 2.5).abs() < 1e-10);
    }

    #[test]
    fn input_shorter_than_period_is_empty() {
        assert!(atr(&[1.0], &[1.0], &[1.0], 2).is_empty());
        assert!(atr(&[], &[], &[], 14).is_empty());
    }
}
