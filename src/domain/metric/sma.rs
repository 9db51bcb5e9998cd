//! Simple Moving Average over a trailing window.
//!
//! SMA(w)[i] = mean(price[i-w..=i]), a window of `w + 1` observations.
//! Warmup: indices `i < w` are 0.0.

use crate::domain::error::BlackhawkError;
use crate::domain::metric::check_non_empty;

/// Direct per-index windowed reduction. Reference implementation.
pub fn sma(price: &[f64], window: usize) -> Result<Vec<f64>, BlackhawkError> {
    check_non_empty(price)?;

    let divisor = (window + 1) as f64;
    let mut out = vec![0.0; price.len()];
    for i in window..price.len() {
        let lb = i - window;
        out[i] = price[lb..=i].iter().sum::<f64>() / divisor;
    }
    Ok(out)
}

/// Prefix-sum variant of [`sma`]. O(n) regardless of window size; must agree
/// with the direct variant within floating tolerance.
pub fn sma_fast(price: &[f64], window: usize) -> Result<Vec<f64>, BlackhawkError> {
    check_non_empty(price)?;

    let n = price.len();
    let mut prefix = vec![0.0; n + 1];
    for i in 0..n {
        prefix[i + 1] = prefix[i] + price[i];
    }

    let divisor = (window + 1) as f64;
    let mut out = vec![0.0; n];
    for i in window..n {
        out[i] = (prefix[i + 1] - prefix[i - window]) / divisor;
    }
    Ok(out)
}
