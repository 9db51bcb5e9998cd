//! Volume-Weighted Average Price over a trailing window.
//!
//! VWAP(w)[i] = sum(price[i-w..=i] * volume[i-w..=i]) / sum(volume[i-w..=i])
//! Warmup: indices `i < w` are 0.0. A zero volume sum in the window gives NaN.

use crate::domain::error::BlackhawkError;
use crate::domain::metric::{check_non_empty, check_same_length};

/// Direct per-index windowed reduction. Reference implementation.
pub fn vwap(price: &[f64], volume: &[f64], window: usize) -> Result<Vec<f64>, BlackhawkError> {
    check_non_empty(price)?;
    check_same_length(price, volume)?;

    let mut out = vec![0.0; price.len()];
    for i in window..price.len() {
        let lb = i - window;
        let pv: f64 = (lb..=i).map(|j| price[j] * volume[j]).sum();
        let v: f64 = volume[lb..=i].iter().sum();
        out[i] = if v == 0.0 { f64::NAN } else { pv / v };
    }
    Ok(out)
}

/// Prefix-sum variant of [`vwap`]. O(n) regardless of window size; must agree
/// with the direct variant within floating tolerance.
pub fn vwap_fast(
    price: &[f64],
    volume: &[f64],
    window: usize,
) -> Result<Vec<f64>, BlackhawkError> {
    check_non_empty(price)?;
    check_same_length(price, volume)?;

    let n = price.len();
    let mut prefix_pv = vec![0.0; n + 1];
    let mut prefix_v = vec![0.0; n + 1];
    for i in 0..n {
        prefix_pv[i + 1] = prefix_pv[i] + price[i] * volume[i];
        prefix_v[i + 1] = prefix_v[i] + volume[i];
    }

    let mut out = vec![0.0; n];
    for i in window..n {
        let pv = prefix_pv[i + 1] - prefix_pv[i - window];
        let v = prefix_v[i + 1] - prefix_v[i - window];
        out[i] = if v == 0.0 { f64::NAN } else { pv / v };
    }
    Ok(out)
}

/// Cumulative VWAP anchored at index 0: cumsum(price * volume) / cumsum(volume).
/// NaN while the cumulative volume is still zero.
pub fn anchored_vwap(price: &[f64], volume: &[f64]) -> Result<Vec<f64>, BlackhawkError> {
    check_non_empty(price)?;
    check_same_length(price, volume)?;

    let mut out = Vec::with_capacity(price.len());
    let mut cum_pv = 0.0;
    let mut cum_v = 0.0;
    for (p, v) in price.iter().zip(volume) {
        cum_pv += p * v;
        cum_v += v;
        out.push(if cum_v == 0.0 { f64::NAN } else { cum_pv / cum_v });
    }
    Ok(out)
}
