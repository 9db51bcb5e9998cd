//! Rolling metric implementations.
//!
//! Each metric produces one output per input index. Indices still inside the
//! warmup region (`i < window`) are filled with 0.0; a windowed volume sum of
//! exactly zero yields NaN rather than an error. Output index `i` depends
//! only on inputs at indices `<= i`.

pub mod sma;
pub mod vwap;

use crate::domain::error::BlackhawkError;
use std::fmt;

/// Metric identity plus its trailing window parameter `w` (window covers
/// `w + 1` observations ending at the current index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricType {
    Vwap(usize),
    Sma(usize),
}

impl MetricType {
    pub fn window(&self) -> usize {
        match self {
            MetricType::Vwap(w) | MetricType::Sma(w) => *w,
        }
    }

    /// Compute this metric over aligned price/volume series.
    ///
    /// Dispatches to the prefix-sum variants; the direct per-index variants
    /// exist as the reference implementation and for equivalence testing.
    pub fn compute(&self, price: &[f64], volume: &[f64]) -> Result<Vec<f64>, BlackhawkError> {
        match self {
            MetricType::Vwap(w) => vwap::vwap_fast(price, volume, *w),
            MetricType::Sma(w) => sma::sma_fast(price, *w),
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricType::Vwap(w) => write!(f, "VWAP({})", w),
            MetricType::Sma(w) => write!(f, "SMA({})", w),
        }
    }
}

pub(crate) fn check_non_empty(series: &[f64]) -> Result<(), BlackhawkError> {
    if series.is_empty() {
        return Err(BlackhawkError::InvalidInput {
            reason: "empty series".into(),
        });
    }
    Ok(())
}

pub(crate) fn check_same_length(left: &[f64], right: &[f64]) -> Result<(), BlackhawkError> {
    if left.len() != right.len() {
        return Err(BlackhawkError::LengthMismatch {
            expected: left.len(),
            actual: right.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_type_display() {
        assert_eq!(MetricType::Vwap(20).to_string(), "VWAP(20)");
        assert_eq!(MetricType::Sma(50).to_string(), "SMA(50)");
    }

    #[test]
    fn metric_type_window() {
        assert_eq!(MetricType::Vwap(20).window(), 20);
        assert_eq!(MetricType::Sma(0).window(), 0);
    }

    #[test]
    fn metric_type_hash_eq() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(MetricType::Vwap(20), "vwap20");
        map.insert(MetricType::Sma(20), "sma20");

        assert_eq!(map.get(&MetricType::Vwap(20)), Some(&"vwap20"));
        assert_eq!(map.get(&MetricType::Sma(20)), Some(&"sma20"));
        assert_eq!(map.get(&MetricType::Sma(50)), None);
    }

    #[test]
    fn compute_dispatches_sma() {
        let price = [10.0, 20.0, 30.0];
        let volume = [1.0, 1.0, 1.0];
        let out = MetricType::Sma(1).compute(&price, &volume).unwrap();
        assert!((out[1] - 15.0).abs() < 1e-12);
        assert!((out[2] - 25.0).abs() < 1e-12);
    }

    #[test]
    fn compute_dispatches_vwap() {
        let price = [100.0, 110.0, 121.0];
        let volume = [1.0, 1.0, 1.0];
        let out = MetricType::Vwap(1).compute(&price, &volume).unwrap();
        assert!((out[1] - 105.0).abs() < 1e-12);
        assert!((out[2] - 115.5).abs() < 1e-12);
    }
}
