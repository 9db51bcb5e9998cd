//! Long/flat trading signal from a price-over-metric crossover.
//!
//! The output is one element longer than the price series: entry 0 is always
//! `false` (no position before period 0), and entry `i + 1` is the decision
//! made on period `i`'s data. The caller never trades on same-period
//! information; see [`crate::domain::value`].

use crate::domain::error::BlackhawkError;
use crate::domain::metric::{check_non_empty, check_same_length};

/// Entry `i + 1` is `true` iff `price[i] > metric[i]` and `i >= lookback`.
///
/// The lookback guard keeps warmup-filled metric values (0.0 for `i <
/// window`) from generating spurious entries; NaN metric values compare
/// false on their own.
pub fn signal(
    metric: &[f64],
    price: &[f64],
    lookback: usize,
) -> Result<Vec<bool>, BlackhawkError> {
    check_non_empty(price)?;
    check_same_length(price, metric)?;

    let mut out = Vec::with_capacity(price.len() + 1);
    out.push(false);
    for i in 0..price.len() {
        out.push(i >= lookback && price[i] > metric[i]);
    }
    Ok(out)
}
