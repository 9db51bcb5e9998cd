//! Cumulative portfolio value from a held-position signal and open prices.
//!
//! `value[i]` scales period `i`'s open-to-open return by `signal[i]`, the
//! position held entering period `i`. Because `signal()` prepends an entry,
//! `signal[i]` was decided on data strictly before period `i` opened; this
//! lag-by-one alignment is the central correctness property of the engine
//! and must not be disturbed.

use crate::domain::error::BlackhawkError;

/// `value[0] = 1.0`; `value[i] = value[i-1] * (1 + s_i * delta_i)` where
/// `delta_i = (open[i] - open[i-1]) / open[i-1]` and `s_i` is 1 when
/// `signal[i]` holds.
///
/// The signal may be the same length as `open`, or one element longer (the
/// raw [`crate::domain::signal::signal`] output); a trailing extra entry is
/// the position for the next, not-yet-observed period and is ignored.
pub fn value(signal: &[bool], open: &[f64]) -> Result<Vec<f64>, BlackhawkError> {
    if open.is_empty() {
        return Err(BlackhawkError::InvalidInput {
            reason: "empty series".into(),
        });
    }
    if signal.len() != open.len() && signal.len() != open.len() + 1 {
        return Err(BlackhawkError::LengthMismatch {
            expected: open.len(),
            actual: signal.len(),
        });
    }

    let mut out = Vec::with_capacity(open.len());
    out.push(1.0);
    for i in 1..open.len() {
        let delta = (open[i] - open[i - 1]) / open[i - 1];
        let scaled = if signal[i] { delta } else { 0.0 };
        out.push(out[i - 1] * (1.0 + scaled));
    }
    Ok(out)
}
