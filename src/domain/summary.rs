//! Console summary statistics for a value curve.

/// Aggregate figures printed after a backtest run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total_return: f64,
    pub periods_held: usize,
    pub round_trips: usize,
    pub max_drawdown: f64,
}

impl Summary {
    /// `signal` may be the raw signal() output (one longer than the curve);
    /// only entries with an observed return are counted.
    pub fn compute(signal: &[bool], value: &[f64]) -> Self {
        let final_value = value.last().copied().unwrap_or(1.0);
        let total_return = final_value - 1.0;

        let held = &signal[..signal.len().min(value.len())];
        let periods_held = held.iter().filter(|&&h| h).count();

        let mut round_trips = 0usize;
        let mut prev = false;
        for &h in held {
            if h && !prev {
                round_trips += 1;
            }
            prev = h;
        }

        Summary {
            total_return,
            periods_held,
            round_trips,
            max_drawdown: compute_drawdown(value),
        }
    }
}

fn compute_drawdown(value: &[f64]) -> f64 {
    if value.is_empty() {
        return 0.0;
    }

    let mut peak = value[0];
    let mut max_dd = 0.0_f64;
    for &v in value {
        if v > peak {
            peak = v;
        } else if peak > 0.0 {
            let dd = (peak - v) / peak;
            if dd > max_dd {
                max_dd = dd;
            }
        }
    }
    max_dd
}
