//! Daily price bar representation.

use chrono::NaiveDate;

/// One period of price/volume data, oldest-first in any series.
#[derive(Debug, Clone)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Which per-bar price feeds the metric and signal calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceSource {
    /// (high + low) / 2
    Average,
    Close,
    Open,
}

impl Bar {
    /// (high + low) / 2
    pub fn average_price(&self) -> f64 {
        (self.high + self.low) / 2.0
    }

    pub fn price(&self, source: PriceSource) -> f64 {
        match source {
            PriceSource::Average => self.average_price(),
            PriceSource::Close => self.close,
            PriceSource::Open => self.open,
        }
    }
}
