#![allow(dead_code)]

use blackhawk::domain::bar::Bar;
use blackhawk::domain::error::BlackhawkError;
use blackhawk::ports::data_port::DataPort;
use chrono::NaiveDate;

pub struct MockDataPort {
    pub bars: Vec<Bar>,
    pub error: Option<String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            bars: Vec::new(),
            error: None,
        }
    }

    pub fn with_bars(mut self, bars: Vec<Bar>) -> Self {
        self.bars = bars;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_bars(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Bar>, BlackhawkError> {
        if let Some(reason) = &self.error {
            return Err(BlackhawkError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self
            .bars
            .iter()
            .filter(|b| {
                !start_date.is_some_and(|s| b.date < s) && !end_date.is_some_and(|e| b.date > e)
            })
            .cloned()
            .collect())
    }

    fn data_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, BlackhawkError> {
        if let Some(reason) = &self.error {
            return Err(BlackhawkError::Data {
                reason: reason.clone(),
            });
        }
        match (self.bars.first(), self.bars.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, self.bars.len()))),
            _ => Ok(None),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn make_bar(day: &str, open: f64, volume: f64) -> Bar {
    Bar {
        date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
        open,
        high: open + 2.0,
        low: open - 2.0,
        close: open + 1.0,
        volume,
    }
}

/// Bars on consecutive days starting 2024-01-01, opens taken from `opens`.
pub fn generate_bars(opens: &[f64]) -> Vec<Bar> {
    opens
        .iter()
        .enumerate()
        .map(|(i, &open)| Bar {
            date: date(2024, 1, 1) + chrono::Days::new(i as u64),
            open,
            high: open + 2.0,
            low: open - 2.0,
            close: open + 1.0,
            volume: 1000.0,
        })
        .collect()
}
