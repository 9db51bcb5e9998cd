//! Bar series access port trait.
//!
//! Producers must honor the series contract: chronologically ordered bars,
//! oldest first, no gaps guaranteed.

use crate::domain::bar::Bar;
use crate::domain::error::BlackhawkError;
use chrono::NaiveDate;

pub trait DataPort {
    fn fetch_bars(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Bar>, BlackhawkError>;

    fn data_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, BlackhawkError>;
}
