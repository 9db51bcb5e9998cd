//! Report output port trait.

use crate::domain::bar::Bar;
use crate::domain::error::BlackhawkError;
use std::path::Path;

/// One output row per input period.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub bar: Bar,
    pub price: f64,
    pub metric: f64,
    /// Position held entering this period; None for metric-only reports.
    pub signal: Option<bool>,
    pub value: Option<f64>,
}

/// Port for writing the computed per-period series.
pub trait ReportPort {
    fn write(&self, rows: &[ReportRow], output_path: &Path) -> Result<(), BlackhawkError>;
}
