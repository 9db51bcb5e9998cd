//! CSV report writer adapter.
//!
//! Emits one row per period: `date,open,price,volume,metric,signal,value`.
//! Metric-only reports leave the signal and value columns empty.

use crate::domain::error::BlackhawkError;
use crate::ports::report_port::{ReportPort, ReportRow};
use std::path::Path;

pub struct CsvReportAdapter;

impl ReportPort for CsvReportAdapter {
    fn write(&self, rows: &[ReportRow], output_path: &Path) -> Result<(), BlackhawkError> {
        let mut wtr = csv::Writer::from_path(output_path).map_err(|e| BlackhawkError::Data {
            reason: format!("failed to open {}: {}", output_path.display(), e),
        })?;

        wtr.write_record(["date", "open", "price", "volume", "metric", "signal", "value"])
            .map_err(write_error)?;

        for row in rows {
            wtr.write_record([
                row.bar.date.format("%Y-%m-%d").to_string(),
                format_value(row.bar.open),
                format_value(row.price),
                format_value(row.bar.volume),
                format_value(row.metric),
                row.signal
                    .map(|held| if held { "1" } else { "0" }.to_string())
                    .unwrap_or_default(),
                row.value.map(format_value).unwrap_or_default(),
            ])
            .map_err(write_error)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{}", v)
    }
}

fn write_error(e: csv::Error) -> BlackhawkError {
    BlackhawkError::Data {
        reason: format!("CSV write error: {}", e),
    }
}
