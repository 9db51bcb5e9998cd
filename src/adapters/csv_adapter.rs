//! CSV file data adapter.
//!
//! Reads `date,open,high,low,close,volume` files, the output contract of the
//! external fetch scripts. Rows outside the requested date range are
//! dropped; rows that fail to parse either abort the read or, with
//! `skip_invalid`, are silently skipped (source files occasionally report
//! volume as `-`).

use crate::domain::bar::Bar;
use crate::domain::error::BlackhawkError;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    path: PathBuf,
    skip_invalid: bool,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            skip_invalid: false,
        }
    }

    pub fn with_skip_invalid(mut self, skip_invalid: bool) -> Self {
        self.skip_invalid = skip_invalid;
        self
    }

    fn parse_row(record: &csv::StringRecord) -> Result<Bar, BlackhawkError> {
        let date_str = field(record, 0, "date")?;
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
            BlackhawkError::Data {
                reason: format!("invalid date format: {}", e),
            }
        })?;

        Ok(Bar {
            date,
            open: parse_number(record, 1, "open")?,
            high: parse_number(record, 2, "high")?,
            low: parse_number(record, 3, "low")?,
            close: parse_number(record, 4, "close")?,
            volume: parse_number(record, 5, "volume")?,
        })
    }
}

fn field<'a>(
    record: &'a csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<&'a str, BlackhawkError> {
    record.get(index).ok_or_else(|| BlackhawkError::Data {
        reason: format!("missing {} column", name),
    })
}

fn parse_number(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
) -> Result<f64, BlackhawkError> {
    field(record, index, name)?
        .trim()
        .parse()
        .map_err(|e| BlackhawkError::Data {
            reason: format!("invalid {} value: {}", name, e),
        })
}

impl DataPort for CsvAdapter {
    fn fetch_bars(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Bar>, BlackhawkError> {
        let content = fs::read_to_string(&self.path).map_err(|e| BlackhawkError::Data {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| BlackhawkError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let bar = match Self::parse_row(&record) {
                Ok(bar) => bar,
                Err(_) if self.skip_invalid => continue,
                Err(e) => return Err(e),
            };

            if start_date.is_some_and(|s| bar.date < s) || end_date.is_some_and(|e| bar.date > e) {
                continue;
            }
            bars.push(bar);
        }

        bars.sort_by_key(|b| b.date);
        Ok(bars)
    }

    fn data_range(&self) -> Result<Option<(NaiveDate, NaiveDate, usize)>, BlackhawkError> {
        let bars = self.fetch_bars(None, None)?;
        match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, bars.len()))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "date,open,high,low,close,volume\n";

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}{}", HEADER, content).unwrap();
        file.flush().unwrap();
        file
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn reads_and_sorts_bars() {
        // Provider files can arrive newest-first.
        let file = write_csv(
            "2024-01-03,12,13,11,12.5,300\n\
             2024-01-01,10,11,9,10.5,100\n\
             2024-01-02,11,12,10,11.5,200\n",
        );
        let adapter = CsvAdapter::new(file.path().to_path_buf());
        let bars = adapter.fetch_bars(None, None).unwrap();

        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].date, date(2024, 1, 1));
        assert_eq!(bars[2].date, date(2024, 1, 3));
        assert!((bars[1].volume - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn filters_by_date_range() {
        let file = write_csv(
            "2024-01-01,10,11,9,10.5,100\n\
             2024-01-02,11,12,10,11.5,200\n\
             2024-01-03,12,13,11,12.5,300\n",
        );
        let adapter = CsvAdapter::new(file.path().to_path_buf());
        let bars = adapter
            .fetch_bars(Some(date(2024, 1, 2)), Some(date(2024, 1, 2)))
            .unwrap();

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].date, date(2024, 1, 2));
    }

    #[test]
    fn bad_row_fails_by_default() {
        let file = write_csv(
            "2024-01-01,10,11,9,10.5,100\n\
             2024-01-02,11,12,10,11.5,-\n",
        );
        let adapter = CsvAdapter::new(file.path().to_path_buf());
        let err = adapter.fetch_bars(None, None).unwrap_err();

        assert!(matches!(err, BlackhawkError::Data { .. }));
    }

    #[test]
    fn skip_invalid_drops_bad_rows() {
        let file = write_csv(
            "2024-01-01,10,11,9,10.5,100\n\
             2024-01-02,11,12,10,11.5,-\n\
             2024-01-03,12,13,11,12.5,300\n",
        );
        let adapter = CsvAdapter::new(file.path().to_path_buf()).with_skip_invalid(true);
        let bars = adapter.fetch_bars(None, None).unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].date, date(2024, 1, 3));
    }

    #[test]
    fn missing_file_is_data_error() {
        let adapter = CsvAdapter::new(PathBuf::from("/nonexistent/SPY.csv"));
        let err = adapter.fetch_bars(None, None).unwrap_err();

        assert!(matches!(err, BlackhawkError::Data { .. }));
    }

    #[test]
    fn data_range_reports_bounds() {
        let file = write_csv(
            "2024-01-01,10,11,9,10.5,100\n\
             2024-01-05,12,13,11,12.5,300\n",
        );
        let adapter = CsvAdapter::new(file.path().to_path_buf());
        let range = adapter.data_range().unwrap();

        assert_eq!(range, Some((date(2024, 1, 1), date(2024, 1, 5), 2)));
    }

    #[test]
    fn empty_file_has_no_range() {
        let file = write_csv("");
        let adapter = CsvAdapter::new(file.path().to_path_buf());
        assert_eq!(adapter.data_range().unwrap(), None);
    }
}
