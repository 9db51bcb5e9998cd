//! Configuration parsing and validation.
//!
//! Builds the typed [`EngineConfig`] from the `[data]` and `[engine]`
//! sections before anything touches the input file.

use crate::domain::bar::PriceSource;
use crate::domain::error::BlackhawkError;
use crate::domain::metric::MetricType;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

/// Validated engine parameters.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub metric: MetricType,
    pub lookback: usize,
    pub price_source: PriceSource,
    pub skip_invalid: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

pub fn validate_engine_config(config: &dyn ConfigPort) -> Result<EngineConfig, BlackhawkError> {
    let metric = parse_metric(config)?;
    let lookback = parse_non_negative(config, "engine", "lookback")?;
    let price_source = parse_price_source(config)?;
    let skip_invalid = config.get_bool("data", "skip_invalid", false);
    let (start_date, end_date) = parse_dates(config)?;

    Ok(EngineConfig {
        metric,
        lookback,
        price_source,
        skip_invalid,
        start_date,
        end_date,
    })
}

/// The `[data] path` key, required by commands that read a CSV unless the
/// path is given on the command line.
pub fn data_path(config: &dyn ConfigPort) -> Result<String, BlackhawkError> {
    match config.get_string("data", "path") {
        Some(p) if !p.trim().is_empty() => Ok(p),
        _ => Err(BlackhawkError::ConfigMissing {
            section: "data".to_string(),
            key: "path".to_string(),
        }),
    }
}

fn parse_metric(config: &dyn ConfigPort) -> Result<MetricType, BlackhawkError> {
    let name = match config.get_string("engine", "metric") {
        Some(s) if !s.trim().is_empty() => s,
        _ => {
            return Err(BlackhawkError::ConfigMissing {
                section: "engine".to_string(),
                key: "metric".to_string(),
            });
        }
    };

    let window = parse_non_negative(config, "engine", "window")?;
    match name.trim().to_uppercase().as_str() {
        "VWAP" => Ok(MetricType::Vwap(window)),
        "SMA" => Ok(MetricType::Sma(window)),
        other => Err(BlackhawkError::ConfigInvalid {
            section: "engine".to_string(),
            key: "metric".to_string(),
            reason: format!("unknown metric '{}', expected VWAP or SMA", other),
        }),
    }
}

fn parse_non_negative(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<usize, BlackhawkError> {
    let value = config.get_int(section, key, 0);
    if value < 0 {
        return Err(BlackhawkError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: format!("{} must be non-negative", key),
        });
    }
    Ok(value as usize)
}

fn parse_price_source(config: &dyn ConfigPort) -> Result<PriceSource, BlackhawkError> {
    let value = config
        .get_string("data", "price_source")
        .unwrap_or_else(|| "average".to_string());
    match value.trim().to_lowercase().as_str() {
        "average" => Ok(PriceSource::Average),
        "close" => Ok(PriceSource::Close),
        "open" => Ok(PriceSource::Open),
        other => Err(BlackhawkError::ConfigInvalid {
            section: "data".to_string(),
            key: "price_source".to_string(),
            reason: format!("unknown price_source '{}', expected average, close or open", other),
        }),
    }
}

fn parse_dates(
    config: &dyn ConfigPort,
) -> Result<(Option<NaiveDate>, Option<NaiveDate>), BlackhawkError> {
    let start = parse_date(config.get_string("data", "start_date").as_deref(), "start_date")?;
    let end = parse_date(config.get_string("data", "end_date").as_deref(), "end_date")?;

    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            return Err(BlackhawkError::ConfigInvalid {
                section: "data".to_string(),
                key: "start_date".to_string(),
                reason: "start_date must not be after end_date".to_string(),
            });
        }
    }
    Ok((start, end))
}

fn parse_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, BlackhawkError> {
    match value {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Some).map_err(|_| {
            BlackhawkError::ConfigInvalid {
                section: "data".to_string(),
                key: field.to_string(),
                reason: format!("invalid {} format, expected YYYY-MM-DD", field),
            }
        }),
    }
}
