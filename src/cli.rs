//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::bar::Bar;
use crate::domain::config_validation::{data_path, validate_engine_config, EngineConfig};
use crate::domain::error::BlackhawkError;
use crate::domain::signal::signal;
use crate::domain::summary::Summary;
use crate::domain::value::value;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::{ReportPort, ReportRow};

#[derive(Parser, Debug)]
#[command(name = "blackhawk", about = "Rolling metric engine and naive backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute metric, signal and value curve over a bar series
    Backtest {
        #[arg(short, long)]
        config: PathBuf,
        /// CSV input; overrides [data] path from the config
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compute the metric series only
    Metrics {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate an engine configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show the date range of a CSV bar file
    Info {
        #[arg(short, long)]
        input: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest {
            config,
            input,
            output,
        } => run_backtest(&config, input.as_deref(), output.as_deref()),
        Command::Metrics {
            config,
            input,
            output,
        } => run_metrics(&config, input.as_deref(), output.as_deref()),
        Command::Validate { config } => run_validate(&config),
        Command::Info { input } => run_info(&input),
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = BlackhawkError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Per-period outputs of one engine run.
pub struct PipelineResult {
    pub rows: Vec<ReportRow>,
    pub summary: Option<Summary>,
}

/// Metric → signal → value over a fetched bar series.
///
/// `with_backtest` controls whether the signal and value columns are
/// populated (the `metrics` command skips them).
pub fn run_pipeline(
    bars: &[Bar],
    config: &EngineConfig,
    with_backtest: bool,
) -> Result<PipelineResult, BlackhawkError> {
    let prices: Vec<f64> = bars.iter().map(|b| b.price(config.price_source)).collect();
    let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();

    let metric = config.metric.compute(&prices, &volumes)?;

    let (held, curve, summary) = if with_backtest {
        let held = signal(&metric, &prices, config.lookback)?;
        let opens: Vec<f64> = bars.iter().map(|b| b.open).collect();
        let curve = value(&held, &opens)?;
        let summary = Summary::compute(&held, &curve);
        (Some(held), Some(curve), Some(summary))
    } else {
        (None, None, None)
    };

    let rows = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| ReportRow {
            bar: bar.clone(),
            price: prices[i],
            metric: metric[i],
            signal: held.as_ref().map(|h| h[i]),
            value: curve.as_ref().map(|c| c[i]),
        })
        .collect();

    Ok(PipelineResult { rows, summary })
}

fn run_backtest(config_path: &Path, input: Option<&Path>, output: Option<&Path>) -> ExitCode {
    run_command(config_path, input, output, true, "backtest.csv")
}

fn run_metrics(config_path: &Path, input: Option<&Path>, output: Option<&Path>) -> ExitCode {
    run_command(config_path, input, output, false, "metrics.csv")
}

fn run_command(
    config_path: &Path,
    input: Option<&Path>,
    output: Option<&Path>,
    with_backtest: bool,
    default_output: &str,
) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    let engine_config = match validate_engine_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 2: Resolve input and fetch bars
    let input_path = match input {
        Some(p) => p.to_path_buf(),
        None => match data_path(&adapter) {
            Ok(p) => PathBuf::from(p),
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        },
    };
    eprintln!("Reading bars from {}", input_path.display());

    let data_port =
        CsvAdapter::new(input_path.clone()).with_skip_invalid(engine_config.skip_invalid);
    let bars = match data_port.fetch_bars(engine_config.start_date, engine_config.end_date) {
        Ok(bars) => bars,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    if bars.is_empty() {
        let e = BlackhawkError::NoData {
            path: input_path.display().to_string(),
        };
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 3: Run the engine
    eprintln!(
        "Computing {} over {} bars ({} to {})",
        engine_config.metric,
        bars.len(),
        bars[0].date,
        bars[bars.len() - 1].date,
    );
    let result = match run_pipeline(&bars, &engine_config, with_backtest) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // Stage 4: Console summary
    if let Some(summary) = &result.summary {
        eprintln!("\n=== Results ===");
        eprintln!("Total Return:   {:.2}%", summary.total_return * 100.0);
        eprintln!("Max Drawdown:   -{:.1}%", summary.max_drawdown * 100.0);
        eprintln!(
            "Periods Held:   {} of {}",
            summary.periods_held,
            bars.len()
        );
        eprintln!("Round Trips:    {}", summary.round_trips);
    }

    // Stage 5: Write report
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_output));
    match CsvReportAdapter.write(&result.rows, &output) {
        Ok(()) => {
            eprintln!("\nReport written to: {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate(config_path: &Path) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };
    match validate_engine_config(&adapter) {
        Ok(config) => {
            eprintln!(
                "OK: metric {}, lookback {}, price source {:?}",
                config.metric, config.lookback, config.price_source
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_info(input: &Path) -> ExitCode {
    let adapter = CsvAdapter::new(input.to_path_buf());
    match adapter.data_range() {
        Ok(Some((first, last, count))) => {
            eprintln!("{}: {} bars, {} to {}", input.display(), count, first, last);
            ExitCode::SUCCESS
        }
        Ok(None) => {
            let e = BlackhawkError::NoData {
                path: input.display().to_string(),
            };
            eprintln!("error: {e}");
            (&e).into()
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
