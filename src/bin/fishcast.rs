//! Print a fishing forecast from a CSV file of hourly weather readings.
//!
//! ```text
//! RUST_LOG=debug fishcast --input forecast.csv --hours 24 -v -s Oulu
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use fishing_index::{read_readings, ForecastConfig, ForecastReport, HourlyReading, ScoringConfig};
use optional::none;
use serde::Deserialize;
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fishcast", version, about = "Hourly fishing index forecast")]
struct Args {
    /// Location name shown in the report [default: Oulu]
    #[arg(short, long)]
    location: Option<String>,

    /// Number of hours to report [default: 48]
    #[arg(long)]
    hours: Option<usize>,

    /// Timezone for displayed times [default: Europe/Helsinki]
    #[arg(short, long)]
    timezone: Option<String>,

    /// Draw a bar chart of the fishing index
    #[arg(short, long)]
    visualize: bool,

    /// Use the sea level from this station
    #[arg(short = 's', long = "sealevel", value_name = "STATION")]
    sea_level: Option<String>,

    /// Number of best hours to list [default: 5]
    #[arg(long, value_name = "K")]
    top: Option<usize>,

    /// Width of the chart bars [default: 80]
    #[arg(long, value_name = "N")]
    width: Option<usize>,

    /// YAML file with forecast and scoring settings
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSV file with hourly readings, starting with the lead-in hour
    #[arg(long, value_name = "CSV")]
    input: PathBuf,
}

/// Layout of the optional configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    forecast: ForecastConfig,
    scoring: ScoringConfig,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    debug!(?args, "arguments");

    let FileConfig { forecast, scoring } = match &args.config {
        Some(path) => load_config(path)?,
        None => FileConfig::default(),
    };
    let forecast = apply_args(forecast, &args)?;
    forecast.validate().context("invalid forecast settings")?;
    scoring.validate().context("invalid scoring settings")?;

    let input = File::open(&args.input)
        .with_context(|| format!("unable to open {}", args.input.display()))?;
    let readings = load_readings(input, &forecast)
        .with_context(|| format!("unable to read {}", args.input.display()))?;

    let report = ForecastReport::new(&readings, forecast.tz()?, &scoring, forecast.top_k)
        .context("unable to build the forecast")?;
    info!(location = %forecast.location, hours = report.hours().len(), "forecast ready");

    print!("{}", report.to_text(&forecast));

    Ok(())
}

fn load_config(path: &Path) -> Result<FileConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("unable to open {}", path.display()))?;

    parse_config(&text)
        .with_context(|| format!("unable to load configuration from {}", path.display()))
}

fn parse_config(text: &str) -> Result<FileConfig> {
    let cfg = config::Config::builder()
        .add_source(config::File::from_str(text, config::FileFormat::Yaml))
        .build()?
        .try_deserialize::<FileConfig>()?;

    Ok(cfg)
}

/// Command line options override the configuration file.
fn apply_args(mut forecast: ForecastConfig, args: &Args) -> Result<ForecastConfig> {
    if let Some(location) = &args.location {
        forecast.location = location.clone();
    }
    if let Some(hours) = args.hours {
        forecast.hours = hours;
    }
    if let Some(timezone) = &args.timezone {
        forecast.timezone = timezone.clone();
    }
    if let Some(top) = args.top {
        forecast.top_k = top;
    }
    if let Some(width) = args.width {
        forecast.chart_width = width;
    }
    forecast.visualize |= args.visualize;

    match &args.sea_level {
        Some(name) => forecast
            .with_sea_level_station(name)
            .with_context(|| format!("unable to use sea level station {}", name)),
        None => Ok(forecast),
    }
}

/// The lead-in hour plus `forecast.hours` readings. Sea level is only kept when a station is
/// selected, so the report and the score agree.
fn load_readings<R: Read>(source: R, forecast: &ForecastConfig) -> Result<Vec<HourlyReading>> {
    let wanted = forecast.hours + 1;
    let mut readings = read_readings(source, wanted)?;

    if readings.len() < wanted {
        warn!(
            wanted,
            found = readings.len(),
            "input is shorter than the requested forecast"
        );
    }

    if forecast.sea_level_station.is_none() {
        for reading in &mut readings {
            reading.sea_level = none();
        }
    }

    Ok(readings)
}
