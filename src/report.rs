//! Build a complete forecast and format it as text.

use crate::{
    chart,
    config::{ForecastConfig, ScoringConfig},
    error::Result,
    index::{score_hours, ScoredHour},
    lunar::LunarContext,
    sample::{hourly_samples, HourlyReading, WeatherSample},
    selection::select_best,
};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use metfor::Quantity;
use tracing::{debug, info};

/// Everything needed to print a fishing forecast.
#[derive(Debug, Clone)]
pub struct ForecastReport {
    tz: Tz,
    lunar: LunarContext,
    hours: Vec<ScoredHour>,
    best: Vec<ScoredHour>,
}

impl ForecastReport {
    /// Score a series of readings and select the best `top_k` hours.
    ///
    /// The first reading is the lead-in hour and is not part of the report. The moon phases are
    /// calculated for the first reported hour.
    ///
    /// # Errors
    ///
    /// Any validation error from `hourly_samples` or the fishing index aborts the report.
    pub fn new(
        readings: &[HourlyReading],
        tz: Tz,
        config: &ScoringConfig,
        top_k: usize,
    ) -> Result<Self> {
        config.validate()?;

        let samples = hourly_samples(readings, tz)?;
        debug!(readings = readings.len(), samples = samples.len(), "built samples");

        let reference = samples
            .first()
            .map(|sample| sample.time.with_timezone(&Utc))
            .unwrap_or(readings[0].time);
        let lunar = LunarContext::new(reference)?;
        debug!(?lunar, "moon phases");

        let hours = score_hours(&samples, &lunar, config)?;
        let best = select_best(&hours, top_k);
        info!(hours = hours.len(), best = best.len(), "scored forecast");

        Ok(ForecastReport {
            tz,
            lunar,
            hours,
            best,
        })
    }

    /// Every reported hour in order.
    pub fn hours(&self) -> &[ScoredHour] {
        &self.hours
    }

    /// The best hours in chronological order.
    pub fn best(&self) -> &[ScoredHour] {
        &self.best
    }

    /// The moon phases around the forecast.
    pub fn lunar(&self) -> &LunarContext {
        &self.lunar
    }

    /// The timezone of all displayed times.
    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// Dates of the previous and next full and new moons.
    pub fn moon_summary(&self) -> String {
        let local = |t: DateTime<Utc>| format_time(&t.with_timezone(&self.tz));

        let mut lines = vec![
            format!("Previous full moon:\t {}", local(self.lunar.previous_full_moon)),
            format!("Previous new moon:\t {}", local(self.lunar.previous_new_moon)),
            format!("Next full moon:\t\t {}", local(self.lunar.next_full_moon)),
            format!("Next new moon:\t\t {}", local(self.lunar.next_new_moon)),
        ];

        if let Some(first) = self.hours.first() {
            lines.push(format!(
                "Lunar phase:\t\t {:.0} %",
                self.lunar.phase_fraction(&first.sample.time) * 100.0
            ));
        }

        block("Moon phases:", lines)
    }

    /// The fishing index and weather for every hour.
    pub fn hourly_table(&self, config: &ForecastConfig) -> String {
        let title = format!(
            "Fishing forecast for {} for next {} hours:",
            config.location, config.hours
        );
        block(&title, self.hours.iter().map(|hour| format_hour(hour, config)))
    }

    /// The best hours in chronological order.
    pub fn best_table(&self, config: &ForecastConfig) -> String {
        let title = format!(
            "Top {} best fishing hours in {} in next {} hours:",
            config.top_k, config.location, config.hours
        );
        block(&title, self.best.iter().map(|hour| format_hour(hour, config)))
    }

    /// The bar chart of all hours.
    pub fn chart(&self, width: usize) -> String {
        chart::render(&self.hours, width)
    }

    /// The full text report, blocks separated by blank lines.
    ///
    /// The chart and the best hours are left out when there are no hours to report.
    pub fn to_text(&self, config: &ForecastConfig) -> String {
        let mut blocks = vec![self.moon_summary(), self.hourly_table(config)];

        if !self.hours.is_empty() {
            if config.visualize {
                blocks.push(self.chart(config.chart_width));
            }
            blocks.push(self.best_table(config));
        }

        blocks.join("\n")
    }
}

/// An underlined title followed by one line per item, every line ending in a newline.
fn block<I>(title: &str, lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut text = format!("{}\n{}\n", title, "-".repeat(title.chars().count()));
    for line in lines {
        text.push_str(&line);
        text.push('\n');
    }
    text
}

fn format_time<Z: TimeZone>(time: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    time.format("%Y-%m-%d %H:%M").to_string()
}

/// One line describing an hour.
///
/// `2025-02-02 00:00 - Index:  48 - Pressure: 1009.0 hPa (+0.7), Wind:  40.0° (5.0 m/s) Sealevel: N/A`
pub fn format_hour(hour: &ScoredHour, config: &ForecastConfig) -> String {
    let WeatherSample {
        time,
        pressure,
        pressure_delta,
        wind,
        sea_level,
        sea_level_delta,
        ..
    } = hour.sample;

    let sea_level = match (
        config.sea_level_station,
        sea_level.into_option(),
        sea_level_delta.into_option(),
    ) {
        (Some(_), Some(level), Some(delta)) => {
            format!("{:.1} cm ({:+.1})", level.unpack(), delta.unpack())
        }
        (Some(_), Some(level), None) => format!("{:.1} cm (N/A)", level.unpack()),
        _ => "N/A".to_owned(),
    };

    format!(
        "{} - Index: {:>3} - Pressure: {:6.1} hPa ({:+.1}), Wind: {:5.1}° ({:.1} m/s) Sealevel: {}",
        format_time(&time),
        hour.index,
        pressure.unpack(),
        pressure_delta.unpack(),
        wind.direction,
        wind.speed.unpack(),
        sea_level
    )
}
