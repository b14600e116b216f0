//! Configuration for scoring and reporting.
//!
//! Every table and default the algorithm depends on lives here as a plain value, so nothing in
//! the engine reads hidden global state. All types deserialize with serde and fill in missing
//! fields from their defaults, so a configuration file only needs the values it changes.

use crate::{
    error::{FishcastError, Result},
    stations::SeaLevelStation,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

pub use self::tables::{Band, BandTable, DayStep, LunarTaper, Sector, WindTable};

mod tables;

/// Weight of each contribution to the fishing index, in percent of its points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// Pressure change weight.
    pub pressure: i32,
    /// Wind direction weight.
    pub wind: i32,
    /// Moon phase weight.
    pub moon: i32,
    /// Sea level change weight.
    pub sea_level: i32,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            pressure: 60,
            wind: 30,
            moon: 15,
            sea_level: 100,
        }
    }
}

/// Everything the fishing index engine needs besides the weather and the moon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Hourly pressure change bands (hPa).
    pub pressure: BandTable,
    /// Wind direction sectors and speed limits.
    pub wind: WindTable,
    /// Lunar proximity taper.
    pub lunar: LunarTaper,
    /// Hourly sea level change bands (cm).
    pub sea_level: BandTable,
    /// Contribution weights.
    pub weights: Weights,
    /// The index is clamped to at least this value.
    pub min_index: i32,
    /// The index is clamped to at most this value.
    pub max_index: i32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            pressure: BandTable::pressure_change(),
            wind: WindTable::default(),
            lunar: LunarTaper::default(),
            sea_level: BandTable::sea_level_change(),
            weights: Weights::default(),
            min_index: -24,
            max_index: 100,
        }
    }
}

impl ScoringConfig {
    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_index > self.max_index {
            return Err(FishcastError::InvalidValue("min_index greater than max_index"));
        }

        if self.wind.calm_below_ms > self.wind.storm_above_ms {
            return Err(FishcastError::InvalidValue(
                "calm wind limit above storm wind limit",
            ));
        }

        if self
            .wind
            .sectors
            .iter()
            .any(|sector| !(sector.start < sector.end) || sector.start < 0.0 || sector.end > 360.0)
        {
            return Err(FishcastError::InvalidValue("wind sector"));
        }

        Ok(())
    }
}

/// Options for a single forecast report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Name of the location, used in report titles.
    pub location: String,
    /// Number of hours to report, not counting the lead-in hour.
    pub hours: usize,
    /// IANA name of the timezone to report times in.
    pub timezone: String,
    /// Add the bar chart to the report.
    pub visualize: bool,
    /// Number of best hours to list.
    pub top_k: usize,
    /// Width of the bar chart bars at an index of 100.
    pub chart_width: usize,
    /// Station providing sea level data, if any.
    pub sea_level_station: Option<SeaLevelStation>,
    /// Stations that may be selected for sea level data.
    pub stations: Vec<SeaLevelStation>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        ForecastConfig {
            location: "Oulu".to_owned(),
            hours: 48,
            timezone: "Europe/Helsinki".to_owned(),
            visualize: false,
            top_k: 5,
            chart_width: 80,
            sea_level_station: None,
            stations: SeaLevelStation::all(),
        }
    }
}

impl ForecastConfig {
    /// Parse the configured timezone.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fishing_index::ForecastConfig;
    ///
    /// let config = ForecastConfig::default();
    /// assert_eq!(config.tz().unwrap(), chrono_tz::Europe::Helsinki);
    ///
    /// let config = ForecastConfig { timezone: "Mars/Olympus".to_owned(), ..config };
    /// assert!(config.tz().is_err());
    /// ```
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| FishcastError::UnknownTimezone(self.timezone.clone()))
    }

    /// Builder method selecting the sea level station by name. The name must be one of the
    /// configured `stations`.
    pub fn with_sea_level_station(mut self, name: &str) -> Result<Self> {
        self.sea_level_station = Some(SeaLevelStation::lookup(name, &self.stations)?);
        Ok(self)
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        self.tz()?;

        if self.top_k == 0 {
            return Err(FishcastError::InvalidValue("top_k must be positive"));
        }

        if let Some(stn) = self.sea_level_station {
            if !self.stations.contains(&stn) {
                return Err(FishcastError::UnknownSeaLevelStation(stn.to_string()));
            }
        }

        Ok(())
    }
}
