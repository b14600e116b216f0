//! Hourly weather samples and the validation that turns provider readings into them.

use crate::{
    error::{FishcastError, Result},
    utility::round_hundredths,
};
use chrono::{DateTime, Duration, TimeZone};
use chrono_tz::Tz;
use itertools::Itertools;
use metfor::{Celsius, Cm, HectoPascal, MetersPSec, Quantity, WindSpdDir};
use optional::{none, some, Optioned};
use tracing::debug;

pub use self::reading::HourlyReading;
pub use self::record::{read_readings, ReadingRecord};

mod reading;
mod record;

/// One reportable hour of weather, with the changes since the previous hour.
///
/// Samples are created by `hourly_samples`, which guarantees the deltas are against the reading
/// exactly one hour earlier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeatherSample {
    /// Valid time in the timezone of the report.
    pub time: DateTime<Tz>,
    /// Pressure in hPa
    pub pressure: HectoPascal,
    /// Change in pressure since the previous hour, hPa
    pub pressure_delta: HectoPascal,
    /// Wind speed and direction
    pub wind: WindSpdDir<MetersPSec>,
    /// Temperature in C
    pub temperature: Optioned<Celsius>,
    /// Sea level in cm
    pub sea_level: Optioned<Cm>,
    /// Change in sea level since the previous hour, only available when both hours have it.
    pub sea_level_delta: Optioned<Cm>,
}

impl WeatherSample {
    /// Create a sample directly from its values. Optional values are missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::TimeZone;
    /// use chrono_tz::Europe::Helsinki;
    /// use fishing_index::WeatherSample;
    /// use metfor::{HectoPascal, MetersPSec, WindSpdDir};
    ///
    /// let sample = WeatherSample::new(
    ///     Helsinki.with_ymd_and_hms(2025, 2, 2, 0, 0, 0).unwrap(),
    ///     HectoPascal(1009.0),
    ///     HectoPascal(0.7),
    ///     WindSpdDir { speed: MetersPSec(5.0), direction: 40.0 },
    /// );
    /// assert!(sample.sea_level_delta.is_none());
    /// ```
    #[inline]
    pub fn new(
        time: DateTime<Tz>,
        pressure: HectoPascal,
        pressure_delta: HectoPascal,
        wind: WindSpdDir<MetersPSec>,
    ) -> Self {
        WeatherSample {
            time,
            pressure,
            pressure_delta,
            wind,
            temperature: none(),
            sea_level: none(),
            sea_level_delta: none(),
        }
    }

    /// Builder method for the sea level and its change since the previous hour.
    #[inline]
    pub fn with_sea_level(mut self, level: Cm, delta: Cm) -> Self {
        self.sea_level = some(level);
        self.sea_level_delta = some(delta);
        self
    }

    /// Builder method for the temperature.
    #[inline]
    pub fn with_temperature<T>(mut self, value: T) -> Self
    where
        Optioned<Celsius>: From<T>,
    {
        self.temperature = Optioned::from(value);
        self
    }
}

/// Validate a sequence of provider readings and convert it into reportable samples.
///
/// The first reading is the lead-in hour. It is only used to calculate the changes for the
/// second reading and does not produce a sample, so `n` readings give `n - 1` samples.
///
/// # Errors
///
/// * `NotEnoughData` if there are no readings at all.
/// * `GapInSeries` if two consecutive readings are not exactly one hour apart.
/// * `InvalidWindDirection` if a direction is outside [0, 360).
/// * `InvalidValue` for non-finite or physically impossible values.
pub fn hourly_samples(readings: &[HourlyReading], tz: Tz) -> Result<Vec<WeatherSample>> {
    if readings.is_empty() {
        return Err(FishcastError::NotEnoughData);
    }

    for reading in readings {
        validate_reading(reading)?;
    }

    readings
        .iter()
        .tuple_windows::<(_, _)>()
        .map(|(prev, curr)| {
            if curr.time.signed_duration_since(prev.time) != Duration::hours(1) {
                return Err(FishcastError::GapInSeries {
                    previous: prev.time,
                    next: curr.time,
                });
            }

            let pressure_delta =
                HectoPascal(round_hundredths(curr.pressure.unpack() - prev.pressure.unpack()));

            let sea_level_delta: Optioned<Cm> =
                match (curr.sea_level.into_option(), prev.sea_level.into_option()) {
                    (Some(now), Some(before)) => {
                        some(Cm(round_hundredths(now.unpack() - before.unpack())))
                    }
                    (None, None) => none(),
                    _ => {
                        debug!(time = %curr.time, "sea level missing, no sea level change");
                        none()
                    }
                };

            Ok(WeatherSample {
                time: tz.from_utc_datetime(&curr.time.naive_utc()),
                pressure: curr.pressure,
                pressure_delta,
                wind: curr.wind,
                temperature: curr.temperature,
                sea_level: curr.sea_level,
                sea_level_delta,
            })
        })
        .collect()
}

/// Check the wind direction is a compass bearing in [0, 360).
#[inline]
pub(crate) fn check_wind_direction(direction: f64) -> Result<f64> {
    if direction.is_finite() && (0.0..360.0).contains(&direction) {
        Ok(direction)
    } else {
        Err(FishcastError::InvalidWindDirection(direction))
    }
}

fn validate_reading(reading: &HourlyReading) -> Result<()> {
    let pressure = reading.pressure.unpack();
    if !pressure.is_finite() || pressure <= 0.0 {
        return Err(FishcastError::InvalidValue("pressure"));
    }

    let speed = reading.wind.speed.unpack();
    if !speed.is_finite() || speed < 0.0 {
        return Err(FishcastError::InvalidValue("wind speed"));
    }

    check_wind_direction(reading.wind.direction)?;

    if let Some(t) = reading.temperature.into_option() {
        if !t.unpack().is_finite() {
            return Err(FishcastError::InvalidValue("temperature"));
        }
    }

    if let Some(sl) = reading.sea_level.into_option() {
        if !sl.unpack().is_finite() {
            return Err(FishcastError::InvalidValue("sea level"));
        }
    }

    Ok(())
}
