use crate::{error::Result, sample::HourlyReading};
use chrono::{DateTime, Utc};
use metfor::{Celsius, Cm, HectoPascal, MetersPSec, WindSpdDir};
use serde::Deserialize;
use std::io::Read;
use tracing::debug;

/// One row of an hourly readings CSV file.
///
/// The header is `time,pressure_hpa,wind_direction_deg,wind_speed_ms,temperature_c,sea_level_cm`.
/// `time` is RFC 3339, the temperature and sea level columns may be empty.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReadingRecord {
    /// Valid time.
    pub time: DateTime<Utc>,
    /// Pressure in hPa.
    pub pressure_hpa: f64,
    /// Direction the wind blows from.
    pub wind_direction_deg: f64,
    /// Wind speed in m/s.
    pub wind_speed_ms: f64,
    /// Temperature in C, if available.
    pub temperature_c: Option<f64>,
    /// Sea level in cm, if available.
    pub sea_level_cm: Option<f64>,
}

impl From<ReadingRecord> for HourlyReading {
    fn from(rec: ReadingRecord) -> Self {
        let wind = WindSpdDir {
            speed: MetersPSec(rec.wind_speed_ms),
            direction: rec.wind_direction_deg,
        };

        HourlyReading::new(rec.time, HectoPascal(rec.pressure_hpa), wind)
            .with_temperature(rec.temperature_c.map(Celsius))
            .with_sea_level(rec.sea_level_cm.map(Cm))
    }
}

/// Read at most `limit` hourly readings from CSV data with a header row.
///
/// Parsing stops at `limit`, so trailing rows are never looked at.
///
/// # Errors
///
/// `MalformedReading` if a row is missing a required column or a value does not parse.
///
/// # Examples
///
/// ```rust
/// use fishing_index::read_readings;
///
/// let data = "\
/// time,pressure_hpa,wind_direction_deg,wind_speed_ms,temperature_c,sea_level_cm
/// 2025-02-01T19:00:00Z,1008.0,10.0,4.0,-3.0,
/// 2025-02-01T20:00:00Z,1008.1,20.0,4.2,,12.5
/// ";
///
/// let readings = read_readings(data.as_bytes(), 10).unwrap();
/// assert_eq!(readings.len(), 2);
/// assert!(readings[0].sea_level.is_none());
/// assert!(readings[1].temperature.is_none());
/// ```
pub fn read_readings<R: Read>(source: R, limit: usize) -> Result<Vec<HourlyReading>> {
    let mut reader = csv::Reader::from_reader(source);

    let readings = reader
        .deserialize::<ReadingRecord>()
        .take(limit)
        .map(|rec| rec.map(HourlyReading::from))
        .collect::<csv::Result<Vec<_>>>()?;

    debug!(count = readings.len(), limit, "read readings");

    Ok(readings)
}
