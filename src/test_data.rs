//! Data used in tests.

use crate::{
    config::ScoringConfig,
    index::{score_hours, ScoredHour},
    lunar::LunarContext,
    sample::{hourly_samples, HourlyReading},
};
use chrono::{DateTime, Duration, TimeZone, Utc};
use chrono_tz::Europe::Helsinki;
use itertools::izip;
use metfor::{Celsius, HectoPascal, MetersPSec, WindSpdDir};

/// Valid time of the lead-in hour of the Oulu forecast, 21:00 in Helsinki.
pub fn oulu_lead_in_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 1, 19, 0, 0).unwrap()
}

/// A reading `hour` hours after the Oulu lead-in hour with a 4 m/s wind.
pub fn reading_at(hour: i64, pressure: f64, direction: f64) -> HourlyReading {
    HourlyReading::new(
        oulu_lead_in_time() + Duration::hours(hour),
        HectoPascal(pressure),
        WindSpdDir {
            speed: MetersPSec(4.0),
            direction,
        },
    )
}

/// Ten hours of forecast for Oulu, a lead-in hour followed by nine reported hours. Pressure
/// rises through the night and falls towards the morning while the wind backs to the south.
///
/// Reported indexes: 0, 0, 48, 48, 24, 24, 0, 0, 24
pub fn oulu_readings() -> Vec<HourlyReading> {
    let pressures = [
        1008.0, 1008.1, 1008.3, 1009.0, 1009.6, 1010.0, 1010.4, 1010.2, 1009.7, 1009.0,
    ];
    let directions = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 180.0];
    let speeds = [4.0, 4.2, 4.5, 5.0, 5.1, 4.8, 4.6, 5.5, 6.0, 5.2];
    let temperatures = [-3.0, -3.2, -3.5, -3.9, -4.1, -4.4, -4.6, -4.5, -4.2, -3.8];

    izip!(&pressures, &directions, &speeds, &temperatures)
        .enumerate()
        .map(|(hour, (&p, &dir, &spd, &t))| {
            let mut reading = reading_at(hour as i64, p, dir).with_temperature(Celsius(t));
            reading.wind.speed = MetersPSec(spd);
            reading
        })
        .collect()
}

/// The expected index for each reported Oulu hour.
pub const OULU_INDEXES: [i32; 9] = [0, 0, 48, 48, 24, 24, 0, 0, 24];

/// The Oulu forecast scored with the default configuration.
pub fn oulu_scored_hours() -> Vec<ScoredHour> {
    let samples = hourly_samples(&oulu_readings(), Helsinki).unwrap();
    let lunar = LunarContext::new(samples[0].time.with_timezone(&Utc)).unwrap();
    score_hours(&samples, &lunar, &ScoringConfig::default()).unwrap()
}
