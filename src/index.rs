//! The fishing index for a single hour.
//!
//! The index is the sum of independent contributions from the pressure trend, the wind, the
//! moon and optionally the sea level trend. Each contribution is a lookup in one of the tables
//! of `ScoringConfig`, scaled by its weight and rounded to a whole number. The sum is clamped
//! into the configured range.
//!
//! The algorithm follows the one described in *Kalastuksen taito: olosuhteet, vieheet,
//! kohteet* by Tom Berg, which was calibrated for Finnish waters.

use crate::{
    config::ScoringConfig,
    error::Result,
    keys::Contribution,
    lunar::LunarContext,
    sample::{check_wind_direction, WeatherSample},
};
use metfor::Quantity;
use tracing::trace;

/// The weighted contributions to the fishing index for one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Pressure trend contribution.
    pub pressure: i32,
    /// Wind contribution.
    pub wind: i32,
    /// Lunar contribution.
    pub moon: i32,
    /// Sea level trend contribution, `None` without sea level data.
    pub sea_level: Option<i32>,
}

impl ScoreBreakdown {
    /// Get a single contribution.
    pub fn get(&self, key: Contribution) -> Option<i32> {
        use crate::keys::Contribution::*;

        match key {
            Pressure => Some(self.pressure),
            Wind => Some(self.wind),
            Moon => Some(self.moon),
            SeaLevel => self.sea_level,
        }
    }

    /// Sum of all available contributions, before clamping. Saturates instead of overflowing.
    pub fn total(&self) -> i32 {
        self.pressure
            .saturating_add(self.wind)
            .saturating_add(self.moon)
            .saturating_add(self.sea_level.unwrap_or(0))
    }
}

/// An hour of weather with its fishing index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredHour {
    /// The weather for this hour.
    pub sample: WeatherSample,
    /// The fishing index.
    pub index: i32,
}

/// Calculate the weighted contributions for one hour.
///
/// # Errors
///
/// `InvalidWindDirection` if the wind direction is outside [0, 360).
pub fn score_breakdown(
    sample: &WeatherSample,
    lunar: &LunarContext,
    config: &ScoringConfig,
) -> Result<ScoreBreakdown> {
    let direction = check_wind_direction(sample.wind.direction)?;
    let weights = &config.weights;

    let pressure = weighted(
        config.pressure.points(sample.pressure_delta.unpack()),
        weights.pressure,
    );

    let wind = weighted(
        config.wind.points(direction, sample.wind.speed.unpack()),
        weights.wind,
    );

    let moon = weighted(
        lunar.phase_points(&sample.time, &config.lunar),
        weights.moon,
    );

    let sea_level = sample
        .sea_level_delta
        .into_option()
        .map(|delta| weighted(config.sea_level.points(delta.unpack()), weights.sea_level));

    Ok(ScoreBreakdown {
        pressure,
        wind,
        moon,
        sea_level,
    })
}

/// The fishing index for one hour.
///
/// This is a pure function of its arguments.
///
/// # Errors
///
/// `InvalidWindDirection` if the wind direction is outside [0, 360).
pub fn fishing_index(
    sample: &WeatherSample,
    lunar: &LunarContext,
    config: &ScoringConfig,
) -> Result<i32> {
    let breakdown = score_breakdown(sample, lunar, config)?;
    let index = breakdown
        .total()
        .max(config.min_index)
        .min(config.max_index);

    trace!(time = %sample.time, ?breakdown, index, "scored hour");

    Ok(index)
}

/// Score every sample, keeping their order.
pub fn score_hours(
    samples: &[WeatherSample],
    lunar: &LunarContext,
    config: &ScoringConfig,
) -> Result<Vec<ScoredHour>> {
    samples
        .iter()
        .map(|sample| {
            fishing_index(sample, lunar, config).map(|index| ScoredHour {
                sample: *sample,
                index,
            })
        })
        .collect()
}

/// Scale `points` by `percent` and round half away from zero.
#[inline]
fn weighted(points: i32, percent: i32) -> i32 {
    (f64::from(points) * f64::from(percent) / 100.0).round() as i32
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        error::FishcastError,
        test_data::{oulu_scored_hours, OULU_INDEXES},
    };
    use chrono::{Duration, TimeZone, Utc};
    use chrono_tz::Europe::Helsinki;
    use metfor::{Cm, HectoPascal, MetersPSec, WindSpdDir};
    use strum::IntoEnumIterator;

    fn quiet_moon() -> LunarContext {
        LunarContext::new(Utc.with_ymd_and_hms(2025, 2, 1, 20, 0, 0).unwrap()).unwrap()
    }

    fn sample(delta: f64, direction: f64, speed: f64) -> WeatherSample {
        WeatherSample::new(
            Helsinki.with_ymd_and_hms(2025, 2, 2, 0, 0, 0).unwrap(),
            HectoPascal(1010.0),
            HectoPascal(delta),
            WindSpdDir {
                speed: MetersPSec(speed),
                direction,
            },
        )
    }

    #[test]
    fn test_oulu_indexes() {
        let indexes: Vec<i32> = oulu_scored_hours().iter().map(|hr| hr.index).collect();
        assert_eq!(indexes, OULU_INDEXES);
    }

    #[test]
    fn test_deterministic() {
        let config = ScoringConfig::default();
        let moon = quiet_moon();
        let snd = sample(0.7, 225.0, 5.0);

        let first = fishing_index(&snd, &moon, &config).unwrap();
        let second = fishing_index(&snd, &moon, &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, 48 + 30);
    }

    #[test]
    fn test_zero_delta_is_neutral() {
        let breakdown =
            score_breakdown(&sample(0.0, 0.0, 5.0), &quiet_moon(), &ScoringConfig::default())
                .unwrap();
        assert_eq!(breakdown, ScoreBreakdown::default());
        assert_eq!(breakdown.total(), 0);
    }

    #[test]
    fn test_falling_pressure_never_rewarded() {
        let config = ScoringConfig::default();
        let moon = quiet_moon();

        for step in 1..=50 {
            let delta = -f64::from(step) / 10.0;
            let breakdown = score_breakdown(&sample(delta, 0.0, 5.0), &moon, &config).unwrap();
            assert!(breakdown.pressure <= 0, "rewarded a fall of {}", delta);
        }

        let steep = score_breakdown(&sample(-2.5, 0.0, 5.0), &moon, &config).unwrap();
        assert_eq!(steep.pressure, -24);
    }

    #[test]
    fn test_clamped_to_range() {
        let config = ScoringConfig::default();
        let moon = quiet_moon();

        // Steep pressure fall and a fast sea level drop.
        let bad = sample(-3.0, 0.0, 5.0).with_sea_level(Cm(20.0), Cm(-12.0));
        let breakdown = score_breakdown(&bad, &moon, &config).unwrap();
        assert_eq!(breakdown.total(), -54);
        assert_eq!(fishing_index(&bad, &moon, &config).unwrap(), -24);

        // Everything at its best, right at a full moon.
        let full_moon = moon.next_full_moon.with_timezone(&Helsinki);
        let mut good = sample(1.5, 225.0, 5.0).with_sea_level(Cm(20.0), Cm(12.0));
        good.time = full_moon - Duration::hours(2);
        let breakdown = score_breakdown(&good, &moon, &config).unwrap();
        assert_eq!(breakdown.total(), 60 + 30 + 15 + 30);
        assert_eq!(fishing_index(&good, &moon, &config).unwrap(), 100);
    }

    #[test]
    fn test_sea_level_is_optional() {
        let config = ScoringConfig::default();
        let moon = quiet_moon();

        let without = score_breakdown(&sample(0.4, 180.0, 5.0), &moon, &config).unwrap();
        assert_eq!(without.sea_level, None);
        assert_eq!(without.get(Contribution::SeaLevel), None);

        let with = score_breakdown(
            &sample(0.4, 180.0, 5.0).with_sea_level(Cm(30.0), Cm(4.0)),
            &moon,
            &config,
        )
        .unwrap();
        assert_eq!(with.sea_level, Some(10));
        assert_eq!(with.total(), without.total() + 10);
    }

    #[test]
    fn test_breakdown_keys() {
        let breakdown = ScoreBreakdown {
            pressure: 48,
            wind: 24,
            moon: 9,
            sea_level: Some(-10),
        };

        let sum: i32 = Contribution::iter()
            .filter_map(|key| breakdown.get(key))
            .sum();
        assert_eq!(sum, breakdown.total());
        assert_eq!(breakdown.get(Contribution::Moon), Some(9));
    }

    #[test]
    fn test_lunar_contribution() {
        let config = ScoringConfig::default();
        let moon = quiet_moon();
        let full_moon = moon.next_full_moon.with_timezone(&Helsinki);

        let mut snd = sample(0.0, 0.0, 5.0);
        snd.time = full_moon - Duration::hours(30);
        assert_eq!(score_breakdown(&snd, &moon, &config).unwrap().moon, 9);

        snd.time = full_moon - Duration::hours(60);
        // 15% of 30 points is 4.5, rounded away from zero.
        assert_eq!(score_breakdown(&snd, &moon, &config).unwrap().moon, 5);
    }

    #[test]
    fn test_invalid_wind_direction() {
        let config = ScoringConfig::default();
        let moon = quiet_moon();

        assert_eq!(
            fishing_index(&sample(0.4, 400.0, 5.0), &moon, &config),
            Err(FishcastError::InvalidWindDirection(400.0))
        );
        assert_eq!(
            fishing_index(&sample(0.4, -0.1, 5.0), &moon, &config),
            Err(FishcastError::InvalidWindDirection(-0.1))
        );
    }

    #[test]
    fn test_extreme_weights_saturate() {
        let breakdown = ScoreBreakdown {
            pressure: i32::MAX,
            wind: i32::MAX,
            moon: 5,
            sea_level: Some(1),
        };
        assert_eq!(breakdown.total(), i32::MAX);

        let breakdown = ScoreBreakdown {
            pressure: i32::MIN,
            wind: -1,
            moon: 0,
            sea_level: None,
        };
        assert_eq!(breakdown.total(), i32::MIN);

        let mut config = ScoringConfig::default();
        config.weights.pressure = i32::MAX;
        config.weights.wind = i32::MAX;

        let index = fishing_index(&sample(1.5, 225.0, 5.0), &quiet_moon(), &config).unwrap();
        assert_eq!(index, config.max_index);

        config.weights.wind = 0;
        let index = fishing_index(&sample(-3.0, 0.0, 5.0), &quiet_moon(), &config).unwrap();
        assert_eq!(index, config.min_index);
    }

    #[test]
    fn test_custom_weights() {
        let mut config = ScoringConfig::default();
        config.weights.pressure = 100;
        config.weights.wind = 0;

        let index = fishing_index(&sample(0.7, 225.0, 5.0), &quiet_moon(), &config).unwrap();
        assert_eq!(index, 80);
    }
}
