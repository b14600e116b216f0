//! Times of new and full moons, and how close an hour is to one of them.
//!
//! The phase instants are calculated with the method in chapter 49 of Jean Meeus,
//! *Astronomical Algorithms* (2nd ed.), which is accurate to well under a minute for the
//! present era. That is far more precise than the day scale tapers used for fishing.

use crate::{
    config::LunarTaper,
    error::{FishcastError, Result},
};
use chrono::{DateTime, Datelike, TimeZone, Utc};

/// Mean length of the synodic month in days.
const SYNODIC_MONTH: f64 = 29.530_588_861;

/// Approximate difference between dynamical time and UTC for the 2020s, in seconds.
const DELTA_T: f64 = 69.0;

/// Julian day of 1970-01-01T00:00:00Z.
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// The moon phases that matter for fishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    New,
    Full,
}

impl Phase {
    /// Offset of the phase in lunations from the new moon.
    fn k_offset(self) -> f64 {
        match self {
            Phase::New => 0.0,
            Phase::Full => 0.5,
        }
    }
}

/// The full and new moons surrounding a forecast.
///
/// Calculated once from the start of the forecast and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarContext {
    /// The last full moon at or before the reference time.
    pub previous_full_moon: DateTime<Utc>,
    /// The last new moon at or before the reference time.
    pub previous_new_moon: DateTime<Utc>,
    /// The first full moon after the reference time.
    pub next_full_moon: DateTime<Utc>,
    /// The first new moon after the reference time.
    pub next_new_moon: DateTime<Utc>,
}

impl LunarContext {
    /// Find the full and new moons bracketing `reference`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use fishing_index::LunarContext;
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 1, 20, 0, 0, 0).unwrap();
    /// let moon = LunarContext::new(now).unwrap();
    ///
    /// assert!(moon.previous_new_moon < now && now < moon.next_full_moon);
    /// assert!(moon.previous_full_moon < moon.previous_new_moon);
    /// assert!(moon.next_full_moon < moon.next_new_moon);
    /// ```
    pub fn new(reference: DateTime<Utc>) -> Result<Self> {
        let (previous_new_moon, next_new_moon) = bracketing_phases(reference, Phase::New)?;
        let (previous_full_moon, next_full_moon) = bracketing_phases(reference, Phase::Full)?;

        Ok(LunarContext {
            previous_full_moon,
            previous_new_moon,
            next_full_moon,
            next_new_moon,
        })
    }

    /// All four phase events, oldest first.
    pub fn events(&self) -> [DateTime<Utc>; 4] {
        let mut events = [
            self.previous_full_moon,
            self.previous_new_moon,
            self.next_full_moon,
            self.next_new_moon,
        ];
        events.sort();
        events
    }

    /// Lunar points for `time` from the `taper` table.
    ///
    /// Each stored event is checked, so hours in a long forecast that run past the next full or
    /// new moon are still scored against it. The best score wins.
    pub fn phase_points<Z: TimeZone>(&self, time: &DateTime<Z>, taper: &LunarTaper) -> i32 {
        self.events()
            .iter()
            .map(|event| {
                let days = days_between(time.with_timezone(&Utc), *event);
                if days >= 0.0 {
                    taper.before(days)
                } else {
                    taper.after(-days)
                }
            })
            .max()
            .unwrap_or(0)
    }

    /// Position of `time` in the synodic month, 0.0 at new moon and 0.5 at full moon.
    pub fn phase_fraction<Z: TimeZone>(&self, time: &DateTime<Z>) -> f64 {
        let age = days_between(self.previous_new_moon, time.with_timezone(&Utc));
        (age / SYNODIC_MONTH).rem_euclid(1.0)
    }
}

/// Days from `start` to `end`, negative if `end` comes first.
#[inline]
fn days_between(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    end.signed_duration_since(start).num_milliseconds() as f64 / MILLIS_PER_DAY
}

fn bracketing_phases(
    reference: DateTime<Utc>,
    phase: Phase,
) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let decimal_year = f64::from(reference.year()) + f64::from(reference.ordinal0()) / 365.25;
    let k_estimate = ((decimal_year - 2000.0) * 12.3685).floor();

    let candidates = (-2..=2)
        .map(|i| k_estimate + f64::from(i) + phase.k_offset())
        .map(|k| from_julian_day(true_phase_jde(k, phase) - DELTA_T / 86_400.0))
        .collect::<Result<Vec<DateTime<Utc>>>>()?;

    let previous = candidates.iter().filter(|&&t| t <= reference).max();
    let next = candidates.iter().filter(|&&t| t > reference).min();

    match (previous, next) {
        (Some(&previous), Some(&next)) => Ok((previous, next)),
        _ => Err(FishcastError::EphemerisOutOfRange),
    }
}

fn from_julian_day(jd: f64) -> Result<DateTime<Utc>> {
    let millis = ((jd - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return Err(FishcastError::EphemerisOutOfRange);
    }

    Utc.timestamp_millis_opt(millis as i64)
        .single()
        .ok_or(FishcastError::EphemerisOutOfRange)
}

/// Angle in degrees reduced to [0, 360) and converted to radians.
#[inline]
fn radians(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0).to_radians()
}

// Periodic terms for the new and full moon. Columns are the new moon coefficient, the full moon
// coefficient, the power of E, and the multiples of M', M, F and Ω in the sine argument.
#[rustfmt::skip]
const PERIODIC_TERMS: [(f64, f64, i32, [f64; 4]); 25] = [
    (-0.407_20, -0.406_14, 0, [1.0, 0.0, 0.0, 0.0]),
    ( 0.172_41,  0.173_02, 1, [0.0, 1.0, 0.0, 0.0]),
    ( 0.016_08,  0.016_14, 0, [2.0, 0.0, 0.0, 0.0]),
    ( 0.010_39,  0.010_43, 0, [0.0, 0.0, 2.0, 0.0]),
    ( 0.007_39,  0.007_34, 1, [1.0, -1.0, 0.0, 0.0]),
    (-0.005_14, -0.005_15, 1, [1.0, 1.0, 0.0, 0.0]),
    ( 0.002_08,  0.002_09, 2, [0.0, 2.0, 0.0, 0.0]),
    (-0.001_11, -0.001_11, 0, [1.0, 0.0, -2.0, 0.0]),
    (-0.000_57, -0.000_57, 0, [1.0, 0.0, 2.0, 0.0]),
    ( 0.000_56,  0.000_56, 1, [2.0, 1.0, 0.0, 0.0]),
    (-0.000_42, -0.000_42, 0, [3.0, 0.0, 0.0, 0.0]),
    ( 0.000_42,  0.000_42, 1, [0.0, 1.0, 2.0, 0.0]),
    ( 0.000_38,  0.000_38, 1, [0.0, 1.0, -2.0, 0.0]),
    (-0.000_24, -0.000_24, 1, [2.0, -1.0, 0.0, 0.0]),
    (-0.000_17, -0.000_17, 0, [0.0, 0.0, 0.0, 1.0]),
    (-0.000_07, -0.000_07, 0, [1.0, 2.0, 0.0, 0.0]),
    ( 0.000_04,  0.000_04, 0, [2.0, 0.0, -2.0, 0.0]),
    ( 0.000_04,  0.000_04, 0, [0.0, 3.0, 0.0, 0.0]),
    ( 0.000_03,  0.000_03, 0, [1.0, 1.0, -2.0, 0.0]),
    ( 0.000_03,  0.000_03, 0, [2.0, 0.0, 2.0, 0.0]),
    (-0.000_03, -0.000_03, 0, [1.0, 1.0, 2.0, 0.0]),
    ( 0.000_03,  0.000_03, 0, [1.0, -1.0, 2.0, 0.0]),
    (-0.000_02, -0.000_02, 0, [1.0, -1.0, -2.0, 0.0]),
    (-0.000_02, -0.000_02, 0, [3.0, 1.0, 0.0, 0.0]),
    ( 0.000_02,  0.000_02, 0, [4.0, 0.0, 0.0, 0.0]),
];

// Planetary arguments: constant, rate per lunation, and the coefficient of the correction.
#[rustfmt::skip]
const PLANETARY_TERMS: [(f64, f64, f64); 14] = [
    (299.77, 0.107_408, 0.000_325),
    (251.88, 0.016_321, 0.000_165),
    (251.83, 26.651_886, 0.000_164),
    (349.42, 36.412_478, 0.000_126),
    (84.66, 18.206_239, 0.000_110),
    (141.74, 53.303_771, 0.000_062),
    (207.14, 2.453_732, 0.000_060),
    (154.84, 7.306_860, 0.000_056),
    (34.52, 27.261_239, 0.000_047),
    (207.19, 0.121_824, 0.000_042),
    (291.34, 1.844_379, 0.000_040),
    (161.72, 24.198_154, 0.000_037),
    (239.56, 25.513_099, 0.000_035),
    (331.55, 3.592_518, 0.000_023),
];

/// Julian ephemeris day of the phase with lunation number `k`.
///
/// `k` is an integer for new moons and an integer plus one half for full moons, counted from the
/// new moon of 2000-01-06.
fn true_phase_jde(k: f64, phase: Phase) -> f64 {
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean_jde = 2_451_550.097_66 + SYNODIC_MONTH * k + 0.000_154_37 * t2
        - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    // Sun's mean anomaly, moon's mean anomaly, moon's argument of latitude, and longitude of
    // the ascending node.
    let m = radians(2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3);
    let m_prime = radians(
        201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
            - 0.000_000_058 * t4,
    );
    let f = radians(
        160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
            + 0.000_000_011 * t4,
    );
    let omega = radians(124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3);

    let periodic: f64 = PERIODIC_TERMS
        .iter()
        .map(|&(new_coeff, full_coeff, e_power, [n_mp, n_m, n_f, n_om])| {
            let coeff = match phase {
                Phase::New => new_coeff,
                Phase::Full => full_coeff,
            };
            let arg = n_mp * m_prime + n_m * m + n_f * f + n_om * omega;
            coeff * e.powi(e_power) * arg.sin()
        })
        .sum();

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .enumerate()
        .map(|(i, &(constant, rate, coeff))| {
            let mut arg = constant + rate * k;
            if i == 0 {
                arg -= 0.009_173 * t2;
            }
            coeff * radians(arg).sin()
        })
        .sum();

    mean_jde + periodic + planetary
}
