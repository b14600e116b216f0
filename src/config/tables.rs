use serde::{Deserialize, Serialize};
use std::ops::{Bound, RangeBounds};

/// A range of values and the points awarded for a value in it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Lower edge of the band.
    pub lower: Bound<f64>,
    /// Upper edge of the band.
    pub upper: Bound<f64>,
    /// Points for a value inside the band.
    pub points: i32,
}

impl Band {
    /// Create a new band.
    #[inline]
    pub fn new(lower: Bound<f64>, upper: Bound<f64>, points: i32) -> Self {
        Band {
            lower,
            upper,
            points,
        }
    }

    /// Is `value` inside this band.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        (self.lower, self.upper).contains(&value)
    }
}

/// Lookup table from a change in some quantity to points.
///
/// The first band containing the value decides the points, a value outside of every band is
/// worth 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BandTable(pub Vec<Band>);

impl BandTable {
    /// Points for `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fishing_index::BandTable;
    ///
    /// let table = BandTable::pressure_change();
    /// assert_eq!(table.points(0.0), 0);
    /// assert_eq!(table.points(0.4), 40);
    /// assert_eq!(table.points(1.5), 100);
    /// assert_eq!(table.points(-1.5), -20);
    /// ```
    pub fn points(&self, value: f64) -> i32 {
        self.0
            .iter()
            .find(|band| band.contains(value))
            .map(|band| band.points)
            .unwrap_or(0)
    }

    /// The hourly pressure change (hPa) bands.
    ///
    /// Rising pressure is good for fishing. Falling pressure is penalized, more the faster it
    /// falls.
    pub fn pressure_change() -> Self {
        use std::ops::Bound::*;

        BandTable(vec![
            Band::new(Excluded(1.0), Unbounded, 100),
            Band::new(Excluded(0.5), Included(1.0), 80),
            Band::new(Included(0.3), Included(0.5), 40),
            Band::new(Excluded(-1.0), Excluded(0.3), 0),
            Band::new(Included(-2.0), Included(-1.0), -20),
            Band::new(Unbounded, Excluded(-2.0), -40),
        ])
    }

    /// The hourly sea level change (cm) bands. Rising water is good, falling water is bad.
    pub fn sea_level_change() -> Self {
        use std::ops::Bound::*;

        BandTable(vec![
            Band::new(Excluded(9.0), Unbounded, 30),
            Band::new(Excluded(6.0), Included(9.0), 20),
            Band::new(Included(3.0), Included(6.0), 10),
            Band::new(Excluded(-3.0), Excluded(3.0), 0),
            Band::new(Excluded(-6.0), Included(-3.0), -10),
            Band::new(Included(-9.0), Included(-6.0), -20),
            Band::new(Unbounded, Excluded(-9.0), -30),
        ])
    }
}

/// A compass sector, `start` inclusive and `end` exclusive, in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    /// Name of the sector, used for display only.
    pub name: String,
    /// First bearing in the sector.
    pub start: f64,
    /// First bearing after the sector.
    pub end: f64,
    /// Points for wind from this sector.
    pub points: i32,
}

/// Points for the direction the wind blows from, gated by the wind speed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindTable {
    /// The favorable sectors, bearings in no sector are worth 0.
    pub sectors: Vec<Sector>,
    /// Wind slower than this (m/s) is calm, direction doesn't matter.
    pub calm_below_ms: f64,
    /// Wind faster than this (m/s) ruins fishing from any direction.
    pub storm_above_ms: f64,
}

impl WindTable {
    /// Points for a wind direction (degrees) and speed (m/s).
    ///
    /// The direction must already be validated to be in [0, 360).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fishing_index::WindTable;
    ///
    /// let table = WindTable::default();
    /// assert_eq!(table.points(225.0, 5.0), 100);
    /// assert_eq!(table.points(180.0, 5.0), 80);
    /// assert_eq!(table.points(0.0, 5.0), 0);
    /// // Too calm or too windy.
    /// assert_eq!(table.points(225.0, 0.2), 0);
    /// assert_eq!(table.points(225.0, 20.0), 0);
    /// ```
    pub fn points(&self, direction: f64, speed: f64) -> i32 {
        if speed < self.calm_below_ms || speed > self.storm_above_ms {
            return 0;
        }

        self.sectors
            .iter()
            .find(|sector| sector.start <= direction && direction < sector.end)
            .map(|sector| sector.points)
            .unwrap_or(0)
    }
}

impl Default for WindTable {
    fn default() -> Self {
        WindTable {
            sectors: vec![
                Sector {
                    name: "SW".to_owned(),
                    start: 202.5,
                    end: 247.5,
                    points: 100,
                },
                Sector {
                    name: "S".to_owned(),
                    start: 157.5,
                    end: 202.5,
                    points: 80,
                },
                Sector {
                    name: "W".to_owned(),
                    start: 247.5,
                    end: 292.5,
                    points: 80,
                },
                Sector {
                    name: "SE".to_owned(),
                    start: 112.5,
                    end: 157.5,
                    points: 50,
                },
                Sector {
                    name: "NW".to_owned(),
                    start: 292.5,
                    end: 337.5,
                    points: 50,
                },
            ],
            calm_below_ms: 1.0,
            storm_above_ms: 15.0,
        }
    }
}

/// Points for being within `within_days` of a moon phase event.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DayStep {
    /// Maximum distance in days from the event.
    pub within_days: f64,
    /// Points awarded.
    pub points: i32,
}

/// How the lunar bonus tapers off with distance from a full or new moon.
///
/// Steps are checked in order, so list them from the nearest to the farthest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LunarTaper {
    /// Steps for hours leading up to the event.
    pub before_peak: Vec<DayStep>,
    /// Steps for hours after the event.
    pub after_peak: Vec<DayStep>,
}

impl LunarTaper {
    /// Points for an hour `days` before an event.
    #[inline]
    pub fn before(&self, days: f64) -> i32 {
        step_points(&self.before_peak, days)
    }

    /// Points for an hour `days` after an event.
    #[inline]
    pub fn after(&self, days: f64) -> i32 {
        step_points(&self.after_peak, days)
    }
}

fn step_points(steps: &[DayStep], days: f64) -> i32 {
    steps
        .iter()
        .find(|step| days <= step.within_days)
        .map(|step| step.points)
        .unwrap_or(0)
}

impl Default for LunarTaper {
    fn default() -> Self {
        LunarTaper {
            before_peak: vec![
                DayStep {
                    within_days: 1.0,
                    points: 100,
                },
                DayStep {
                    within_days: 2.0,
                    points: 60,
                },
                DayStep {
                    within_days: 3.0,
                    points: 30,
                },
            ],
            after_peak: vec![DayStep {
                within_days: 1.0,
                points: 60,
            }],
        }
    }
}
