use chrono::{DateTime, Utc};
use metfor::{Celsius, Cm, HectoPascal, MetersPSec, WindSpdDir};
use optional::Optioned;

/// A single hour of forecast data as delivered by the weather provider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HourlyReading {
    /// Valid time of the forecast.
    pub time: DateTime<Utc>,
    /// Pressure in hPa
    pub pressure: HectoPascal,
    /// Wind speed and the direction the wind blows from, in degrees.
    pub wind: WindSpdDir<MetersPSec>,
    /// Temperature in C
    pub temperature: Optioned<Celsius>,
    /// Sea level relative to the N2000 height system, in cm
    pub sea_level: Optioned<Cm>,
}

impl HourlyReading {
    /// Create a reading with the required values, optional values are missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use fishing_index::HourlyReading;
    /// use metfor::{HectoPascal, MetersPSec, WindSpdDir};
    ///
    /// let reading = HourlyReading::new(
    ///     Utc.with_ymd_and_hms(2025, 2, 1, 20, 0, 0).unwrap(),
    ///     HectoPascal(1008.1),
    ///     WindSpdDir { speed: MetersPSec(4.0), direction: 225.0 },
    /// );
    /// assert!(reading.sea_level.is_none());
    /// ```
    #[inline]
    pub fn new(time: DateTime<Utc>, pressure: HectoPascal, wind: WindSpdDir<MetersPSec>) -> Self {
        HourlyReading {
            time,
            pressure,
            wind,
            temperature: Optioned::default(),
            sea_level: Optioned::default(),
        }
    }

    /// Builder method for the temperature.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use fishing_index::HourlyReading;
    /// use metfor::{Celsius, HectoPascal, MetersPSec, WindSpdDir};
    /// use optional::{none, some};
    ///
    /// let time = Utc.with_ymd_and_hms(2025, 2, 1, 20, 0, 0).unwrap();
    /// let wind = WindSpdDir { speed: MetersPSec(4.0), direction: 225.0 };
    ///
    /// let _r = HourlyReading::new(time, HectoPascal(1008.1), wind).with_temperature(Celsius(-3.5));
    /// let _r = HourlyReading::new(time, HectoPascal(1008.1), wind)
    ///     .with_temperature(some(Celsius(-3.5)));
    /// let _r = HourlyReading::new(time, HectoPascal(1008.1), wind)
    ///     .with_temperature(none::<Celsius>());
    /// ```
    #[inline]
    pub fn with_temperature<T>(mut self, value: T) -> Self
    where
        Optioned<Celsius>: From<T>,
    {
        self.temperature = Optioned::from(value);
        self
    }

    /// Builder method for the sea level.
    ///
    /// See `with_temperature` for an example of usage, keeping in mind the units type is
    /// different.
    #[inline]
    pub fn with_sea_level<T>(mut self, value: T) -> Self
    where
        Optioned<Cm>: From<T>,
    {
        self.sea_level = Optioned::from(value);
        self
    }
}
