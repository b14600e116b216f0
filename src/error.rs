//! Error types for the fishing-index crate.
use chrono::{DateTime, Utc};

/// Error type for the crate.
#[derive(Clone, PartialEq, Debug, thiserror::Error)]
pub enum FishcastError {
    /// Not enough data available for analysis, there is not even a lead-in hour.
    #[error("not enough data available for analysis")]
    NotEnoughData,
    /// Two consecutive readings are not exactly one hour apart.
    #[error("readings must be one hour apart, found {previous} followed by {next}")]
    GapInSeries {
        /// Time of the earlier reading.
        previous: DateTime<Utc>,
        /// Time of the reading that follows it.
        next: DateTime<Utc>,
    },
    /// Wind direction outside of [0, 360) degrees.
    #[error("wind direction {0} is outside of [0, 360) degrees")]
    InvalidWindDirection(f64),
    /// Bad or invalid input, the name of the offending value is attached.
    #[error("invalid input value: {0}")]
    InvalidValue(&'static str),
    /// Sea level station not in the configured list.
    #[error("invalid sea level measurement location: {0}")]
    UnknownSeaLevelStation(String),
    /// Timezone name not in the tz database.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    /// A moon phase instant could not be represented as a date and time.
    #[error("moon phase instant out of range")]
    EphemerisOutOfRange,
    /// A row of hourly readings could not be parsed.
    #[error("malformed reading: {0}")]
    MalformedReading(String),
}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, FishcastError>;

impl From<csv::Error> for FishcastError {
    fn from(err: csv::Error) -> Self {
        FishcastError::MalformedReading(err.to_string())
    }
}
