//! Enums used as keys for selecting parts of an analysis.

use strum_macros::{AsRefStr, Display, EnumIter};

/// The independent parts that add up to the fishing index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
pub enum Contribution {
    /// Hourly change in air pressure.
    Pressure,
    /// Direction and speed of the wind.
    Wind,
    /// Proximity to a full or new moon.
    Moon,
    /// Hourly change in sea level, only when sea level data is available.
    SeaLevel,
}
