#![warn(missing_docs)]
//! Functions and data types for estimating how good the fishing will be, hour by hour, from a
//! weather forecast.
//!
//! The fishing index combines the hourly pressure trend, the wind direction, the proximity of a
//! full or new moon, and optionally the sea level trend. The weights and bands follow the
//! algorithm in *Kalastuksen taito: olosuhteet, vieheet, kohteet* by Tom Berg, which was
//! developed for Finnish waters. The effect of wind direction in particular depends on the
//! location, so all of the tables are configurable through `ScoringConfig`.
//!
//! Weather data is supplied by the caller as a series of `HourlyReading`s, one per hour, with
//! one extra lead-in hour at the start so the first reported hour has a pressure change.

//
// API
//
pub use crate::{
    chart::render,
    config::{
        Band, BandTable, DayStep, ForecastConfig, LunarTaper, ScoringConfig, Sector, Weights,
        WindTable,
    },
    error::{FishcastError, Result},
    index::{fishing_index, score_breakdown, score_hours, ScoreBreakdown, ScoredHour},
    keys::Contribution,
    lunar::LunarContext,
    report::{format_hour, ForecastReport},
    sample::{hourly_samples, read_readings, HourlyReading, ReadingRecord, WeatherSample},
    selection::select_best,
    stations::SeaLevelStation,
};

//
// Internal use only
//

// Modules
mod chart;
mod config;
mod error;
mod index;
mod keys;
mod lunar;
mod report;
mod sample;
mod selection;
mod stations;
mod utility;

#[cfg(test)]
mod test_data;
