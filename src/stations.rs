//! Tide gauge stations with a sea level forecast from the Finnish Meteorological Institute.

use crate::error::{FishcastError, Result};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};

/// Sea level forecast locations on the Finnish coast.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, Serialize, Deserialize,
)]
#[allow(missing_docs)]
pub enum SeaLevelStation {
    Pietarsaari,
    Kemi,
    Porvoo,
    Vaasa,
    Turku,
    Rauma,
    Raahe,
    Oulu,
    /// Pori Mäntyluoto
    Mantyluoto,
    Kaskinen,
    Helsinki,
    Hanko,
    Hamina,
    /// Föglö Degerby
    Degerby,
}

impl SeaLevelStation {
    /// The FMI geoid used to request the sea level forecast for this station.
    pub fn geoid(self) -> &'static str {
        use SeaLevelStation::*;

        match self {
            Pietarsaari => "-10000618",
            Kemi => "-10017238",
            Porvoo => "-100669",
            Vaasa => "632978",
            Turku => "633679",
            Rauma => "639734",
            Raahe => "640276",
            Oulu => "643492",
            Mantyluoto => "646666",
            Kaskinen => "653760",
            Helsinki => "658225",
            Hanko => "659101",
            Hamina => "659169",
            Degerby => "660415",
        }
    }

    /// Every known station.
    pub fn all() -> Vec<SeaLevelStation> {
        SeaLevelStation::iter().collect()
    }

    /// Find a station by name among `allowed`, ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fishing_index::SeaLevelStation;
    ///
    /// let all = SeaLevelStation::all();
    /// assert_eq!(SeaLevelStation::lookup("oulu", &all).unwrap(), SeaLevelStation::Oulu);
    /// assert!(SeaLevelStation::lookup("Rovaniemi", &all).is_err());
    /// assert!(SeaLevelStation::lookup("Oulu", &[SeaLevelStation::Kemi]).is_err());
    /// ```
    pub fn lookup(name: &str, allowed: &[SeaLevelStation]) -> Result<SeaLevelStation> {
        let name = name.trim();

        allowed
            .iter()
            .copied()
            .find(|stn| stn.as_ref().eq_ignore_ascii_case(name))
            .ok_or_else(|| FishcastError::UnknownSeaLevelStation(name.to_owned()))
    }
}
