//! Recorded collaborator output replayed as a provider.
//!
//! Lets the chart pipeline run without a live ephemeris: the positions,
//! house assignment and navamsa chart for one birth are read from JSON
//! and handed back verbatim, whatever the requested instant.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{CollaboratorError, FixtureError};
use crate::provider::{
    BodyPosition, EphemerisProvider, EphemerisSnapshot, HouseAssignment, HouseGenerator,
    NakshatraPlacement, NavamsaGenerator, RawHouse, RawNavamsaChart, RawPlanet,
};
use crate::request::BirthDetails;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordedCollaborators {
    pub positions: BTreeMap<String, BodyPosition>,
    pub ayanamsa: f64,
    pub ascendant: f64,
    pub houses: BTreeMap<u8, RawHouse>,
    pub planets: BTreeMap<String, RawPlanet>,
    pub navamsa: RawNavamsaChart,
}

impl RecordedCollaborators {
    pub fn from_json_str(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

impl EphemerisProvider for RecordedCollaborators {
    fn positions_at(
        &self,
        _instant: DateTime<Utc>,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<EphemerisSnapshot, CollaboratorError> {
        Ok(EphemerisSnapshot {
            positions: self.positions.clone(),
            ayanamsa: self.ayanamsa,
        })
    }

    fn ascendant_at(
        &self,
        _instant: DateTime<Utc>,
        _latitude: f64,
        _longitude: f64,
    ) -> Result<f64, CollaboratorError> {
        Ok(self.ascendant)
    }

    fn nakshatra_from_longitude(&self, longitude: f64) -> NakshatraPlacement {
        NakshatraPlacement::from_table(longitude)
    }
}

impl HouseGenerator for RecordedCollaborators {
    fn generate_houses(
        &self,
        _positions: &BTreeMap<String, BodyPosition>,
        _ascendant: f64,
    ) -> Result<HouseAssignment, CollaboratorError> {
        Ok(HouseAssignment {
            houses: self.houses.clone(),
            planets: self.planets.clone(),
        })
    }
}

impl NavamsaGenerator for RecordedCollaborators {
    fn generate_navamsa(
        &self,
        _longitudes: &BTreeMap<String, f64>,
        _ayanamsa: f64,
        _ascendant: f64,
        _birth: &BirthDetails,
    ) -> Result<RawNavamsaChart, CollaboratorError> {
        Ok(self.navamsa.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_fixture_parses() {
        let rec = RecordedCollaborators::from_json_str(
            r#"{"positions": {"Moon": {"longitude": 15.0}}, "ascendant": 130.0}"#,
        )
        .unwrap();
        assert_eq!(rec.positions["Moon"].longitude, 15.0);
        assert_eq!(rec.positions["Moon"].speed, 0.0);
        assert!(rec.houses.is_empty());
        assert!(rec.navamsa.houses.is_empty());
    }

    #[test]
    fn malformed_fixture_is_an_error() {
        let err = RecordedCollaborators::from_json_str("{\"positions\": 3}").unwrap_err();
        assert!(matches!(err, FixtureError::Json(_)));
    }
}
