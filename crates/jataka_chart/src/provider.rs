//! Interfaces of the external collaborators and the data they hand back.
//!
//! The ephemeris provider, house-assignment generator and navamsa
//! generator are outside this crate. Their outputs are read, never
//! mutated, and every field a generator may omit is optional.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use jataka_base::nakshatra_from_longitude;
use serde::{Deserialize, Serialize};

use crate::error::CollaboratorError;
use crate::request::BirthDetails;

/// Sidereal position of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Ecliptic longitude, degrees.
    pub longitude: f64,
    /// Ecliptic latitude, degrees.
    #[serde(default)]
    pub latitude: f64,
    /// Longitudinal speed, degrees/day. Negative when retrograde.
    #[serde(default)]
    pub speed: f64,
}

/// Positions of all bodies at one instant, plus the ayanamsa applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSnapshot {
    pub positions: BTreeMap<String, BodyPosition>,
    pub ayanamsa: f64,
}

/// Nakshatra placement of a longitude as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NakshatraPlacement {
    pub name: String,
    pub lord: String,
    pub pada: u8,
}

impl NakshatraPlacement {
    /// Placement from the built-in 27-nakshatra table.
    pub fn from_table(longitude: f64) -> Self {
        let info = nakshatra_from_longitude(longitude);
        Self {
            name: info.nakshatra.name().to_string(),
            lord: info.nakshatra.vimshottari_lord().english_name().to_string(),
            pada: info.pada,
        }
    }
}

/// Dignity label in both display languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dignity {
    pub english: String,
    pub tamil: String,
}

impl Default for Dignity {
    fn default() -> Self {
        Self {
            english: "Normal".to_string(),
            tamil: "சாதாரணம்".to_string(),
        }
    }
}

/// One house as produced by the house-assignment generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawHouse {
    /// Sanskrit sign name.
    pub sign: String,
    pub sign_tamil: Option<String>,
    pub lord: String,
    pub lord_tamil: Option<String>,
    /// Bodies in the house; may include the `Lagna` marker.
    pub planets: Vec<String>,
    pub sign_number: Option<u8>,
    pub element: Option<String>,
    pub element_tamil: Option<String>,
    pub nature: Option<String>,
    pub nature_tamil: Option<String>,
    pub degrees: Option<f64>,
}

/// One body as placed by the house-assignment generator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPlanet {
    /// Sanskrit sign name.
    pub sign: String,
    pub sign_tamil: Option<String>,
    pub sign_number: Option<u8>,
    pub tamil_name: Option<String>,
    pub house: Option<u8>,
    /// Degrees inside the sign.
    pub norm_degree: Option<f64>,
    /// Full sidereal longitude.
    pub full_degree: Option<f64>,
    pub nakshatra: Option<String>,
    pub nakshatra_tamil: Option<String>,
    pub nakshatra_number: Option<u8>,
    pub nakshatra_lord: Option<String>,
    pub nakshatra_lord_tamil: Option<String>,
    pub pada: Option<u8>,
    pub lord: Option<String>,
    pub lord_tamil: Option<String>,
    pub element: Option<String>,
    pub element_tamil: Option<String>,
    pub dignity: Option<Dignity>,
    pub is_retrograde: Option<bool>,
}

/// House-assignment generator output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseAssignment {
    pub houses: BTreeMap<u8, RawHouse>,
    pub planets: BTreeMap<String, RawPlanet>,
}

/// A navamsa placement: a sign name or a harmonic longitude.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavamsaPosition {
    Sign(String),
    Longitude(f64),
}

/// Navamsa generator output. Either map may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawNavamsaChart {
    pub navamsa_positions: BTreeMap<String, NavamsaPosition>,
    pub houses: BTreeMap<u8, RawHouse>,
}

/// Source of planetary positions.
pub trait EphemerisProvider {
    /// Sidereal positions of all bodies and the ayanamsa at `instant`.
    fn positions_at(
        &self,
        instant: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> Result<EphemerisSnapshot, CollaboratorError>;

    /// Sidereal ascendant longitude at `instant`.
    fn ascendant_at(
        &self,
        instant: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> Result<f64, CollaboratorError>;

    /// Nakshatra of a sidereal longitude.
    fn nakshatra_from_longitude(&self, longitude: f64) -> NakshatraPlacement;
}

/// Partitions the zodiac into houses around the ascendant.
pub trait HouseGenerator {
    fn generate_houses(
        &self,
        positions: &BTreeMap<String, BodyPosition>,
        ascendant: f64,
    ) -> Result<HouseAssignment, CollaboratorError>;
}

/// Builds the 9th-harmonic chart.
pub trait NavamsaGenerator {
    fn generate_navamsa(
        &self,
        longitudes: &BTreeMap<String, f64>,
        ayanamsa: f64,
        ascendant: f64,
        birth: &BirthDetails,
    ) -> Result<RawNavamsaChart, CollaboratorError>;
}

impl<T: EphemerisProvider + ?Sized> EphemerisProvider for &T {
    fn positions_at(
        &self,
        instant: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> Result<EphemerisSnapshot, CollaboratorError> {
        (**self).positions_at(instant, latitude, longitude)
    }

    fn ascendant_at(
        &self,
        instant: DateTime<Utc>,
        latitude: f64,
        longitude: f64,
    ) -> Result<f64, CollaboratorError> {
        (**self).ascendant_at(instant, latitude, longitude)
    }

    fn nakshatra_from_longitude(&self, longitude: f64) -> NakshatraPlacement {
        (**self).nakshatra_from_longitude(longitude)
    }
}

impl<T: HouseGenerator + ?Sized> HouseGenerator for &T {
    fn generate_houses(
        &self,
        positions: &BTreeMap<String, BodyPosition>,
        ascendant: f64,
    ) -> Result<HouseAssignment, CollaboratorError> {
        (**self).generate_houses(positions, ascendant)
    }
}

impl<T: NavamsaGenerator + ?Sized> NavamsaGenerator for &T {
    fn generate_navamsa(
        &self,
        longitudes: &BTreeMap<String, f64>,
        ayanamsa: f64,
        ascendant: f64,
        birth: &BirthDetails,
    ) -> Result<RawNavamsaChart, CollaboratorError> {
        (**self).generate_navamsa(longitudes, ayanamsa, ascendant, birth)
    }
}
