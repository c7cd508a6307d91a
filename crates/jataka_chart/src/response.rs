//! Shapes of the assembled chart response.

use std::collections::BTreeMap;

use jataka_base::{
    DashaReport, Graha, Panchangam, PanchangError, RASHI_SPAN, Rashi, rashi_from_longitude,
    rashi_lord, sign_english,
};
use serde::Serialize;

use crate::error::ChartError;
use crate::normalize::{NormalizedHouse, NormalizedPlanet};
use crate::provider::{BodyPosition, NakshatraPlacement, NavamsaPosition, RawHouse, RawPlanet};
use crate::request::BirthDetails;

/// Echo of the validated birth details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthData {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: f64,
}

impl From<&BirthDetails> for BirthData {
    fn from(birth: &BirthDetails) -> Self {
        Self {
            date: format!("{:04}-{:02}-{:02}", birth.year, birth.month, birth.day),
            time: format!("{:02}:{:02}", birth.hour, birth.minute),
            latitude: birth.latitude,
            longitude: birth.longitude,
            timezone: birth.timezone,
        }
    }
}

/// Summary of the sign holding the ascendant or the Moon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignSummary {
    /// Zodiac ordinal, Mesha = 1.
    pub number: u8,
    /// Sanskrit name.
    pub name: String,
    pub english: String,
    pub tamil: String,
    pub lord: String,
    pub lord_tamil: String,
    pub element: Option<String>,
    pub element_tamil: Option<String>,
    /// Degree range covered by the sign.
    pub degrees: [f64; 2],
}

impl SignSummary {
    /// Summary of the sign containing `longitude`.
    pub fn from_longitude(longitude: f64) -> Self {
        let rashi = rashi_from_longitude(longitude).rashi;
        let lord = rashi_lord(rashi);
        let start = f64::from(rashi.index()) * RASHI_SPAN;
        Self {
            number: rashi.ordinal(),
            name: rashi.name().to_string(),
            english: rashi.western_name().to_string(),
            tamil: rashi.tamil_name().to_string(),
            lord: lord.english_name().to_string(),
            lord_tamil: lord.tamil_name().to_string(),
            element: None,
            element_tamil: None,
            degrees: [start, start + RASHI_SPAN],
        }
    }

    /// Summary of a generated house. Fields the generator left out are
    /// taken from the sign containing `longitude`.
    pub fn from_house(house: Option<&RawHouse>, longitude: f64) -> Self {
        let mut summary = Self::from_longitude(longitude);
        let Some(house) = house else {
            return summary;
        };
        if let Some(rashi) = Rashi::from_name(&house.sign) {
            summary = Self::from_longitude(f64::from(rashi.index()) * RASHI_SPAN);
        }
        if let Some(n) = house.sign_number {
            summary.number = n;
        }
        if !house.lord.is_empty() {
            summary.lord_tamil = house
                .lord_tamil
                .clone()
                .or_else(|| Graha::from_name(&house.lord).map(|g| g.tamil_name().to_string()))
                .unwrap_or_default();
            summary.lord = house.lord.clone();
        }
        if let Some(start) = house.degrees {
            summary.degrees = [start, start + RASHI_SPAN];
        }
        summary.element = house.element.clone();
        summary.element_tamil = house.element_tamil.clone();
        summary
    }

    /// Summary of the sign a generated planet sits in.
    pub fn from_planet(planet: Option<&RawPlanet>, longitude: f64) -> Self {
        let mut summary = Self::from_longitude(longitude);
        if let Some(p) = planet {
            if let Some(n) = p.sign_number {
                summary.number = n;
            }
            summary.element = p.element.clone();
            summary.element_tamil = p.element_tamil.clone();
        }
        summary
    }
}

/// The Moon's nakshatra.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoonNakshatra {
    /// 1-based, Ashwini = 1.
    pub number: u8,
    pub name: String,
    pub lord: String,
    /// English name of the Moon's sign.
    pub rashi: String,
    pub pada: u8,
}

impl MoonNakshatra {
    pub fn new(placement: NakshatraPlacement, moon: Option<&RawPlanet>, longitude: f64) -> Self {
        let number = moon
            .and_then(|p| p.nakshatra_number)
            .unwrap_or_else(|| jataka_base::nakshatra_index(longitude) + 1);
        let rashi = moon
            .map(|p| sign_english(&p.sign).to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| rashi_from_longitude(longitude).rashi.western_name().to_string());
        let pada = moon.and_then(|p| p.pada).unwrap_or(placement.pada);
        Self {
            number,
            name: placement.name,
            lord: placement.lord,
            rashi,
            pada,
        }
    }
}

/// Panchang section. A failed derivation carries its message only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PanchangReport {
    Computed(Panchangam),
    Failed { error: String },
}

impl PanchangReport {
    pub fn from_result(result: Result<Panchangam, PanchangError>) -> Self {
        match result {
            Ok(p) => Self::Computed(p),
            Err(e) => Self::Failed {
                error: e.to_string(),
            },
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Computed(_) => None,
            Self::Failed { error } => Some(error),
        }
    }
}

/// The Navamsa (D9) chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavamsaView {
    pub houses: Vec<NormalizedHouse>,
    /// Body placements as the generator reported them.
    pub planets: BTreeMap<String, NavamsaPosition>,
    /// Navamsa placement of the ascendant, if reported.
    pub ascendant: Option<NavamsaPosition>,
}

/// Full chart for one birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    pub birth_data: BirthData,
    /// Rasi (D1) houses, house 1 first.
    pub rasi: Vec<NormalizedHouse>,
    /// Generator houses as received.
    pub houses: BTreeMap<u8, RawHouse>,
    /// House number → bodies in it.
    pub planets: BTreeMap<u8, Vec<String>>,
    pub raw_planets: BTreeMap<String, NormalizedPlanet>,
    pub positions: BTreeMap<String, BodyPosition>,
    pub ascendant: f64,
    pub ayanamsa: f64,
    pub lagna: SignSummary,
    pub moon_sign: Option<SignSummary>,
    pub moon_nakshatra: Option<MoonNakshatra>,
    pub panchangam: PanchangReport,
    pub dasha: DashaReport,
    pub navamsa: NavamsaView,
}

/// Successful response envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEnvelope {
    pub success: bool,
    pub data: ChartResponse,
}

impl ChartEnvelope {
    pub fn ok(data: ChartResponse) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Body of a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub details: String,
}

impl From<&ChartError> for ErrorBody {
    fn from(err: &ChartError) -> Self {
        let error = if err.is_client_error() {
            "Invalid input"
        } else {
            "Internal Server Error"
        };
        Self {
            error: error.to_string(),
            details: err.to_string(),
        }
    }
}
