//! Chart normalization: sign translation, house ordering and per-body
//! degree formatting for the Rasi (D1) and Navamsa (D9) charts.
//!
//! Generator output keyed by house number becomes a 12-entry array, house
//! 1 first. Every sign is reported in Sanskrit, English and Tamil. The
//! `Lagna` marker is dropped from planet lists.

use std::collections::BTreeMap;

use jataka_base::{
    DmsStyle, Graha, RASHI_SPAN, Rashi, format_dms_with, rashi_from_longitude, rashi_lord,
    sign_english, sign_tamil,
};
use serde::Serialize;
use tracing::debug;

use crate::provider::{BodyPosition, Dignity, NavamsaPosition, RawHouse, RawNavamsaChart, RawPlanet};

/// Pseudo-planet marking the ascendant in generator output.
pub const LAGNA: &str = "Lagna";

/// Keys that mark the ascendant in a navamsa position map.
pub const ASCENDANT_MARKERS: [&str; 2] = [LAGNA, "ascendant"];

/// Number of houses in every chart.
pub const HOUSE_COUNT: u8 = 12;

/// One house ready for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedHouse {
    pub house_number: u8,
    /// English sign name.
    pub sign: String,
    pub sign_sanskrit: String,
    pub sign_tamil: String,
    pub lord: String,
    pub lord_tamil: Option<String>,
    pub element: Option<String>,
    pub element_tamil: Option<String>,
    pub nature: Option<String>,
    pub nature_tamil: Option<String>,
    pub degrees: Option<f64>,
    /// Bodies in the house, `Lagna` excluded.
    pub planets: Vec<String>,
}

/// Tamil rendering of a sign, falling back to what the generator supplied.
fn tamil_for(sign: &str, supplied: Option<&str>) -> String {
    match (Rashi::from_name(sign), supplied) {
        (Some(r), _) => r.tamil_name().to_string(),
        (None, Some(t)) => t.to_string(),
        (None, None) => sign_tamil(sign).to_string(),
    }
}

fn lord_tamil_for(lord: &str, supplied: Option<&str>) -> Option<String> {
    supplied
        .map(str::to_string)
        .or_else(|| Graha::from_name(lord).map(|g| g.tamil_name().to_string()))
}

fn without_lagna(planets: &[String]) -> Vec<String> {
    planets.iter().filter(|p| *p != LAGNA).cloned().collect()
}

/// Normalize one house. A missing house yields an empty entry so that the
/// array stays aligned with house numbers.
pub fn normalize_house(house_number: u8, raw: Option<&RawHouse>) -> NormalizedHouse {
    let Some(raw) = raw else {
        return NormalizedHouse {
            house_number,
            ..NormalizedHouse::default()
        };
    };
    NormalizedHouse {
        house_number,
        sign: sign_english(&raw.sign).to_string(),
        sign_sanskrit: raw.sign.clone(),
        sign_tamil: tamil_for(&raw.sign, raw.sign_tamil.as_deref()),
        lord: raw.lord.clone(),
        lord_tamil: lord_tamil_for(&raw.lord, raw.lord_tamil.as_deref()),
        element: raw.element.clone(),
        element_tamil: raw.element_tamil.clone(),
        nature: raw.nature.clone(),
        nature_tamil: raw.nature_tamil.clone(),
        degrees: raw.degrees,
        planets: without_lagna(&raw.planets),
    }
}

/// Normalize a houses-by-number map into a 12-entry array, house 1 first.
pub fn normalize_houses(houses: &BTreeMap<u8, RawHouse>) -> Vec<NormalizedHouse> {
    (1..=HOUSE_COUNT)
        .map(|n| normalize_house(n, houses.get(&n)))
        .collect()
}

/// House number → bodies in it, `Lagna` excluded. Empty houses are omitted.
pub fn planets_by_house(houses: &BTreeMap<u8, RawHouse>) -> BTreeMap<u8, Vec<String>> {
    houses
        .iter()
        .filter_map(|(&n, h)| {
            let planets = without_lagna(&h.planets);
            (!planets.is_empty()).then_some((n, planets))
        })
        .collect()
}

/// The two shapes a navamsa generator may return, resolved at ingestion.
#[derive(Debug, Clone, PartialEq)]
pub enum NavamsaLayout {
    /// Explicit houses keyed by number.
    ByHouse(BTreeMap<u8, RawHouse>),
    /// Body → sign (or harmonic longitude) pairs.
    BySign(Vec<(String, NavamsaPosition)>),
}

impl NavamsaLayout {
    /// Pick the layout of a raw chart. Explicit houses win when present.
    pub fn from_raw(chart: &RawNavamsaChart) -> Self {
        if chart.houses.is_empty() {
            Self::BySign(
                chart
                    .navamsa_positions
                    .iter()
                    .map(|(body, pos)| (body.clone(), pos.clone()))
                    .collect(),
            )
        } else {
            Self::ByHouse(chart.houses.clone())
        }
    }

    /// Canonical houses-by-number form.
    pub fn into_houses(self) -> BTreeMap<u8, RawHouse> {
        match self {
            Self::ByHouse(houses) => houses,
            Self::BySign(entries) => houses_from_sign_map(&entries),
        }
    }
}

/// Rashi of a navamsa position: a sign name in either language, or a
/// longitude falling in that sign.
pub fn navamsa_rashi(position: &NavamsaPosition) -> Option<Rashi> {
    match position {
        NavamsaPosition::Sign(name) => Rashi::from_name(name),
        NavamsaPosition::Longitude(lon) if lon.is_finite() => Some(rashi_from_longitude(*lon).rashi),
        NavamsaPosition::Longitude(_) => None,
    }
}

/// Bucket body → sign pairs into houses by zodiac ordinal (Mesha = 1).
///
/// Ascendant markers and unresolvable signs are skipped. All 12 houses
/// are filled with their sign and lord.
pub fn houses_from_sign_map(entries: &[(String, NavamsaPosition)]) -> BTreeMap<u8, RawHouse> {
    let mut houses: BTreeMap<u8, RawHouse> = jataka_base::ALL_RASHIS
        .iter()
        .map(|&r| {
            let lord = rashi_lord(r);
            let house = RawHouse {
                sign: r.name().to_string(),
                lord: lord.english_name().to_string(),
                sign_number: Some(r.ordinal()),
                ..RawHouse::default()
            };
            (r.ordinal(), house)
        })
        .collect();

    for (body, position) in entries {
        if ASCENDANT_MARKERS.contains(&body.as_str()) {
            continue;
        }
        match navamsa_rashi(position) {
            Some(r) => {
                if let Some(house) = houses.get_mut(&r.ordinal()) {
                    house.planets.push(body.clone());
                }
            }
            None => debug!(body = %body, ?position, "skipping unresolvable navamsa position"),
        }
    }
    houses
}

/// Normalize a navamsa layout into the same 12-entry array as the Rasi chart.
pub fn normalize_navamsa(layout: NavamsaLayout) -> Vec<NormalizedHouse> {
    normalize_houses(&layout.into_houses())
}

/// One body ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPlanet {
    /// English sign name.
    pub sign: String,
    pub sign_sanskrit: String,
    pub sign_tamil: String,
    pub name_tamil: Option<String>,
    pub house: Option<u8>,
    /// Degrees inside the sign.
    pub degree: f64,
    pub degree_formatted: String,
    /// Full sidereal longitude.
    pub longitude: f64,
    pub nakshatra: String,
    pub nakshatra_tamil: Option<String>,
    pub nakshatra_lord: String,
    pub nakshatra_lord_tamil: Option<String>,
    pub dignity: Dignity,
    pub is_retrograde: bool,
}

/// Normalize one body. Returns `None` when neither the generator nor the
/// ephemeris supplies a longitude.
pub fn normalize_planet(
    name: &str,
    raw: &RawPlanet,
    position: Option<&BodyPosition>,
    style: DmsStyle,
) -> Option<NormalizedPlanet> {
    let longitude = raw.full_degree.or(position.map(|p| p.longitude))?;
    let degree = raw.norm_degree.unwrap_or(longitude % RASHI_SPAN);
    let name_tamil = raw
        .tamil_name
        .clone()
        .or_else(|| Graha::from_name(name).map(|g| g.tamil_name().to_string()));
    Some(NormalizedPlanet {
        sign: sign_english(&raw.sign).to_string(),
        sign_sanskrit: raw.sign.clone(),
        sign_tamil: tamil_for(&raw.sign, raw.sign_tamil.as_deref()),
        name_tamil,
        house: raw.house,
        degree,
        degree_formatted: format_dms_with(degree, style),
        longitude,
        nakshatra: raw.nakshatra.clone().unwrap_or_default(),
        nakshatra_tamil: raw.nakshatra_tamil.clone(),
        nakshatra_lord: raw.nakshatra_lord.clone().unwrap_or_default(),
        nakshatra_lord_tamil: raw.nakshatra_lord_tamil.clone(),
        dignity: raw.dignity.clone().unwrap_or_default(),
        is_retrograde: raw.is_retrograde.unwrap_or(false),
    })
}

/// Normalize every body the generator placed, skipping those without any
/// longitude.
pub fn normalize_planets(
    planets: &BTreeMap<String, RawPlanet>,
    positions: &BTreeMap<String, BodyPosition>,
    style: DmsStyle,
) -> BTreeMap<String, NormalizedPlanet> {
    planets
        .iter()
        .filter_map(|(name, raw)| {
            let normalized = normalize_planet(name, raw, positions.get(name), style);
            if normalized.is_none() {
                debug!(body = %name, "skipping body without longitude");
            }
            normalized.map(|p| (name.clone(), p))
        })
        .collect()
}
