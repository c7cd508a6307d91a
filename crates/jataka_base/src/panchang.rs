//! Panchangam: the five limbs of the Vedic day.
//!
//! Tithi, yoga and karana are modular partitions of the Sun/Moon angular
//! relationship; vara is the civil weekday. The nakshatra limb comes from
//! the ephemeris provider and is passed in by name.
//!
//! All longitudes are sidereal and must already be reduced to [0, 360).

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::PanchangError;
use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::{forward_separation, is_reduced};

/// Moon-Sun elongation covered by one tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Moon-Sun elongation covered by one karana (half-tithi).
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Sun+Moon span covered by one yoga.
pub const YOGA_SEGMENT_DEG: f64 = NAKSHATRA_SPAN_27;

/// Tithi names by 0-based index. Both pakshas share the first 14 names.
pub const TITHI_NAMES: [&str; 30] = [
    "Prathama",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
    "Prathama",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Amavasya",
];

/// The 27 yogas from Vishkambha to Vaidhriti.
pub const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

/// The 7 movable karanas, repeating eight times per lunar month.
pub const MOVABLE_KARANAS: [&str; 7] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Gara", "Vanija", "Vishti",
];

/// Weekday names, Sunday first.
pub const VARA_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, tithis 1-15.
    Shukla,
    /// Waning half, tithis 16-30.
    Krishna,
}

impl Paksha {
    /// Display label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla Paksha",
            Self::Krishna => "Krishna Paksha",
        }
    }
}

/// Tithi classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// 0-based tithi index (0..29).
    pub index: u8,
    /// Paksha containing this tithi.
    pub paksha: Paksha,
    /// Tithi name.
    pub name: &'static str,
}

impl TithiInfo {
    /// `"{paksha} {name}"`, e.g. `"Shukla Paksha Dwitiya"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.paksha.name(), self.name)
    }
}

/// Yoga classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    /// 0-based yoga index (0..26).
    pub index: u8,
    /// Yoga name.
    pub name: &'static str,
}

/// Karana classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    /// 1-based karana position within the lunar month (1..=60).
    pub sequence: u8,
    /// Karana name.
    pub name: &'static str,
}

/// The five panchang limbs, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panchangam {
    pub tithi: String,
    pub nakshatra: String,
    pub yoga: String,
    pub karana: String,
    pub vara: String,
}

/// Tithi from Moon-Sun elongation in [0, 360).
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let index = ((elongation_deg / TITHI_SEGMENT_DEG).floor() as u8).min(29);
    let paksha = if index < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiInfo {
        index,
        paksha,
        name: TITHI_NAMES[index as usize],
    }
}

/// Yoga from the Sun and Moon longitudes.
pub fn yoga_from_longitudes(sun_deg: f64, moon_deg: f64) -> YogaInfo {
    let sum = (moon_deg + sun_deg) % 360.0;
    let index = (sum / YOGA_SEGMENT_DEG).floor() as usize;
    // Unreachable after the modulo, kept as a hard bound on the table.
    match YOGA_NAMES.get(index) {
        Some(&name) => YogaInfo {
            index: index as u8,
            name,
        },
        None => YogaInfo {
            index: 0,
            name: YOGA_NAMES[0],
        },
    }
}

/// Karana name at a 1-based month position.
///
/// Kimstughna opens the month and Shakuni, Chatushpada, Naga close it;
/// the 56 karanas between cycle through the 7 movable ones.
pub fn karana_name(sequence: u8) -> &'static str {
    match sequence {
        1 => "Kimstughna",
        58 => "Shakuni",
        59 => "Chatushpada",
        60 => "Naga",
        k => MOVABLE_KARANAS[(k.saturating_sub(2) % 7) as usize],
    }
}

/// Karana from Moon-Sun elongation in [0, 360).
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let sequence = ((elongation_deg / KARANA_SEGMENT_DEG).floor() as u8).min(59) + 1;
    KaranaInfo {
        sequence,
        name: karana_name(sequence),
    }
}

/// Weekday name of a civil date, Sunday-first.
pub fn vara_from_date(date: NaiveDate) -> &'static str {
    VARA_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Compute the panchang for reduced Sun/Moon longitudes.
///
/// `nakshatra` is the Moon's nakshatra name as reported by the ephemeris
/// provider. Inputs outside [0, 360) are a caller error; use
/// [`try_panchangam`] when they are not known to be reduced.
pub fn panchangam(sun_deg: f64, moon_deg: f64, date: NaiveDate, nakshatra: &str) -> Panchangam {
    let elongation = forward_separation(sun_deg, moon_deg);
    Panchangam {
        tithi: tithi_from_elongation(elongation).label(),
        nakshatra: nakshatra.to_string(),
        yoga: yoga_from_longitudes(sun_deg, moon_deg).name.to_string(),
        karana: karana_from_elongation(elongation).name.to_string(),
        vara: vara_from_date(date).to_string(),
    }
}

/// Like [`panchangam`], rejecting longitudes that are not reduced.
pub fn try_panchangam(
    sun_deg: f64,
    moon_deg: f64,
    date: NaiveDate,
    nakshatra: &str,
) -> Result<Panchangam, PanchangError> {
    for (body, value) in [("Sun", sun_deg), ("Moon", moon_deg)] {
        if !is_reduced(value) {
            return Err(PanchangError::UnreducedLongitude { body, value });
        }
    }
    Ok(panchangam(sun_deg, moon_deg, date, nakshatra))
}
