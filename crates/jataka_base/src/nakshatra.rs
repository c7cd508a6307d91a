//! Nakshatra (lunar mansion) tables for the 27-fold scheme.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, and each nakshatra into 4 padas of 3 deg 20'.
//! Every nakshatra has a Vimshottari lord; the 9 lords repeat three times
//! around the zodiac starting with Ketu at Ashwini.

use crate::dasha::VIMSHOTTARI_SEQUENCE;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

const NAKSHATRA_TAMIL_NAMES: [&str; 27] = [
    "அஸ்வினி",
    "பரணி",
    "கிருத்திகை",
    "ரோஹிணி",
    "மிருகசீரிஷம்",
    "திருவாதிரை",
    "புனர்வசு",
    "பூஷ்யம்",
    "ஆயில்யம்",
    "மகம்",
    "பூர்வ பல்குனி",
    "உத்திர பல்குனி",
    "ஹஸ்தம்",
    "சித்திரை",
    "சுவாதி",
    "விசாகம்",
    "அனுராதை",
    "ஜ்யேஷ்டை",
    "மூலம்",
    "பூர்வாஷாடம்",
    "உத்திராஷாடம்",
    "திருவோணம்",
    "தனிஷ்டை",
    "சதயம்",
    "பூரட்டாதி",
    "உத்திரட்டாதி",
    "ரேவதி",
];

impl Nakshatra {
    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Nakshatra at a 0-based index.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_NAKSHATRAS_27.get(index as usize).copied()
    }

    /// Look up a nakshatra by its Sanskrit name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_NAKSHATRAS_27.iter().copied().find(|n| n.name() == name)
    }

    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        NAKSHATRA_NAMES[self.index() as usize]
    }

    /// Tamil name of the nakshatra.
    pub const fn tamil_name(self) -> &'static str {
        NAKSHATRA_TAMIL_NAMES[self.index() as usize]
    }

    /// Vimshottari lord ruling this nakshatra.
    pub const fn vimshottari_lord(self) -> Graha {
        VIMSHOTTARI_SEQUENCE[(self.index() % 9) as usize]
    }
}

/// Nakshatra position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based nakshatra index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada (quarter) 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// 0-based nakshatra index of a reduced sidereal longitude.
///
/// The input must already lie in [0, 360); a floating edge at exactly
/// 360 clamps to Revati.
pub fn nakshatra_index(sidereal_lon_deg: f64) -> u8 {
    ((sidereal_lon_deg / NAKSHATRA_SPAN_27).floor() as u8).min(26)
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = nakshatra_index(lon);
    let degrees_in_nakshatra = lon - (idx as f64) * NAKSHATRA_SPAN_27;
    let pada = ((degrees_in_nakshatra / PADA_SPAN).floor() as u8).min(3) + 1;
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS_27[idx as usize],
        nakshatra_index: idx,
        pada,
        degrees_in_nakshatra,
    }
}
