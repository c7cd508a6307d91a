//! Rashi (zodiac sign) tables and sign-name translation.
//!
//! The ecliptic is divided into 12 signs of 30 degrees starting from Mesha
//! (Aries) at 0 deg. Each sign carries three display forms: the Sanskrit
//! name used by chart generators, the English name, and the Tamil name.

use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrishchika => "Vrishchika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrishchika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Tamil name of the rashi.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Mesha => "மேஷம்",
            Self::Vrishabha => "ரிஷபம்",
            Self::Mithuna => "மிதுனம்",
            Self::Karka => "கடகம்",
            Self::Simha => "சிம்மம்",
            Self::Kanya => "கன்னி",
            Self::Tula => "துலாம்",
            Self::Vrishchika => "விருச்சிகம்",
            Self::Dhanu => "தனுசு",
            Self::Makara => "மகரம்",
            Self::Kumbha => "கும்பம்",
            Self::Meena => "மீனம்",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrishchika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based position in the zodiac (Mesha=1 .. Meena=12).
    pub const fn ordinal(self) -> u8 {
        self.index() + 1
    }

    /// Rashi at a 1-based zodiac position.
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        ordinal
            .checked_sub(1)
            .and_then(|i| ALL_RASHIS.get(i as usize).copied())
    }

    /// Look up a rashi by Sanskrit or English name.
    ///
    /// Accepts the `Vrischika` spelling some generators emit.
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "Vrischika" {
            return Some(Self::Vrishchika);
        }
        ALL_RASHIS
            .iter()
            .copied()
            .find(|r| r.name() == name || r.western_name() == name)
    }
}

/// Rashi position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// The rashi (zodiac sign).
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Decimal degrees within the rashi [0.0, 30.0).
    pub degrees_in_rashi: f64,
}

/// Determine rashi from sidereal ecliptic longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp to 11 in case of floating point edge (exactly 360.0)
    let rashi_idx = ((lon / RASHI_SPAN).floor() as u8).min(11);
    RashiInfo {
        rashi: ALL_RASHIS[rashi_idx as usize],
        rashi_index: rashi_idx,
        degrees_in_rashi: lon - (rashi_idx as f64) * RASHI_SPAN,
    }
}

/// English name for a sign given in any supported spelling.
///
/// Unknown names come back unchanged.
pub fn sign_english(name: &str) -> &str {
    match Rashi::from_name(name) {
        Some(r) => r.western_name(),
        None => name,
    }
}

/// Tamil name for a sign given in any supported spelling.
///
/// Unknown names come back unchanged.
pub fn sign_tamil(name: &str) -> &str {
    match Rashi::from_name(name) {
        Some(r) => r.tamil_name(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_and_ordinals_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(r.ordinal() as usize, i + 1);
            assert_eq!(Rashi::from_ordinal(r.ordinal()), Some(*r));
        }
        assert_eq!(Rashi::from_ordinal(0), None);
        assert_eq!(Rashi::from_ordinal(13), None);
    }

    #[test]
    fn lookup_by_either_language() {
        assert_eq!(Rashi::from_name("Karka"), Some(Rashi::Karka));
        assert_eq!(Rashi::from_name("Cancer"), Some(Rashi::Karka));
        assert_eq!(Rashi::from_name("Vrischika"), Some(Rashi::Vrishchika));
        assert_eq!(Rashi::from_name("Ophiuchus"), None);
    }

    #[test]
    fn translation_passes_unknown_through() {
        assert_eq!(sign_english("Makara"), "Capricorn");
        assert_eq!(sign_tamil("Makara"), "மகரம்");
        assert_eq!(sign_english("Ophiuchus"), "Ophiuchus");
        assert_eq!(sign_tamil(""), "");
    }

    #[test]
    fn rashi_from_longitude_midpoints() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            let info = rashi_from_longitude(i as f64 * 30.0 + 15.0);
            assert_eq!(info.rashi, *r);
            assert!((info.degrees_in_rashi - 15.0).abs() < 1e-9);
        }
    }

    #[test]
    fn rashi_from_longitude_wraps() {
        let info = rashi_from_longitude(-1.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degrees_in_rashi - 29.0).abs() < 1e-9);
    }
}
