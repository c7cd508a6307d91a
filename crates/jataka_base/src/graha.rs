//! The nine grahas, their display names, and rashi lordship.
//!
//! Grahas are printed by their English names in every response
//! (`"Sun"`, `"Venus"`, ...), with a Tamil rendering alongside.

use serde::{Serialize, Serializer};

use crate::rashi::{ALL_RASHIS, Rashi};

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional weekday order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Tamil name of the graha.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Surya => "சூரியன்",
            Self::Chandra => "சந்திரன்",
            Self::Mangal => "செவ்வாய்",
            Self::Buddh => "புதன்",
            Self::Guru => "குரு",
            Self::Shukra => "சுக்கிரன்",
            Self::Shani => "சனி",
            Self::Rahu => "ராகு",
            Self::Ketu => "கேது",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Look up a graha by its English or Sanskrit name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_GRAHAS
            .iter()
            .copied()
            .find(|g| g.english_name() == name || g.name() == name)
    }
}

impl Serialize for Graha {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.english_name())
    }
}

/// Get the planetary lord of a rashi.
///
/// - Mesha/Vrishchika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrishchika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Get the lord of a rashi by 0-based index.
///
/// Returns None if index >= 12.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    ALL_RASHIS.get(rashi_index as usize).map(|&r| rashi_lord(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graha_indices_sequential() {
        for (i, g) in ALL_GRAHAS.iter().enumerate() {
            assert_eq!(g.index() as usize, i);
        }
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for g in ALL_GRAHAS {
            assert_eq!(Graha::from_name(g.english_name()), Some(g));
            assert_eq!(Graha::from_name(g.name()), Some(g));
        }
        assert_eq!(Graha::from_name("Pluto"), None);
    }

    #[test]
    fn serializes_as_english_name() {
        let json = serde_json::to_string(&Graha::Shukra).unwrap();
        assert_eq!(json, "\"Venus\"");
    }

    #[test]
    fn rashi_lordship_dual_ruled() {
        assert_eq!(rashi_lord(Rashi::Mesha), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrishchika), Graha::Mangal);
        assert_eq!(rashi_lord(Rashi::Vrishabha), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Tula), Graha::Shukra);
        assert_eq!(rashi_lord(Rashi::Makara), Graha::Shani);
        assert_eq!(rashi_lord(Rashi::Kumbha), Graha::Shani);
    }

    #[test]
    fn rashi_lord_by_index_bounds() {
        assert_eq!(rashi_lord_by_index(4), Some(Graha::Surya));
        assert_eq!(rashi_lord_by_index(11), Some(Graha::Guru));
        assert_eq!(rashi_lord_by_index(12), None);
    }
}
