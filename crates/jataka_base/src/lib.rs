//! Pure derivation math and constant tables for birth charts.
//!
//! This crate provides:
//! - Rashi, nakshatra and graha tables with Sanskrit, English and Tamil names
//! - Degree-minute-second display formatting
//! - Panchangam (tithi, yoga, karana, vara) from Sun/Moon longitudes
//! - Vimshottari dasha sequence generation from the Moon's longitude
//!
//! Everything here is a pure function over its inputs. Longitudes are
//! sidereal degrees already reduced to [0, 360).

pub mod dasha;
pub mod dms;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod util;

pub use dasha::{
    DAYS_PER_YEAR, DashaFailure, DashaPeriod, DashaReport, SEQUENCE_LEN, VIMSHOTTARI,
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_YEARS, VimshottariDasha, vimshottari_dasha,
    vimshottari_years,
};
pub use dms::{Dms, DmsStyle, deg_to_dms, format_dms, format_dms_with};
pub use error::{DashaError, PanchangError};
pub use graha::{ALL_GRAHAS, Graha, rashi_lord, rashi_lord_by_index};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_index,
};
pub use panchang::{
    KaranaInfo, Panchangam, Paksha, TithiInfo, YogaInfo, karana_from_elongation, karana_name,
    panchangam, tithi_from_elongation, try_panchangam, vara_from_date, yoga_from_longitudes,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, RashiInfo, rashi_from_longitude, sign_english, sign_tamil};
pub use util::{forward_separation, is_reduced, normalize_360};
