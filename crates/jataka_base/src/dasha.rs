//! Vimshottari dasha (120-year planetary period) sequence.
//!
//! The Moon's nakshatra at birth selects the first lord; the portion of
//! the nakshatra the Moon has already crossed is the elapsed share of that
//! lord's period. The sequence then continues through the fixed 9-lord
//! cycle with full-length periods.
//!
//! Years convert to calendar time with a fixed 365.25-day year; no
//! calendar leap pattern is applied.

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::error::DashaError;
use crate::graha::Graha;
use crate::nakshatra::{ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, nakshatra_index};
use crate::util::is_reduced;

/// Year length for dasha period calculations.
pub const DAYS_PER_YEAR: f64 = 365.25;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Name reported for the system in every dasha result.
pub const VIMSHOTTARI: &str = "Vimshottari";

/// Number of periods emitted: the running period plus 8 full ones.
pub const SEQUENCE_LEN: usize = 9;

/// Vimshottari lord order: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Vimshottari periods in years, aligned with [`VIMSHOTTARI_SEQUENCE`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Full period of a graha in the Vimshottari cycle, in years.
pub fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&g| g == graha)
        .map_or(0.0, |i| VIMSHOTTARI_YEARS[i])
}

/// One mahadasha period.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaPeriod {
    /// Ruling graha.
    pub lord: Graha,
    /// Offset from birth, in years, where the period starts.
    pub start_year: f64,
    /// Offset from birth, in years, where the period ends.
    pub end_year: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Length in years. The running period at birth holds only its remainder.
    pub duration: f64,
    /// True for the period running at birth.
    pub is_active: bool,
    /// Years of this period already spent before birth.
    pub elapsed_years: f64,
}

impl DashaPeriod {
    /// Whether `instant` falls inside `[start_date, end_date)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start_date <= instant && instant < self.end_date
    }
}

/// Vimshottari dasha for a birth moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VimshottariDasha {
    pub system: &'static str,
    pub current_lord: Graha,
    pub current_nakshatra: &'static str,
    pub current_nakshatra_tamil: &'static str,
    pub moon_longitude: f64,
    /// 0-based nakshatra index (0 = Ashwini).
    pub nakshatra_index: u8,
    pub degree_in_nakshatra: f64,
    /// Share of the nakshatra crossed, as a percentage (0..100).
    pub percentage_in_nakshatra: f64,
    pub years_elapsed_in_current_dasha: f64,
    pub remaining_years_in_current_dasha: f64,
    pub sequence: Vec<DashaPeriod>,
}

impl VimshottariDasha {
    /// The period running at `instant`, if the sequence covers it.
    pub fn active_period_at(&self, instant: DateTime<Utc>) -> Option<&DashaPeriod> {
        self.sequence.iter().find(|p| p.contains(instant))
    }
}

fn advance(from: DateTime<Utc>, years: f64) -> Result<DateTime<Utc>, DashaError> {
    let millis = (years * DAYS_PER_YEAR * MILLIS_PER_DAY).round() as i64;
    TimeDelta::try_milliseconds(millis)
        .and_then(|delta| from.checked_add_signed(delta))
        .ok_or(DashaError::DateOverflow { years })
}

/// Generate the Vimshottari sequence from the Moon's reduced sidereal
/// longitude and the birth instant.
///
/// The result always holds [`SEQUENCE_LEN`] contiguous periods: each
/// period starts at exactly the previous period's end date and year.
pub fn vimshottari_dasha(
    moon_sidereal_lon: f64,
    birth: DateTime<Utc>,
) -> Result<VimshottariDasha, DashaError> {
    if !is_reduced(moon_sidereal_lon) {
        return Err(DashaError::UnreducedLongitude(moon_sidereal_lon));
    }

    let nak_idx = nakshatra_index(moon_sidereal_lon);
    let degree_in_nakshatra = moon_sidereal_lon % NAKSHATRA_SPAN_27;

    let start_idx = (nak_idx % 9) as usize;
    let starting_lord = VIMSHOTTARI_SEQUENCE[start_idx];
    let total_years = VIMSHOTTARI_YEARS[start_idx];

    let fraction = degree_in_nakshatra / NAKSHATRA_SPAN_27;
    let years_elapsed = total_years * fraction;
    let years_remaining = total_years - years_elapsed;

    let mut sequence = Vec::with_capacity(SEQUENCE_LEN);
    let first_end = advance(birth, years_remaining)?;
    sequence.push(DashaPeriod {
        lord: starting_lord,
        start_year: 0.0,
        end_year: years_remaining,
        start_date: birth,
        end_date: first_end,
        duration: years_remaining,
        is_active: true,
        elapsed_years: years_elapsed,
    });

    let mut cursor = first_end;
    let mut years_so_far = years_remaining;
    for step in 1..SEQUENCE_LEN {
        let seq_idx = (start_idx + step) % 9;
        let duration = VIMSHOTTARI_YEARS[seq_idx];
        let end_year = years_so_far + duration;
        let end = advance(cursor, duration)?;
        sequence.push(DashaPeriod {
            lord: VIMSHOTTARI_SEQUENCE[seq_idx],
            start_year: years_so_far,
            end_year,
            start_date: cursor,
            end_date: end,
            duration,
            is_active: false,
            elapsed_years: 0.0,
        });
        cursor = end;
        years_so_far = end_year;
    }

    let nakshatra = ALL_NAKSHATRAS_27[nak_idx as usize];
    Ok(VimshottariDasha {
        system: VIMSHOTTARI,
        current_lord: starting_lord,
        current_nakshatra: nakshatra.name(),
        current_nakshatra_tamil: nakshatra.tamil_name(),
        moon_longitude: moon_sidereal_lon,
        nakshatra_index: nak_idx,
        degree_in_nakshatra,
        percentage_in_nakshatra: fraction * 100.0,
        years_elapsed_in_current_dasha: years_elapsed,
        remaining_years_in_current_dasha: years_remaining,
        sequence,
    })
}

/// A dasha computation that could not complete.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaFailure {
    pub system: &'static str,
    pub error: String,
    /// Always empty.
    pub sequence: Vec<DashaPeriod>,
}

/// Dasha section of a chart response.
///
/// A failed derivation is carried as data so the rest of the chart can
/// still be assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DashaReport {
    Computed(VimshottariDasha),
    Failed(DashaFailure),
}

impl DashaReport {
    /// Fold a generator result into a report.
    pub fn from_result(result: Result<VimshottariDasha, DashaError>) -> Self {
        match result {
            Ok(dasha) => Self::Computed(dasha),
            Err(e) => Self::Failed(DashaFailure {
                system: VIMSHOTTARI,
                error: e.to_string(),
                sequence: Vec::new(),
            }),
        }
    }

    /// Generated periods; empty on failure.
    pub fn sequence(&self) -> &[DashaPeriod] {
        match self {
            Self::Computed(d) => &d.sequence,
            Self::Failed(f) => &f.sequence,
        }
    }

    /// Failure message, if the derivation failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Computed(_) => None,
            Self::Failed(f) => Some(&f.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn birth() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn cycle_sums_to_120() {
        let total: f64 = VIMSHOTTARI_YEARS.iter().sum();
        assert_eq!(total, 120.0);
    }

    #[test]
    fn years_lookup_by_graha() {
        assert_eq!(vimshottari_years(Graha::Shukra), 20.0);
        assert_eq!(vimshottari_years(Graha::Buddh), 17.0);
    }

    #[test]
    fn bharani_starts_with_venus() {
        let d = vimshottari_dasha(15.0, birth()).unwrap();
        assert_eq!(d.nakshatra_index, 1);
        assert_eq!(d.current_lord, Graha::Shukra);
        assert_eq!(d.current_nakshatra, "Bharani");
        // 1.6667 deg into a 13.3333 deg nakshatra = 1/8 of Venus' 20 years
        assert!((d.percentage_in_nakshatra - 12.5).abs() < 1e-9);
        assert!((d.years_elapsed_in_current_dasha - 2.5).abs() < 1e-9);
        assert!((d.remaining_years_in_current_dasha - 17.5).abs() < 1e-9);
        assert_eq!(d.sequence[1].lord, Graha::Surya);
    }

    #[test]
    fn first_period_is_partial_and_active() {
        let d = vimshottari_dasha(15.0, birth()).unwrap();
        let first = &d.sequence[0];
        assert!(first.is_active);
        assert_eq!(first.start_date, birth());
        assert_eq!(first.start_year, 0.0);
        assert!((first.duration - 17.5).abs() < 1e-9);
        assert!((first.elapsed_years - 2.5).abs() < 1e-9);
        assert!(d.sequence[1..].iter().all(|p| !p.is_active && p.elapsed_years == 0.0));
    }

    #[test]
    fn sequence_is_contiguous() {
        let d = vimshottari_dasha(123.456, birth()).unwrap();
        assert_eq!(d.sequence.len(), SEQUENCE_LEN);
        for pair in d.sequence.windows(2) {
            assert_eq!(pair[0].end_date, pair[1].start_date);
            assert_eq!(pair[0].end_year, pair[1].start_year);
        }
    }

    #[test]
    fn zero_longitude_spans_full_cycle() {
        let d = vimshottari_dasha(0.0, birth()).unwrap();
        assert_eq!(d.current_lord, Graha::Ketu);
        let last = d.sequence.last().unwrap();
        assert!((last.end_year - 120.0).abs() < 1e-9);
        let days = (last.end_date - birth()).num_milliseconds() as f64 / MILLIS_PER_DAY;
        assert!((days - 120.0 * DAYS_PER_YEAR).abs() < 1e-3);
    }

    #[test]
    fn active_period_lookup() {
        let d = vimshottari_dasha(15.0, birth()).unwrap();
        assert_eq!(d.active_period_at(birth()).unwrap().lord, Graha::Shukra);
        let later = d.sequence[3].start_date;
        assert_eq!(d.active_period_at(later).unwrap().lord, d.sequence[3].lord);
        let before = birth() - TimeDelta::days(1);
        assert!(d.active_period_at(before).is_none());
    }

    #[test]
    fn unreduced_moon_degrades_to_failure() {
        let report = DashaReport::from_result(vimshottari_dasha(f64::NAN, birth()));
        assert!(report.sequence().is_empty());
        assert!(report.error().unwrap().contains("not reduced"));
    }

    #[test]
    fn failure_serializes_flat() {
        let report = DashaReport::from_result(Err(DashaError::MissingMoon));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["system"], "Vimshottari");
        assert_eq!(json["error"], "missing position for Moon");
        assert_eq!(json["sequence"].as_array().unwrap().len(), 0);
    }
}
