//! Integration tests for the Vimshottari sequence generator.

use chrono::{DateTime, TimeZone, Utc};
use jataka_base::{
    DashaReport, Graha, NAKSHATRA_SPAN_27, SEQUENCE_LEN, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_YEARS,
    vimshottari_dasha,
};

fn birth() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1990, 6, 15, 4, 30, 0).unwrap()
}

/// Every nakshatra selects lord `index % 9` and yields a contiguous 9-period run.
#[test]
fn every_nakshatra_selects_its_lord() {
    for idx in 0..27u8 {
        let lon = idx as f64 * NAKSHATRA_SPAN_27 + NAKSHATRA_SPAN_27 / 2.0;
        let d = vimshottari_dasha(lon, birth()).unwrap();
        assert_eq!(d.nakshatra_index, idx, "index at {lon}");
        assert_eq!(d.current_lord, VIMSHOTTARI_SEQUENCE[(idx % 9) as usize]);
        assert_eq!(d.sequence.len(), SEQUENCE_LEN);
        assert!((d.percentage_in_nakshatra - 50.0).abs() < 1e-6);
    }
}

#[test]
fn lords_follow_the_cycle_from_any_start() {
    let d = vimshottari_dasha(200.0, birth()).unwrap();
    let start = VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&g| g == d.current_lord)
        .unwrap();
    for (i, p) in d.sequence.iter().enumerate() {
        assert_eq!(p.lord, VIMSHOTTARI_SEQUENCE[(start + i) % 9]);
        if i > 0 {
            assert_eq!(p.duration, VIMSHOTTARI_YEARS[(start + i) % 9]);
        }
    }
}

#[test]
fn contiguity_across_sweep() {
    let mut lon = 0.0;
    while lon < 360.0 {
        let d = vimshottari_dasha(lon, birth()).unwrap();
        for pair in d.sequence.windows(2) {
            assert_eq!(pair[0].end_date, pair[1].start_date, "dates at {lon}");
            assert_eq!(pair[0].end_year, pair[1].start_year, "years at {lon}");
        }
        lon += 7.3;
    }
}

/// The run always reaches at least 81 years past birth.
#[test]
fn coverage_exceeds_eighty_one_years() {
    let mut lon = 0.0;
    while lon < 360.0 {
        let d = vimshottari_dasha(lon, birth()).unwrap();
        let last = d.sequence.last().unwrap();
        assert!(last.end_year >= 81.0, "end year {} at {lon}", last.end_year);
        lon += 1.1;
    }
}

#[test]
fn end_of_nakshatra_leaves_tiny_balance() {
    let d = vimshottari_dasha(NAKSHATRA_SPAN_27 - 0.0001, birth()).unwrap();
    assert_eq!(d.current_lord, Graha::Ketu);
    assert!(d.remaining_years_in_current_dasha < 0.001);
    assert_eq!(d.sequence[1].lord, Graha::Shukra);
}

#[test]
fn report_serializes_camel_case() {
    let report = DashaReport::from_result(vimshottari_dasha(15.0, birth()));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["system"], "Vimshottari");
    assert_eq!(json["currentLord"], "Venus");
    assert_eq!(json["currentNakshatra"], "Bharani");
    assert_eq!(json["nakshatraIndex"], 1);
    let first = &json["sequence"][0];
    assert_eq!(first["lord"], "Venus");
    assert_eq!(first["isActive"], true);
    assert_eq!(first["startDate"], "1990-06-15T04:30:00Z");
}

#[test]
fn out_of_range_moon_is_reported_not_raised() {
    let report = DashaReport::from_result(vimshottari_dasha(360.0, birth()));
    assert!(report.error().is_some());
    assert!(report.sequence().is_empty());
}
