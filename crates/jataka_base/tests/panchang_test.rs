//! Integration tests for panchang classification.

use chrono::NaiveDate;
use jataka_base::{
    Paksha, karana_from_elongation, karana_name, panchangam, tithi_from_elongation,
    yoga_from_longitudes,
};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 13).unwrap()
}

#[test]
fn idempotent_for_identical_inputs() {
    let a = panchangam(247.3, 101.9, date(), "Pushya");
    let b = panchangam(247.3, 101.9, date(), "Pushya");
    assert_eq!(a, b);
}

#[test]
fn tithi_sweep_thirty_segments() {
    for i in 0..30u8 {
        let t = tithi_from_elongation(i as f64 * 12.0 + 6.0);
        assert_eq!(t.index, i);
        let expected = if i < 15 { Paksha::Shukla } else { Paksha::Krishna };
        assert_eq!(t.paksha, expected);
    }
}

#[test]
fn moon_behind_sun_wraps_elongation() {
    // 10 - 350 = -340 → 20 deg → second tithi
    let p = panchangam(350.0, 10.0, date(), "Ashwini");
    assert_eq!(p.tithi, "Shukla Paksha Dwitiya");
}

#[test]
fn karana_sweep_covers_sixty_positions() {
    let mut counts = std::collections::HashMap::new();
    for k in 0..60u8 {
        let info = karana_from_elongation(k as f64 * 6.0 + 3.0);
        assert_eq!(info.sequence, k + 1);
        *counts.entry(info.name).or_insert(0) += 1;
    }
    for fixed in ["Kimstughna", "Shakuni", "Chatushpada", "Naga"] {
        assert_eq!(counts[fixed], 1, "{fixed}");
    }
    for movable in ["Bava", "Balava", "Kaulava", "Taitila", "Gara", "Vanija", "Vishti"] {
        assert_eq!(counts[movable], 8, "{movable}");
    }
}

#[test]
fn karana_thirtieth_is_bava() {
    assert_eq!(karana_name(30), "Bava");
}

#[test]
fn yoga_sweep_in_bounds() {
    let mut sun = 0.0;
    while sun < 360.0 {
        let y = yoga_from_longitudes(sun, 359.99);
        assert!(y.index <= 26);
        sun += 3.7;
    }
}
