use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jataka_base::{format_dms, panchangam, vimshottari_dasha};

fn dasha_bench(c: &mut Criterion) {
    let birth = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    c.bench_function("vimshottari_dasha", |b| {
        b.iter(|| vimshottari_dasha(black_box(123.456), birth))
    });
}

fn panchang_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2025, 12, 13).unwrap();
    c.bench_function("panchangam", |b| {
        b.iter(|| panchangam(black_box(247.3), black_box(101.9), date, "Pushya"))
    });
}

fn dms_bench(c: &mut Criterion) {
    c.bench_function("format_dms", |b| b.iter(|| format_dms(black_box(23.4392))));
}

criterion_group!(benches, dasha_bench, panchang_bench, dms_bench);
criterion_main!(benches);
