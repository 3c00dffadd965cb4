use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dhruv_vedic_base::{
    AshtakavargaTables, ChartContext, Graha, NADI_DIVISIONS, amsha_position, compute_subdivision,
    dignity_at, lunar_phase,
};

fn sample_chart() -> ChartContext {
    let birth = chrono::NaiveDate::from_ymd_opt(1990, 5, 17)
        .and_then(|d| d.and_hms_opt(6, 30, 0))
        .unwrap();
    ChartContext::from_longitudes(
        12.3,
        &[
            (Graha::Surya, 32.1, false),
            (Graha::Chandra, 221.7, false),
            (Graha::Mangal, 300.4, false),
            (Graha::Buddh, 48.9, true),
            (Graha::Guru, 95.2, false),
            (Graha::Shukra, 14.8, false),
            (Graha::Shani, 291.0, true),
            (Graha::Rahu, 302.5, true),
            (Graha::Ketu, 122.5, true),
        ],
        birth,
    )
    .unwrap()
}

fn amsha_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("amsha");
    group.bench_function("compute_subdivision_d150", |b| {
        b.iter(|| compute_subdivision(black_box(lon), NADI_DIVISIONS))
    });
    group.bench_function("amsha_position_d150", |b| {
        b.iter(|| amsha_position(black_box(lon), NADI_DIVISIONS))
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let chart = sample_chart();

    let mut group = c.benchmark_group("chart");
    group.bench_function("ashtakavarga_from_chart", |b| {
        b.iter(|| AshtakavargaTables::from_chart(black_box(&chart)))
    });
    group.bench_function("dignity_at", |b| {
        b.iter(|| dignity_at(black_box(Graha::Guru), black_box(95.2)))
    });
    group.bench_function("lunar_phase", |b| {
        b.iter(|| lunar_phase(black_box(32.1), black_box(221.7)))
    });
    group.finish();
}

criterion_group!(benches, amsha_bench, chart_bench);
criterion_main!(benches);
