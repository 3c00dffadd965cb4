//! Integration tests for the three-pillar synthesis and its timeline.

use chrono::{Datelike, NaiveDate};
use dhruv_predict::{
    Pillar, PredictError, PredictionInputs, SynthesisConfig, TimelineConfig, TransitPlacement,
    build_timeline, evaluate_date, score_gochara_pillar,
};
use dhruv_vedic_base::{
    AshtakavargaTables, ChartContext, DashaLevel, DashaPeriod, DashaTimeline, Graha, Rashi,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn natal() -> ChartContext {
    let birth = d(1988, 6, 14).and_hms_opt(3, 5, 0).unwrap();
    ChartContext::from_longitudes(
        10.0,
        &[
            (Graha::Surya, 40.0, false),
            (Graha::Chandra, 15.0, false),
            (Graha::Mangal, 100.0, false),
            (Graha::Buddh, 50.0, false),
            (Graha::Guru, 250.0, false),
            (Graha::Shukra, 330.0, false),
            (Graha::Shani, 200.0, true),
            (Graha::Rahu, 290.0, true),
            (Graha::Ketu, 110.0, true),
        ],
        birth,
    )
    .unwrap()
}

fn dashas() -> DashaTimeline {
    let p = |lord, level, s, e| DashaPeriod::new(lord, level, s, e).unwrap();
    DashaTimeline::new(vec![
        p(Graha::Surya, DashaLevel::Antardasha, d(2024, 1, 1), d(2025, 3, 1)),
        p(Graha::Shukra, DashaLevel::Mahadasha, d(2020, 1, 1), d(2040, 1, 1)),
        p(Graha::Chandra, DashaLevel::Antardasha, d(2025, 3, 1), d(2026, 12, 1)),
    ])
}

fn steady_transits(_: NaiveDate) -> Vec<TransitPlacement> {
    vec![
        TransitPlacement::new(Graha::Shani, Rashi::Mithuna, false),
        TransitPlacement::new(Graha::Guru, Rashi::Simha, false),
        TransitPlacement::new(Graha::Surya, Rashi::Tula, false),
        TransitPlacement::new(Graha::Rahu, Rashi::Meena, true),
    ]
}

fn moving_moon(date: NaiveDate) -> Vec<TransitPlacement> {
    let mut t = steady_transits(date);
    let sign = Rashi::ALL[(date.ordinal0() as usize / 2) % 12];
    t.push(TransitPlacement::new(Graha::Chandra, sign, false));
    t
}

#[test]
fn dasha_boundary_moves_the_composite() {
    let chart = natal();
    let dasha = dashas();
    let tables = AshtakavargaTables::from_chart(&chart).unwrap();
    let inputs = PredictionInputs {
        chart: &chart,
        dasha: &dasha,
        tables: &tables,
        yoga: None,
    };
    let cfg = SynthesisConfig::default();
    let before = evaluate_date(&inputs, d(2025, 2, 28), &steady_transits(d(2025, 2, 28)), &cfg).unwrap();
    let after = evaluate_date(&inputs, d(2025, 3, 1), &steady_transits(d(2025, 3, 1)), &cfg).unwrap();

    // Sun antar: benefic 5th lord in an enemy sign, 70 x 0.75 = 52.5.
    // Moon antar: neutral 4th lord in a neutral sign, 50.
    let db = before.pillar(Pillar::Dasha).unwrap().normalized;
    let da = after.pillar(Pillar::Dasha).unwrap().normalized;
    assert!((db - da - 0.35 * 2.5).abs() < 1e-9, "{db} vs {da}");
    assert_eq!(
        before.pillar(Pillar::Gochara).unwrap().normalized,
        after.pillar(Pillar::Gochara).unwrap().normalized
    );
    assert!(before.composite > after.composite);
}

#[test]
fn timeline_is_chronological_and_parallel_safe() {
    let chart = natal();
    let dasha = dashas();
    let tables = AshtakavargaTables::from_chart(&chart).unwrap();
    let inputs = PredictionInputs {
        chart: &chart,
        dasha: &dasha,
        tables: &tables,
        yoga: None,
    };
    let par = SynthesisConfig::default();
    let seq = SynthesisConfig {
        timeline: TimelineConfig {
            parallel: false,
            ..TimelineConfig::default()
        },
        ..SynthesisConfig::default()
    };

    let a = build_timeline(&inputs, &moving_moon, d(2025, 1, 1), d(2025, 3, 31), &par).unwrap();
    let b = build_timeline(&inputs, &moving_moon, d(2025, 1, 1), d(2025, 3, 31), &seq).unwrap();
    assert_eq!(a.len(), 90);
    assert_eq!(a.score_series(), b.score_series());
    assert_eq!(a.peaks, b.peaks);
    assert!(a.samples.windows(2).all(|w| w[0].date < w[1].date));
    assert!(a.score_series().iter().all(|&(_, s)| (0.0..=100.0).contains(&s)));

    let best = a.best.unwrap();
    let worst = a.worst.unwrap();
    assert!(best.score >= a.mean && a.mean >= worst.score);
    for p in &a.peaks {
        assert!(p.score >= 70.0);
    }
    for r in &a.risks {
        assert!(r.score <= 40.0);
    }
}

#[test]
fn weekly_step() {
    let chart = natal();
    let dasha = dashas();
    let tables = AshtakavargaTables::from_chart(&chart).unwrap();
    let inputs = PredictionInputs {
        chart: &chart,
        dasha: &dasha,
        tables: &tables,
        yoga: None,
    };
    let cfg = SynthesisConfig {
        timeline: TimelineConfig {
            step_days: 7,
            ..TimelineConfig::default()
        },
        ..SynthesisConfig::default()
    };
    let t = build_timeline(&inputs, &steady_transits, d(2025, 1, 1), d(2025, 1, 29), &cfg).unwrap();
    let dates: Vec<_> = t.score_series().into_iter().map(|(d, _)| d).collect();
    assert_eq!(dates, vec![d(2025, 1, 1), d(2025, 1, 8), d(2025, 1, 15), d(2025, 1, 22), d(2025, 1, 29)]);
    // Constant inputs give a flat series: no strict extrema.
    assert!(t.peaks.is_empty() && t.risks.is_empty());
}

#[test]
fn inverted_range_rejected() {
    let chart = natal();
    let dasha = dashas();
    let tables = AshtakavargaTables::from_chart(&chart).unwrap();
    let inputs = PredictionInputs {
        chart: &chart,
        dasha: &dasha,
        tables: &tables,
        yoga: None,
    };
    let r = build_timeline(&inputs, &steady_transits, d(2025, 2, 1), d(2025, 1, 1), &SynthesisConfig::default());
    assert!(matches!(r, Err(PredictError::Configuration(_))));
}

#[test]
fn vedha_marks_synthesis_obstructed() {
    let chart = natal();
    // Natal Moon in Mesha: Jupiter in Simha is 5th, Mars in Karka sits on its vedha (4th).
    let transits = [
        TransitPlacement::new(Graha::Guru, Rashi::Simha, false),
        TransitPlacement::new(Graha::Mangal, Rashi::Karka, false),
    ];
    let g = score_gochara_pillar(&chart, &transits).unwrap();
    assert!(g.score.obstructed);
    assert_eq!(g.readings[0].vedha_by, Some(Graha::Mangal));

    let dasha = dashas();
    let tables = AshtakavargaTables::from_chart(&chart).unwrap();
    let inputs = PredictionInputs {
        chart: &chart,
        dasha: &dasha,
        tables: &tables,
        yoga: None,
    };
    let r = evaluate_date(&inputs, d(2025, 6, 1), &transits, &SynthesisConfig::default()).unwrap();
    assert!(r.obstructed);
}

#[test]
fn missing_natal_moon_fails_fast() {
    let birth = d(1988, 6, 14).and_hms_opt(3, 5, 0).unwrap();
    let chart = ChartContext::from_longitudes(10.0, &[(Graha::Surya, 40.0, false)], birth).unwrap();
    let dasha = DashaTimeline::default();
    let tables = AshtakavargaTables::from_bav([[4; 12]; 7]);
    let inputs = PredictionInputs {
        chart: &chart,
        dasha: &dasha,
        tables: &tables,
        yoga: None,
    };
    let r = build_timeline(&inputs, &steady_transits, d(2025, 1, 1), d(2025, 1, 3), &SynthesisConfig::default());
    assert!(matches!(
        r,
        Err(PredictError::MissingInput {
            body: Graha::Chandra,
            ..
        })
    ));
}
