//! Fine-amsha (nadi) rectification candidates.
//!
//! The ascendant crosses one D-150 part in well under a minute of clock time,
//! so a recorded birth time rarely pins the nadi down. Candidates step the
//! ascendant a few parts either way, convert each step to a clock shift with
//! a mean ascendant rate, and rank them by distance from the recorded time.

use chrono::{Duration, NaiveDateTime};
use dhruv_vedic_base::{
    ChartContext, Rashi, amsha_position, degree_in_rashi, directed_index, resulting_amsha_sign,
    subdivision_width,
};
use tracing::debug;

use crate::config::RectifierConfig;
use crate::error::PredictError;
use crate::rectify_types::{BodyAmsha, FineAmshaAnalysis, PrecisionWarning, RectificationCandidate};

/// Candidates around the part holding `base_longitude`.
///
/// Offsets run over `-window..=window` excluding 0. The forward part number is
/// extrapolated linearly inside the sign, so candidates that would leave the
/// sign are dropped rather than wrapped, as are candidates whose adjusted time
/// falls outside the representable calendar. Ordered by confidence, highest
/// first; the earlier offset wins a tie.
pub fn generate_candidates(
    base_longitude: f64,
    base_time: NaiveDateTime,
    cfg: &RectifierConfig,
) -> Result<Vec<RectificationCandidate>, PredictError> {
    cfg.validate()?;
    let width = subdivision_width(cfg.divisions)?;
    let rashi = Rashi::from_longitude(base_longitude);
    let raw = ((degree_in_rashi(base_longitude) / width).floor() as i64 + 1).min(cfg.divisions as i64);
    let minutes_per_part = width / cfg.ascendant_rate_deg_per_min;
    let window = cfg.window as i32;

    let mut candidates: Vec<RectificationCandidate> = (-window..=window)
        .filter(|&offset| offset != 0)
        .filter_map(|offset| {
            let index = directed_index(rashi, raw + offset as i64, cfg.divisions)?;
            let seconds = offset as f64 * minutes_per_part * 60.0;
            // A very slow rate can push the shift past the calendar range.
            let shift = Duration::try_milliseconds((seconds * 1000.0).round() as i64)?;
            let adjusted_time = base_time.checked_add_signed(shift)?;
            Some(RectificationCandidate {
                offset,
                time_offset_seconds: seconds,
                adjusted_time,
                index,
                amsha_rashi: resulting_amsha_sign(rashi, index),
                confidence: 100 - offset.unsigned_abs() as u8 * cfg.confidence_decay,
            })
        })
        .collect();
    candidates.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    Ok(candidates)
}

/// Fine amsha of the ascendant and every chart body, with candidates and precision warnings.
pub fn analyze_fine_amsha(
    chart: &ChartContext,
    uncertainty_minutes: f64,
    cfg: &RectifierConfig,
) -> Result<FineAmshaAnalysis, PredictError> {
    if !uncertainty_minutes.is_finite() || uncertainty_minutes < 0.0 {
        return Err(PredictError::config(format!(
            "birth-time uncertainty must be a non-negative number of minutes, got {uncertainty_minutes}"
        )));
    }
    let candidates = generate_candidates(chart.ascendant_longitude(), chart.birth(), cfg)?;
    let ascendant = amsha_position(chart.ascendant_longitude(), cfg.divisions)?;
    let bodies = chart
        .positions()
        .iter()
        .map(|p| {
            Ok(BodyAmsha {
                graha: p.graha,
                position: amsha_position(p.longitude, cfg.divisions)?,
            })
        })
        .collect::<Result<Vec<_>, PredictError>>()?;

    let width = subdivision_width(cfg.divisions)?;
    let seconds_per_subdivision = width / cfg.ascendant_rate_deg_per_min * 60.0;

    let mut warnings = Vec::new();
    let subdivisions = uncertainty_minutes * cfg.ascendant_rate_deg_per_min / width;
    if subdivisions > cfg.max_subdivisions_in_uncertainty {
        warnings.push(PrecisionWarning::UncertaintyExceedsResolution {
            uncertainty_minutes,
            subdivisions,
        });
    }
    let progress = ascendant.progress;
    if progress < cfg.boundary_fraction || progress > 1.0 - cfg.boundary_fraction {
        warnings.push(PrecisionWarning::NearBoundary { progress });
    }

    debug!(
        index = ascendant.index,
        rashi = %ascendant.source_rashi,
        candidates = candidates.len(),
        warnings = warnings.len(),
        "fine amsha analysis"
    );

    Ok(FineAmshaAnalysis {
        divisions: cfg.divisions,
        ascendant,
        bodies,
        candidates,
        seconds_per_subdivision,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use dhruv_vedic_base::Graha;

    fn t0() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1990, 7, 12)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap()
    }

    #[test]
    fn candidates_step_both_ways() {
        let c = generate_candidates(2.5, t0(), &RectifierConfig::default()).unwrap();
        assert_eq!(c.len(), 10);
        assert_eq!(c[0].offset, -1);
        assert_eq!(c[0].index, 12);
        assert_eq!(c[1].offset, 1);
        assert_eq!(c[1].index, 14);
        assert_eq!(c[0].confidence, 88);
        // 0.2 deg at 0.25 deg/min = 48 s
        assert!((c[1].time_offset_seconds - 48.0).abs() < 1e-9);
        assert_eq!(c[1].adjusted_time, t0() + Duration::seconds(48));
        assert!((c[0].time_offset_minutes() + 0.8).abs() < 1e-9);
    }

    #[test]
    fn even_sign_reverses_candidate_index() {
        let c = generate_candidates(32.5, t0(), &RectifierConfig::default()).unwrap();
        let plus_one = c.iter().find(|c| c.offset == 1).unwrap();
        assert_eq!(plus_one.index, 137);
        let minus_one = c.iter().find(|c| c.offset == -1).unwrap();
        assert_eq!(minus_one.index, 139);
    }

    #[test]
    fn edge_of_sign_drops_out_of_range() {
        let c = generate_candidates(0.1, t0(), &RectifierConfig::default()).unwrap();
        assert_eq!(c.len(), 5);
        assert!(c.iter().all(|c| c.offset > 0));
    }

    #[test]
    fn confidence_ordering() {
        let c = generate_candidates(15.05, t0(), &RectifierConfig::default()).unwrap();
        assert!(c.windows(2).all(|w| w[0].confidence >= w[1].confidence));
        assert_eq!(c.last().map(|c| c.confidence), Some(40));
    }

    #[test]
    fn invalid_config_rejected() {
        let cfg = RectifierConfig {
            ascendant_rate_deg_per_min: 0.0,
            ..RectifierConfig::default()
        };
        assert!(matches!(
            generate_candidates(2.5, t0(), &cfg),
            Err(PredictError::Configuration(_))
        ));
    }

    #[test]
    fn analysis_covers_chart() {
        let chart = ChartContext::from_longitudes(
            2.5,
            &[(Graha::Surya, 100.0, false), (Graha::Chandra, 225.0, false)],
            t0(),
        )
        .unwrap();
        let a = analyze_fine_amsha(&chart, 2.0, &RectifierConfig::default()).unwrap();
        assert_eq!(a.ascendant.index, 13);
        assert_eq!(a.bodies.len(), 2);
        assert!(a.body(Graha::Chandra).is_some());
        assert!((a.seconds_per_subdivision - 48.0).abs() < 1e-9);
        // 2 min x 0.25 / 0.2 = 2.5 parts; 2.5 deg lies mid-part.
        assert!(a.is_precise(), "{:?}", a.warnings);
    }

    #[test]
    fn wide_uncertainty_and_edge_warn() {
        let chart = ChartContext::from_longitudes(2.41, &[], t0()).unwrap();
        let a = analyze_fine_amsha(&chart, 10.0, &RectifierConfig::default()).unwrap();
        assert_eq!(a.warnings.len(), 2);
        assert!(matches!(
            a.warnings[0],
            PrecisionWarning::UncertaintyExceedsResolution { .. }
        ));
        assert!(matches!(a.warnings[1], PrecisionWarning::NearBoundary { .. }));
    }

    #[test]
    fn unrepresentable_shift_dropped() {
        // 0.2 deg at 1e-12 deg/min is about 380,000 years per part.
        let cfg = RectifierConfig {
            ascendant_rate_deg_per_min: 1e-12,
            ..RectifierConfig::default()
        };
        let c = generate_candidates(15.1, t0(), &cfg).unwrap();
        assert!(c.is_empty(), "{c:?}");

        // About 380 years per part still fits.
        let cfg = RectifierConfig {
            ascendant_rate_deg_per_min: 1e-9,
            ..RectifierConfig::default()
        };
        assert_eq!(generate_candidates(15.1, t0(), &cfg).unwrap().len(), 10);
    }

    #[test]
    fn negative_uncertainty_rejected() {
        let chart = ChartContext::from_longitudes(2.5, &[], t0()).unwrap();
        assert!(analyze_fine_amsha(&chart, -1.0, &RectifierConfig::default()).is_err());
    }
}
