//! Composite of the dasha, gochara and ashtakavarga pillars.

use chrono::NaiveDate;
use dhruv_vedic_base::{AshtakavargaTables, ChartContext, DashaTimeline};
use tracing::debug;

use crate::config::SynthesisConfig;
use crate::error::PredictError;
use crate::pillars::{score_ashtakavarga_pillar, score_dasha_pillar, score_gochara_pillar};
use crate::synthesis_types::{
    PillarAlignment, PillarScore, ProbabilityRating, SynthesisResult, TransitPlacement,
};
use crate::yoga_types::YogaAnalysisResult;

/// Natal data shared by every sampled date.
#[derive(Debug, Clone, Copy)]
pub struct PredictionInputs<'a> {
    pub chart: &'a ChartContext,
    pub dasha: &'a DashaTimeline,
    pub tables: &'a AshtakavargaTables,
    /// Yoga whose activation lords penalize the dasha pillar.
    pub yoga: Option<&'a YogaAnalysisResult>,
}

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

/// Pillar counts against the favorable/unfavorable thresholds.
#[derive(Debug, Clone, Copy)]
struct Tally {
    total: usize,
    favorable: usize,
    unfavorable: usize,
}

fn all_favorable(t: &Tally) -> bool {
    t.total > 0 && t.favorable == t.total
}

fn all_unfavorable(t: &Tally) -> bool {
    t.total > 0 && t.unfavorable == t.total
}

fn two_favorable(t: &Tally) -> bool {
    t.favorable >= 2
}

fn two_unfavorable(t: &Tally) -> bool {
    t.unfavorable >= 2
}

/// First match wins; `Mixed` is the fallback.
const ALIGNMENT_RULES: &[(fn(&Tally) -> bool, PillarAlignment)] = &[
    (all_favorable, PillarAlignment::AllFavorable),
    (all_unfavorable, PillarAlignment::AllUnfavorable),
    (two_favorable, PillarAlignment::TwoFavorable),
    (two_unfavorable, PillarAlignment::TwoUnfavorable),
];

/// Alignment of normalized pillar scores.
///
/// Favorable is `>= favorable_threshold`, unfavorable is `< unfavorable_threshold`.
pub fn pillar_alignment(
    pillars: &[PillarScore],
    favorable_threshold: f64,
    unfavorable_threshold: f64,
) -> PillarAlignment {
    let tally = Tally {
        total: pillars.len(),
        favorable: pillars
            .iter()
            .filter(|p| p.normalized >= favorable_threshold)
            .count(),
        unfavorable: pillars
            .iter()
            .filter(|p| p.normalized < unfavorable_threshold)
            .count(),
    };
    ALIGNMENT_RULES
        .iter()
        .find(|(rule, _)| rule(&tally))
        .map_or(PillarAlignment::Mixed, |&(_, alignment)| alignment)
}

// ---------------------------------------------------------------------------
// Composite
// ---------------------------------------------------------------------------

/// Weighted mean of normalized pillar scores.
///
/// Weights are looked up by pillar, so the order of `pillars` does not matter.
pub fn synthesize(
    pillars: Vec<PillarScore>,
    cfg: &SynthesisConfig,
) -> Result<SynthesisResult, PredictError> {
    let weights = cfg.effective_weights();
    weights.validate()?;
    let total_weight: f64 = pillars.iter().map(|p| weights.weight(p.pillar)).sum();
    if total_weight <= 0.0 {
        return Err(PredictError::config(
            "no positive weight among the supplied pillars",
        ));
    }
    let composite = (pillars
        .iter()
        .map(|p| weights.weight(p.pillar) * p.normalized)
        .sum::<f64>()
        / total_weight)
        .clamp(0.0, 100.0);

    let alignment = pillar_alignment(&pillars, cfg.favorable_threshold, cfg.unfavorable_threshold);
    let obstructed = pillars.iter().any(|p| p.obstructed);
    Ok(SynthesisResult {
        composite,
        rating: ProbabilityRating::from_score(composite),
        alignment,
        obstructed,
        pillars,
    })
}

/// Score all three pillars for one date and combine them.
pub fn evaluate_date(
    inputs: &PredictionInputs<'_>,
    date: NaiveDate,
    transits: &[TransitPlacement],
    cfg: &SynthesisConfig,
) -> Result<SynthesisResult, PredictError> {
    let lords = inputs.dasha.lords_at(date);
    let dasha = score_dasha_pillar(inputs.chart, &lords, inputs.yoga);
    let gochara = score_gochara_pillar(inputs.chart, transits)?;
    let bindus = score_ashtakavarga_pillar(transits, inputs.tables)?;

    let result = synthesize(vec![dasha, gochara.score, bindus], cfg)?;
    debug!(
        %date,
        composite = result.composite,
        rating = ?result.rating,
        "synthesis"
    );
    Ok(result)
}
