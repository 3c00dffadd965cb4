//! Sampled composite timeline with peak and risk detection.
//!
//! Every sampled date is recomputed independently from the natal inputs and
//! that date's transits; nothing is interpolated between samples.

use chrono::{Duration, NaiveDate};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::{SynthesisConfig, TimelineConfig};
use crate::error::PredictError;
use crate::synthesis::{PredictionInputs, evaluate_date};
use crate::synthesis_types::{
    SynthesisTimeline, TimelineExtremum, TimelineSample, TimelineWindow, TransitPlacement,
};

/// Transit positions for a date, resident in memory.
pub trait TransitSource: Sync {
    fn transits_on(&self, date: NaiveDate) -> Vec<TransitPlacement>;
}

impl<F> TransitSource for F
where
    F: Fn(NaiveDate) -> Vec<TransitPlacement> + Sync,
{
    fn transits_on(&self, date: NaiveDate) -> Vec<TransitPlacement> {
        self(date)
    }
}

/// Dates from `start` to `end` inclusive, `step_days` apart.
pub fn sample_dates(start: NaiveDate, end: NaiveDate, step_days: u32) -> Vec<NaiveDate> {
    let step = Duration::days(step_days.max(1) as i64);
    std::iter::successors(Some(start), |&d| Some(d + step))
        .take_while(|&d| d <= end)
        .collect()
}

// ---------------------------------------------------------------------------
// Extrema
// ---------------------------------------------------------------------------

fn neighbours(len: usize, i: usize, radius: usize) -> impl Iterator<Item = usize> {
    let lo = i.saturating_sub(radius);
    let hi = (i + radius).min(len.saturating_sub(1));
    (lo..=hi).filter(move |&j| j != i)
}

/// Indices of local maxima at or above `threshold`.
///
/// A sample must be strictly greater than every other sample within `radius`
/// on either side; plateaus produce no peak.
pub fn detect_peaks(scores: &[f64], threshold: f64, radius: usize) -> Vec<usize> {
    (0..scores.len())
        .filter(|&i| {
            scores[i] >= threshold
                && neighbours(scores.len(), i, radius).all(|j| scores[i] > scores[j])
        })
        .collect()
}

/// Indices of local minima at or below `threshold`.
pub fn detect_risks(scores: &[f64], threshold: f64, radius: usize) -> Vec<usize> {
    (0..scores.len())
        .filter(|&i| {
            scores[i] <= threshold
                && neighbours(scores.len(), i, radius).all(|j| scores[i] < scores[j])
        })
        .collect()
}

/// Maximal runs of consecutive samples satisfying `inside`.
fn windows(
    samples: &[TimelineSample],
    inside: impl Fn(f64) -> bool,
    pick: fn(f64, f64) -> f64,
) -> Vec<TimelineWindow> {
    let mut out = Vec::new();
    let mut current: Option<TimelineWindow> = None;
    for s in samples {
        let score = s.result.composite;
        if inside(score) {
            current = Some(match current {
                Some(w) => TimelineWindow {
                    end: s.date,
                    samples: w.samples + 1,
                    extreme: pick(w.extreme, score),
                    ..w
                },
                None => TimelineWindow {
                    start: s.date,
                    end: s.date,
                    samples: 1,
                    extreme: score,
                },
            });
        } else if let Some(w) = current.take() {
            out.push(w);
        }
    }
    out.extend(current);
    out
}

fn extremum(samples: &[TimelineSample], index: usize) -> TimelineExtremum {
    TimelineExtremum {
        index,
        date: samples[index].date,
        score: samples[index].result.composite,
    }
}

/// Peaks, risks, windows and summary statistics over evaluated samples.
pub fn summarize(samples: Vec<TimelineSample>, cfg: &TimelineConfig) -> SynthesisTimeline {
    let scores: Vec<f64> = samples.iter().map(|s| s.result.composite).collect();
    let peaks = detect_peaks(&scores, cfg.peak_threshold, cfg.extremum_radius)
        .into_iter()
        .map(|i| extremum(&samples, i))
        .collect();
    let risks = detect_risks(&scores, cfg.risk_threshold, cfg.extremum_radius)
        .into_iter()
        .map(|i| extremum(&samples, i))
        .collect();

    let peak_threshold = cfg.peak_threshold;
    let risk_threshold = cfg.risk_threshold;
    let peak_windows = windows(&samples, |s| s >= peak_threshold, f64::max);
    let risk_windows = windows(&samples, |s| s <= risk_threshold, f64::min);

    // First occurrence wins ties.
    let best = scores
        .iter()
        .enumerate()
        .fold(None::<usize>, |acc, (i, &s)| match acc {
            Some(b) if scores[b] >= s => Some(b),
            _ => Some(i),
        })
        .map(|i| extremum(&samples, i));
    let worst = scores
        .iter()
        .enumerate()
        .fold(None::<usize>, |acc, (i, &s)| match acc {
            Some(w) if scores[w] <= s => Some(w),
            _ => Some(i),
        })
        .map(|i| extremum(&samples, i));
    let mean = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };

    SynthesisTimeline {
        samples,
        peaks,
        risks,
        peak_windows,
        risk_windows,
        best,
        worst,
        mean,
    }
}

// ---------------------------------------------------------------------------
// Build
// ---------------------------------------------------------------------------

/// Evaluate the synthesis on every sampled date between `start` and `end`.
///
/// With `timeline.parallel`, dates are evaluated on the rayon pool and
/// collected back in date order.
#[tracing::instrument(skip_all, fields(start = %start, end = %end))]
pub fn build_timeline<S: TransitSource + ?Sized>(
    inputs: &PredictionInputs<'_>,
    source: &S,
    start: NaiveDate,
    end: NaiveDate,
    cfg: &SynthesisConfig,
) -> Result<SynthesisTimeline, PredictError> {
    cfg.validate()?;
    if end < start {
        return Err(PredictError::config(format!(
            "timeline end {end} precedes start {start}"
        )));
    }
    let dates = sample_dates(start, end, cfg.timeline.step_days);

    let sample = |&date: &NaiveDate| -> Result<TimelineSample, PredictError> {
        let transits = source.transits_on(date);
        let result = evaluate_date(inputs, date, &transits, cfg)?;
        trace!(%date, composite = result.composite, "timeline sample");
        Ok(TimelineSample { date, result })
    };
    let samples = if cfg.timeline.parallel {
        dates.par_iter().map(sample).collect::<Result<Vec<_>, _>>()?
    } else {
        dates.iter().map(sample).collect::<Result<Vec<_>, _>>()?
    };

    let timeline = summarize(samples, &cfg.timeline);
    debug!(
        samples = timeline.len(),
        peaks = timeline.peaks.len(),
        risks = timeline.risks.len(),
        mean = timeline.mean,
        "timeline built"
    );
    Ok(timeline)
}
