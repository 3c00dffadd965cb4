//! Types for the three-pillar synthesis and its timeline.

use chrono::NaiveDate;
use dhruv_vedic_base::{DashaLevel, Graha, Rashi};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Pillars
// ---------------------------------------------------------------------------

/// Independent scoring system feeding the composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pillar {
    /// Period-lord dignity.
    Dasha,
    /// Transit favorability from the natal Moon.
    Gochara,
    /// Bindu strength of transited signs.
    Ashtakavarga,
}

pub const ALL_PILLARS: [Pillar; 3] = [Pillar::Dasha, Pillar::Gochara, Pillar::Ashtakavarga];

impl Pillar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dasha => "Dasha",
            Self::Gochara => "Gochara",
            Self::Ashtakavarga => "Ashtakavarga",
        }
    }
}

/// What a sub-score was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreSource {
    /// Running lord of a dasha level.
    Dasha(DashaLevel),
    /// A transiting body's position from the natal Moon.
    Transit(Graha),
    /// A transiting body's bindus in its sign.
    Bindu(Graha),
}

/// One weighted contribution to a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScore {
    pub source: ScoreSource,
    /// 0..=100.
    pub score: f64,
    pub weight: f64,
}

/// A pillar's normalized score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarScore {
    pub pillar: Pillar,
    pub sub_scores: Vec<SubScore>,
    /// Factor applied to the weighted mean of sub-scores; 1.0 when none.
    pub multiplier: f64,
    /// 0..=100.
    pub normalized: f64,
    /// A favorable reading in this pillar was obstructed.
    pub obstructed: bool,
}

impl PillarScore {
    /// Weighted mean of `sub_scores` times `multiplier`, clamped. 50 for an empty list.
    pub fn from_sub_scores(pillar: Pillar, sub_scores: Vec<SubScore>, multiplier: f64) -> Self {
        let total_weight: f64 = sub_scores.iter().map(|s| s.weight).sum();
        let mean = if total_weight > 0.0 {
            sub_scores.iter().map(|s| s.score * s.weight).sum::<f64>() / total_weight
        } else {
            50.0
        };
        Self {
            pillar,
            sub_scores,
            multiplier,
            normalized: (mean * multiplier).clamp(0.0, 100.0),
            obstructed: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Gochara
// ---------------------------------------------------------------------------

/// A body's transit position for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitPlacement {
    pub graha: Graha,
    pub rashi: Rashi,
    pub retrograde: bool,
}

impl TransitPlacement {
    pub const fn new(graha: Graha, rashi: Rashi, retrograde: bool) -> Self {
        Self {
            graha,
            rashi,
            retrograde,
        }
    }
}

/// Classical favorability of a transit house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransitFavor {
    Favorable,
    Neutral,
    Unfavorable,
}

/// One scored transit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GocharaReading {
    pub graha: Graha,
    /// House from the natal Moon, 1..=12.
    pub house: u8,
    /// Table favorability before obstruction.
    pub favor: TransitFavor,
    /// Body occupying the vedha house of a favorable transit.
    pub vedha_by: Option<Graha>,
    pub retrograde: bool,
    /// 0..=100.
    pub score: f64,
}

impl GocharaReading {
    pub fn is_obstructed(&self) -> bool {
        self.vedha_by.is_some()
    }
}

/// Saturn's transit phases relative to the natal Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaturnConfiguration {
    /// 12th from the Moon.
    SadeSatiRising,
    /// Over the Moon.
    SadeSatiPeak,
    /// 2nd from the Moon.
    SadeSatiSetting,
    /// 8th from the Moon.
    Ashtama,
    /// 4th or 7th from the Moon.
    Kantaka,
}

impl SaturnConfiguration {
    pub const fn from_house(house: u8) -> Option<Self> {
        match house {
            12 => Some(Self::SadeSatiRising),
            1 => Some(Self::SadeSatiPeak),
            2 => Some(Self::SadeSatiSetting),
            8 => Some(Self::Ashtama),
            4 | 7 => Some(Self::Kantaka),
            _ => None,
        }
    }

    /// Factor applied to the gochara pillar.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::SadeSatiRising => 0.85,
            Self::SadeSatiPeak => 0.70,
            Self::SadeSatiSetting => 0.88,
            Self::Ashtama => 0.75,
            Self::Kantaka => 0.82,
        }
    }
}

/// Gochara pillar with per-transit detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GocharaPillar {
    pub score: PillarScore,
    pub readings: Vec<GocharaReading>,
    pub saturn: Option<SaturnConfiguration>,
}

// ---------------------------------------------------------------------------
// Ashtakavarga
// ---------------------------------------------------------------------------

/// Bhinna ashtakavarga strength band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BinduTier {
    /// 0..=2.
    Low,
    /// 3..=4.
    Medium,
    /// 5..=8.
    High,
}

impl BinduTier {
    pub const fn from_bindus(bav: u8) -> Self {
        match bav {
            0..=2 => Self::Low,
            3..=4 => Self::Medium,
            _ => Self::High,
        }
    }
}

/// One transit scored on bindus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinduReading {
    pub graha: Graha,
    pub rashi: Rashi,
    pub bav: u8,
    pub sav: u8,
    pub tier: BinduTier,
    pub favorable: bool,
    /// 0..=100.
    pub score: f64,
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Qualitative band of the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProbabilityRating {
    Critical,
    Challenging,
    Low,
    Moderate,
    High,
    Peak,
}

impl ProbabilityRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Peak
        } else if score >= 65.0 {
            Self::High
        } else if score >= 50.0 {
            Self::Moderate
        } else if score >= 35.0 {
            Self::Low
        } else if score >= 20.0 {
            Self::Challenging
        } else {
            Self::Critical
        }
    }
}

/// How the three pillars agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarAlignment {
    AllFavorable,
    AllUnfavorable,
    TwoFavorable,
    TwoUnfavorable,
    Mixed,
}

/// Composite assessment for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// 0..=100.
    pub composite: f64,
    pub pillars: Vec<PillarScore>,
    pub rating: ProbabilityRating,
    pub alignment: PillarAlignment,
    /// Any pillar reported an obstructed favorable reading.
    pub obstructed: bool,
}

impl SynthesisResult {
    pub fn pillar(&self, pillar: Pillar) -> Option<&PillarScore> {
        self.pillars.iter().find(|p| p.pillar == pillar)
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// Synthesis at one sampled date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSample {
    pub date: NaiveDate,
    pub result: SynthesisResult,
}

/// A local extremum of the composite series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineExtremum {
    /// Position in the sample series.
    pub index: usize,
    pub date: NaiveDate,
    pub score: f64,
}

/// A run of consecutive samples past a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineWindow {
    /// First sample date, inclusive.
    pub start: NaiveDate,
    /// Last sample date, inclusive.
    pub end: NaiveDate,
    pub samples: usize,
    /// Highest score for peak windows, lowest for risk windows.
    pub extreme: f64,
}

/// Chronological, non-interpolated composite series with its extrema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisTimeline {
    pub samples: Vec<TimelineSample>,
    pub peaks: Vec<TimelineExtremum>,
    pub risks: Vec<TimelineExtremum>,
    pub peak_windows: Vec<TimelineWindow>,
    pub risk_windows: Vec<TimelineWindow>,
    pub best: Option<TimelineExtremum>,
    pub worst: Option<TimelineExtremum>,
    /// 0.0 for an empty timeline.
    pub mean: f64,
}

impl SynthesisTimeline {
    /// (date, composite) pairs in sample order.
    pub fn score_series(&self) -> Vec<(NaiveDate, f64)> {
        self.samples
            .iter()
            .map(|s| (s.date, s.result.composite))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
