//! Predictive assessments derived from a constructed birth chart.
//!
//! This crate provides:
//! - Kemadruma-style yoga detection with additive bhanga scoring, severity
//!   tiers, life-area impacts, activation periods and remedies
//! - D-150 (nadi amsha) placements and birth-time rectification candidates
//! - Dasha, gochara and ashtakavarga pillar scoring, their weighted composite,
//!   and a sampled timeline with peaks and risk windows
//! - TOML configuration for every tunable threshold and weight
//!
//! Inputs are immutable snapshots from `dhruv_vedic_base`. Nothing here
//! computes planetary positions.

pub mod config;
pub mod error;
pub mod pillars;
pub mod rectify;
pub mod rectify_types;
pub mod synthesis;
pub mod synthesis_types;
pub mod timeline;
pub mod yoga;
pub mod yoga_types;

pub use config::{
    PillarWeights, PredictConfig, RectifierConfig, SynthesisConfig, TimelineConfig, WeightPreset,
};
pub use error::PredictError;
pub use pillars::{
    score_ashtakavarga_pillar, score_ashtakavarga_transit, score_dasha_lord, score_dasha_pillar,
    score_gochara_pillar, score_gochara_transit, transit_favor, vedha_house,
};
pub use rectify::{analyze_fine_amsha, generate_candidates};
pub use rectify_types::{BodyAmsha, FineAmshaAnalysis, PrecisionWarning, RectificationCandidate};
pub use synthesis::{PredictionInputs, evaluate_date, pillar_alignment, synthesize};
pub use synthesis_types::{
    ALL_PILLARS, BinduReading, BinduTier, GocharaPillar, GocharaReading, Pillar, PillarAlignment,
    PillarScore, ProbabilityRating, SaturnConfiguration, ScoreSource, SubScore, SynthesisResult,
    SynthesisTimeline, TimelineExtremum, TimelineSample, TimelineWindow, TransitFavor,
    TransitPlacement,
};
pub use timeline::{TransitSource, build_timeline, detect_peaks, detect_risks};
pub use yoga::{
    KEMADRUMA_REFERENCE, analyze_kemadruma, analyze_yoga, cancellation_score, derive_impacts,
    detect_yoga, evaluate_cancellations, evaluate_rule, find_activation_periods,
    generate_remedies, score_to_severity,
};
pub use yoga_types::{
    ALL_CANCELLATION_TYPES, ActivationPeriod, ActivationRole, AreaImpact, CancellationFactor,
    CancellationType, ImpactLevel, ImpactMetric, ImpactModifiers, LifeArea, MetricScore, Remedy,
    RemedyCategory, RemedyKind, SeverityTier, YogaAnalysisResult, YogaFormation,
};
