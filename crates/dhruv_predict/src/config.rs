//! Engine configuration, loadable from TOML.
//!
//! Every section and field has a default, so an empty document is a valid
//! configuration:
//!
//! ```toml
//! [rectifier]
//! window = 3
//!
//! [synthesis]
//! preset = "dasha_focused"
//!
//! [synthesis.timeline]
//! step_days = 7
//! ```

use serde::{Deserialize, Serialize};

use crate::error::PredictError;
use crate::synthesis_types::Pillar;

// ---------------------------------------------------------------------------
// Rectifier
// ---------------------------------------------------------------------------

/// Fine-amsha rectification parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectifierConfig {
    /// Parts per sign.
    pub divisions: u16,
    /// Candidates are generated for offsets in `-window..=window`, zero excluded.
    pub window: u8,
    /// Confidence lost per subdivision of offset.
    pub confidence_decay: u8,
    /// Mean ascendant motion in degrees per minute of clock time.
    pub ascendant_rate_deg_per_min: f64,
    /// Warn when the stated birth-time uncertainty spans more subdivisions than this.
    pub max_subdivisions_in_uncertainty: f64,
    /// Warn when the ascendant lies within this fraction of a subdivision edge.
    pub boundary_fraction: f64,
}

impl Default for RectifierConfig {
    fn default() -> Self {
        Self {
            divisions: dhruv_vedic_base::NADI_DIVISIONS,
            window: 5,
            confidence_decay: 12,
            ascendant_rate_deg_per_min: 0.25,
            max_subdivisions_in_uncertainty: 5.0,
            boundary_fraction: 0.1,
        }
    }
}

impl RectifierConfig {
    pub fn validate(&self) -> Result<(), PredictError> {
        if self.divisions == 0 {
            return Err(PredictError::config("rectifier.divisions must be positive"));
        }
        let rate = self.ascendant_rate_deg_per_min;
        if !(rate > 0.0 && rate.is_finite()) {
            return Err(PredictError::config(
                "rectifier.ascendant_rate_deg_per_min must be positive and finite",
            ));
        }
        if self.confidence_decay == 0 {
            return Err(PredictError::config(
                "rectifier.confidence_decay must be positive",
            ));
        }
        if self.window as u32 * self.confidence_decay as u32 >= 100 {
            return Err(PredictError::config(format!(
                "rectifier.window ({}) x confidence_decay ({}) must stay below 100",
                self.window, self.confidence_decay
            )));
        }
        if !(0.0..0.5).contains(&self.boundary_fraction) {
            return Err(PredictError::config(
                "rectifier.boundary_fraction must be in [0, 0.5)",
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Pillar weights
// ---------------------------------------------------------------------------

/// Relative weight of each pillar in the composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarWeights {
    pub dasha: f64,
    pub gochara: f64,
    pub ashtakavarga: f64,
}

/// Named weight sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPreset {
    #[default]
    Balanced,
    DashaFocused,
    TransitFocused,
    BinduFocused,
}

impl WeightPreset {
    pub const fn weights(self) -> PillarWeights {
        match self {
            Self::Balanced => PillarWeights::new(0.40, 0.35, 0.25),
            Self::DashaFocused => PillarWeights::new(0.50, 0.30, 0.20),
            Self::TransitFocused => PillarWeights::new(0.25, 0.45, 0.30),
            Self::BinduFocused => PillarWeights::new(0.30, 0.30, 0.40),
        }
    }
}

impl PillarWeights {
    pub const fn new(dasha: f64, gochara: f64, ashtakavarga: f64) -> Self {
        Self {
            dasha,
            gochara,
            ashtakavarga,
        }
    }

    /// Equal thirds.
    pub const fn equal() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    pub const fn weight(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Dasha => self.dasha,
            Pillar::Gochara => self.gochara,
            Pillar::Ashtakavarga => self.ashtakavarga,
        }
    }

    pub fn validate(&self) -> Result<(), PredictError> {
        let all = [self.dasha, self.gochara, self.ashtakavarga];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(PredictError::config(format!(
                "pillar weights must be finite and non-negative, got {all:?}"
            )));
        }
        if all.iter().sum::<f64>() <= 0.0 {
            return Err(PredictError::config("pillar weights must not all be zero"));
        }
        Ok(())
    }
}

impl Default for PillarWeights {
    fn default() -> Self {
        WeightPreset::Balanced.weights()
    }
}

// ---------------------------------------------------------------------------
// Synthesis and timeline
// ---------------------------------------------------------------------------

/// Timeline sampling and extremum detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub step_days: u32,
    /// Local maxima at or above this composite are peaks.
    pub peak_threshold: f64,
    /// Local minima at or below this composite are risks.
    pub risk_threshold: f64,
    /// Samples on each side a local extremum must beat.
    pub extremum_radius: usize,
    /// Fan sample evaluation out over the rayon pool.
    pub parallel: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            step_days: 1,
            peak_threshold: 70.0,
            risk_threshold: 40.0,
            extremum_radius: 1,
            parallel: true,
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> Result<(), PredictError> {
        if self.step_days == 0 {
            return Err(PredictError::config("timeline.step_days must be positive"));
        }
        if self.extremum_radius == 0 {
            return Err(PredictError::config(
                "timeline.extremum_radius must be positive",
            ));
        }
        if self.risk_threshold >= self.peak_threshold {
            return Err(PredictError::config(format!(
                "timeline.risk_threshold ({}) must be below peak_threshold ({})",
                self.risk_threshold, self.peak_threshold
            )));
        }
        Ok(())
    }
}

/// Composite scoring parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    pub preset: WeightPreset,
    /// Explicit weights; overrides `preset` when present.
    pub weights: Option<PillarWeights>,
    /// A pillar at or above this normalized score counts as favorable.
    pub favorable_threshold: f64,
    /// A pillar below this normalized score counts as unfavorable.
    pub unfavorable_threshold: f64,
    pub timeline: TimelineConfig,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            preset: WeightPreset::Balanced,
            weights: None,
            favorable_threshold: 60.0,
            unfavorable_threshold: 40.0,
            timeline: TimelineConfig::default(),
        }
    }
}

impl SynthesisConfig {
    pub fn effective_weights(&self) -> PillarWeights {
        self.weights.unwrap_or_else(|| self.preset.weights())
    }

    pub fn validate(&self) -> Result<(), PredictError> {
        self.effective_weights().validate()?;
        if self.unfavorable_threshold > self.favorable_threshold {
            return Err(PredictError::config(
                "synthesis.unfavorable_threshold must not exceed favorable_threshold",
            ));
        }
        self.timeline.validate()
    }
}

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

/// Root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictConfig {
    pub rectifier: RectifierConfig,
    pub synthesis: SynthesisConfig,
}

impl PredictConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, PredictError> {
        let cfg: PredictConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), PredictError> {
        self.rectifier.validate()?;
        self.synthesis.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let cfg = PredictConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, PredictConfig::default());
        assert_eq!(cfg.rectifier.divisions, 150);
        assert_eq!(cfg.synthesis.effective_weights(), WeightPreset::Balanced.weights());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let cfg = PredictConfig::from_toml_str(
            r#"
            [rectifier]
            window = 3

            [synthesis]
            preset = "dasha_focused"

            [synthesis.timeline]
            step_days = 7
            parallel = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.rectifier.window, 3);
        assert_eq!(cfg.rectifier.confidence_decay, 12);
        assert_eq!(cfg.synthesis.effective_weights().dasha, 0.50);
        assert_eq!(cfg.synthesis.timeline.step_days, 7);
        assert!(!cfg.synthesis.timeline.parallel);
        assert_eq!(cfg.synthesis.timeline.peak_threshold, 70.0);
    }

    #[test]
    fn explicit_weights_override_preset() {
        let cfg = PredictConfig::from_toml_str(
            r#"
            [synthesis]
            preset = "bindu_focused"
            weights = { dasha = 1.0, gochara = 0.0, ashtakavarga = 0.0 }
            "#,
        )
        .unwrap();
        assert_eq!(cfg.synthesis.effective_weights(), PillarWeights::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn window_decay_product_is_bounded() {
        let err = PredictConfig::from_toml_str("[rectifier]\nwindow = 9\nconfidence_decay = 12\n");
        assert!(matches!(err, Err(PredictError::Configuration(_))));
    }

    #[test]
    fn zero_confidence_decay_rejected() {
        let err = PredictConfig::from_toml_str("[rectifier]\nconfidence_decay = 0\n");
        assert!(matches!(err, Err(PredictError::Configuration(_))));
        let cfg = RectifierConfig {
            confidence_decay: 1,
            ..RectifierConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_weights_rejected() {
        let w = PillarWeights::new(0.0, 0.0, 0.0);
        assert!(matches!(w.validate(), Err(PredictError::Configuration(_))));
        assert!(PillarWeights::new(-1.0, 1.0, 1.0).validate().is_err());
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = PredictConfig::from_toml_str("[rectifier\n");
        assert!(matches!(err, Err(PredictError::ConfigParse(_))));
    }

    #[test]
    fn unknown_preset_is_parse_error() {
        let err = PredictConfig::from_toml_str("[synthesis]\npreset = \"lunar\"\n");
        assert!(matches!(err, Err(PredictError::ConfigParse(_))));
    }

    #[test]
    fn presets_are_valid() {
        for p in [
            WeightPreset::Balanced,
            WeightPreset::DashaFocused,
            WeightPreset::TransitFocused,
            WeightPreset::BinduFocused,
        ] {
            let w = p.weights();
            assert!(w.validate().is_ok());
            assert!((w.dasha + w.gochara + w.ashtakavarga - 1.0).abs() < 1e-12, "{p:?}");
        }
    }
}
