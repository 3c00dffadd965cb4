//! Types for fine-amsha birth-time rectification.

use chrono::NaiveDateTime;
use dhruv_vedic_base::{AmshaPosition, Graha, Rashi};
use serde::{Deserialize, Serialize};

/// A nearby subdivision the ascendant would occupy at an adjusted birth time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectificationCandidate {
    /// Signed offset in subdivisions, in zodiacal order. Never 0.
    pub offset: i32,
    /// Signed clock shift in seconds.
    pub time_offset_seconds: f64,
    pub adjusted_time: NaiveDateTime,
    /// Subdivision index after the parity rule, in [1, N].
    pub index: u16,
    pub amsha_rashi: Rashi,
    /// 0..=100, decreasing with |offset|.
    pub confidence: u8,
}

impl RectificationCandidate {
    pub fn time_offset_minutes(&self) -> f64 {
        self.time_offset_seconds / 60.0
    }
}

/// Reasons the fine amsha of a chart should not be trusted as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PrecisionWarning {
    /// The stated birth-time uncertainty spans more subdivisions than configured.
    UncertaintyExceedsResolution {
        uncertainty_minutes: f64,
        subdivisions: f64,
    },
    /// The ascendant sits close to a subdivision edge.
    NearBoundary {
        /// Fraction of the subdivision traversed.
        progress: f64,
    },
}

/// Fine amsha of one chart body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyAmsha {
    pub graha: Graha,
    pub position: AmshaPosition,
}

/// Fine amsha placements and rectification candidates for a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FineAmshaAnalysis {
    pub divisions: u16,
    pub ascendant: AmshaPosition,
    pub bodies: Vec<BodyAmsha>,
    /// Ordered by confidence, highest first.
    pub candidates: Vec<RectificationCandidate>,
    /// Clock time the ascendant needs to cross one subdivision.
    pub seconds_per_subdivision: f64,
    pub warnings: Vec<PrecisionWarning>,
}

impl FineAmshaAnalysis {
    pub fn body(&self, graha: Graha) -> Option<&AmshaPosition> {
        self.bodies
            .iter()
            .find(|b| b.graha == graha)
            .map(|b| &b.position)
    }

    pub fn is_precise(&self) -> bool {
        self.warnings.is_empty()
    }
}
