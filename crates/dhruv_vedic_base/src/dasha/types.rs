//! Core types for dasha (planetary period) snapshots.
//!
//! Dashas are hierarchical time-period systems from Vedic astrology (BPHS).
//! The periods themselves are produced by an external calculator; these
//! types only carry them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;

/// Deepest level a timeline may carry (0-based).
pub const MAX_DASHA_LEVEL: u8 = 4;

/// 5 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
    Sookshmadasha = 3,
    Pranadasha = 4,
}

/// The three levels that carry predictive weight, outermost first.
pub const PREDICTIVE_LEVELS: [DashaLevel; 3] = [
    DashaLevel::Mahadasha,
    DashaLevel::Antardasha,
    DashaLevel::Pratyantardasha,
];

impl DashaLevel {
    /// Create from raw u8 value.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Mahadasha),
            1 => Some(Self::Antardasha),
            2 => Some(Self::Pratyantardasha),
            3 => Some(Self::Sookshmadasha),
            4 => Some(Self::Pranadasha),
            _ => None,
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
            Self::Sookshmadasha => "Sookshmadasha",
            Self::Pranadasha => "Pranadasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => Some(Self::Sookshmadasha),
            Self::Sookshmadasha => Some(Self::Pranadasha),
            Self::Pranadasha => None,
        }
    }
}

/// A single dasha period ruled by one graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    pub level: DashaLevel,
    /// Inclusive.
    pub start: NaiveDate,
    /// Exclusive.
    pub end: NaiveDate,
}

impl DashaPeriod {
    pub fn new(
        lord: Graha,
        level: DashaLevel,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, VedicError> {
        if end < start {
            return Err(VedicError::InvertedPeriod(lord));
        }
        Ok(Self {
            lord,
            level,
            start,
            end,
        })
    }

    /// Whether `date` falls in [start, end).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Duration of the period in days.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Ruling lords of the predictive levels on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashaLords {
    pub maha: Option<Graha>,
    pub antar: Option<Graha>,
    pub pratyantar: Option<Graha>,
}

impl DashaLords {
    /// Lord at one of the predictive levels; None for deeper levels.
    pub fn at(&self, level: DashaLevel) -> Option<Graha> {
        match level {
            DashaLevel::Mahadasha => self.maha,
            DashaLevel::Antardasha => self.antar,
            DashaLevel::Pratyantardasha => self.pratyantar,
            DashaLevel::Sookshmadasha | DashaLevel::Pranadasha => None,
        }
    }

    /// (level, lord) pairs for the levels that are known.
    pub fn iter(&self) -> impl Iterator<Item = (DashaLevel, Graha)> + '_ {
        PREDICTIVE_LEVELS
            .iter()
            .filter_map(|&lvl| self.at(lvl).map(|g| (lvl, g)))
    }
}
