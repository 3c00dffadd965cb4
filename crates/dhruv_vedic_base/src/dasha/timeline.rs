//! Flat, date-indexed view over an externally generated dasha hierarchy.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{DashaLevel, DashaLords, DashaPeriod};

/// All periods of a dasha hierarchy, sorted by (level, start).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashaTimeline {
    periods: Vec<DashaPeriod>,
}

impl DashaTimeline {
    pub fn new(mut periods: Vec<DashaPeriod>) -> Self {
        periods.sort_by_key(|p| (p.level, p.start));
        Self { periods }
    }

    pub fn periods(&self) -> &[DashaPeriod] {
        &self.periods
    }

    /// Periods of one level, chronological.
    pub fn level(&self, level: DashaLevel) -> impl Iterator<Item = &DashaPeriod> + '_ {
        self.periods.iter().filter(move |p| p.level == level)
    }

    /// The running period of a level on `date`.
    pub fn current(&self, level: DashaLevel, date: NaiveDate) -> Option<&DashaPeriod> {
        self.level(level).find(|p| p.contains(date))
    }

    /// Lords of the predictive levels on `date`. Levels not covered stay None.
    pub fn lords_at(&self, date: NaiveDate) -> DashaLords {
        DashaLords {
            maha: self.current(DashaLevel::Mahadasha, date).map(|p| p.lord),
            antar: self.current(DashaLevel::Antardasha, date).map(|p| p.lord),
            pratyantar: self
                .current(DashaLevel::Pratyantardasha, date)
                .map(|p| p.lord),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}
