//! Dasha period snapshots and date lookup.
//!
//! Period generation (Vimshottari balance, sub-period splitting) is done by
//! an external calculator; this module answers "which lords rule on date D".

pub mod timeline;
pub mod types;

pub use timeline::DashaTimeline;
pub use types::{DashaLevel, DashaLords, DashaPeriod, MAX_DASHA_LEVEL, PREDICTIVE_LEVELS};
