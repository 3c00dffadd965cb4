//! Error types for Vedic value construction and table lookup.

use thiserror::Error;

use crate::graha::Graha;

/// Errors from Vedic base calculations.
///
/// Every variant is a data defect in caller-supplied input (an unknown key or
/// a malformed snapshot); none of them signal a benign "nothing found".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Sign key outside 0..=11.
    #[error("unknown rashi index {0}")]
    UnknownRashiIndex(u8),
    /// The same body appeared twice in a chart snapshot.
    #[error("duplicate position for {0}")]
    DuplicateBody(Graha),
    /// Amsha division count must be positive.
    #[error("invalid amsha division count {0}")]
    InvalidDivisions(u16),
    /// No bhinna ashtakavarga table exists for this body.
    #[error("no bindu table for {0}")]
    MissingBinduTable(Graha),
    /// A period ends before it starts.
    #[error("dasha period for {0} ends before it starts")]
    InvertedPeriod(Graha),
}
