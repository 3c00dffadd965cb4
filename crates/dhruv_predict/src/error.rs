//! Error types for the predictive engines.

use dhruv_vedic_base::{Graha, VedicError};
use thiserror::Error;

/// Errors from yoga, rectification and synthesis calculations.
///
/// Benign outcomes (a yoga not formed, no candidate in a window, a subdivision
/// outside its range) are ordinary return values and never appear here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PredictError {
    /// A body the calculation depends on is absent from the chart.
    #[error("{body} is missing from the chart ({context})")]
    MissingInput { body: Graha, context: &'static str },
    /// Invalid weights, thresholds, windows or an unknown table key.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Malformed configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    /// Error from the shared Vedic tables.
    #[error(transparent)]
    Vedic(#[from] VedicError),
}

impl PredictError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
