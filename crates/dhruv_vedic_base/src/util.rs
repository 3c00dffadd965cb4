//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 + 360.0 rounds to 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Clamp a score to the closed [0, 100] range used by every assessment.
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Nakshatra span in degrees (360 / 27).
pub const NAKSHATRA_SPAN_DEG: f64 = 360.0 / 27.0;

/// 0-based nakshatra index (Ashwini = 0 .. Revati = 26) of a sidereal longitude.
pub fn nakshatra_index(sidereal_lon: f64) -> u8 {
    ((normalize_360(sidereal_lon) / NAKSHATRA_SPAN_DEG).floor() as u8).min(26)
}
