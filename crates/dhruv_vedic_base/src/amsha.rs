//! Fine amsha (harmonic subdivision) calculations.
//!
//! Divides the 30-degree rashi span into N equal parts. Odd signs count the
//! parts forward from the start of the sign (savya); even signs count them
//! backward from the end (apasavya). The D-150 (nadi amsha) is the default
//! fine division, 0.2 deg per part.
//!
//! The resulting sign of part `i` in a rashi with 0-based index `s` is
//! `(s + i - 1) mod 12`. Other traditions start the count elsewhere; this
//! convention is fixed here.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, SignParity, degree_in_rashi};

/// Nadi amsha division count.
pub const NADI_DIVISIONS: u16 = 150;

/// Counting direction of the parts inside a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmshaParity {
    /// Forward count, odd signs.
    Savya,
    /// Reverse count, even signs.
    Apasavya,
}

/// Polarity of a subdivision: odd parts are masculine, even parts feminine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmshaEnergy {
    Purusha,
    Prakriti,
}

/// A longitude resolved into a fine amsha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmshaPosition {
    /// Sign containing the longitude.
    pub source_rashi: Rashi,
    /// Division count N.
    pub divisions: u16,
    /// 1-based subdivision index in [1, N], after the parity rule.
    pub index: u16,
    /// Sign the subdivision maps to.
    pub amsha_rashi: Rashi,
    /// Lord of `amsha_rashi`.
    pub ruler: Graha,
    pub parity: AmshaParity,
    pub energy: AmshaEnergy,
    /// Fraction [0, 1) of the physical part already traversed, in zodiacal order.
    pub progress: f64,
}

/// Width of one part in degrees.
pub fn subdivision_width(divisions: u16) -> Result<f64, VedicError> {
    if divisions == 0 {
        return Err(VedicError::InvalidDivisions(divisions));
    }
    Ok(30.0 / divisions as f64)
}

/// Raw forward part number (1-based, unclamped) of a longitude inside its sign.
fn raw_part(sidereal_lon: f64, width: f64) -> u32 {
    (degree_in_rashi(sidereal_lon) / width).floor() as u32 + 1
}

/// Apply the parity rule to a forward part number and clamp to [1, N].
///
/// Returns None when the forward part number itself lies outside [1, N].
pub fn directed_index(rashi: Rashi, raw: i64, divisions: u16) -> Option<u16> {
    let n = divisions as i64;
    if raw < 1 || raw > n {
        return None;
    }
    let index = match rashi.parity() {
        SignParity::Odd => raw,
        SignParity::Even => n + 1 - raw,
    };
    Some(index.clamp(1, n) as u16)
}

/// Sign and 1-based subdivision index of a sidereal longitude.
///
/// `raw = floor(deg_in_sign / (30/N)) + 1`, reversed to `N + 1 - raw` in even
/// signs, then clamped to [1, N].
pub fn compute_subdivision(sidereal_lon: f64, divisions: u16) -> Result<(Rashi, u16), VedicError> {
    let width = subdivision_width(divisions)?;
    let rashi = Rashi::from_longitude(sidereal_lon);
    let raw = raw_part(sidereal_lon, width).min(divisions as u32) as i64;
    let index = match directed_index(rashi, raw, divisions) {
        Some(i) => i,
        // raw is already clamped into [1, N]
        None => 1,
    };
    Ok((rashi, index))
}

/// Sign reached by subdivision `index` of `rashi`: `(rashi + index - 1) mod 12`.
pub fn resulting_amsha_sign(rashi: Rashi, index: u16) -> Rashi {
    let idx = (rashi.index() as u32 + index as u32 + 11) % 12;
    Rashi::ALL[idx as usize]
}

/// Full fine-amsha resolution of a longitude.
pub fn amsha_position(sidereal_lon: f64, divisions: u16) -> Result<AmshaPosition, VedicError> {
    let width = subdivision_width(divisions)?;
    let (source_rashi, index) = compute_subdivision(sidereal_lon, divisions)?;
    let amsha_rashi = resulting_amsha_sign(source_rashi, index);
    let deg = degree_in_rashi(sidereal_lon);
    let progress = ((deg / width) - (deg / width).floor()).clamp(0.0, 1.0 - f64::EPSILON);
    Ok(AmshaPosition {
        source_rashi,
        divisions,
        index,
        amsha_rashi,
        ruler: rashi_lord(amsha_rashi),
        parity: match source_rashi.parity() {
            SignParity::Odd => AmshaParity::Savya,
            SignParity::Even => AmshaParity::Apasavya,
        },
        energy: if index % 2 == 1 {
            AmshaEnergy::Purusha
        } else {
            AmshaEnergy::Prakriti
        },
        progress,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_divisions_rejected() {
        assert_eq!(
            compute_subdivision(10.0, 0),
            Err(VedicError::InvalidDivisions(0))
        );
    }

    #[test]
    fn odd_sign_counts_forward() {
        assert_eq!(compute_subdivision(0.1, 150), Ok((Rashi::Mesha, 1)));
        assert_eq!(compute_subdivision(2.5, 150), Ok((Rashi::Mesha, 13)));
        assert_eq!(compute_subdivision(29.9, 150), Ok((Rashi::Mesha, 150)));
    }

    #[test]
    fn even_sign_counts_backward() {
        assert_eq!(compute_subdivision(30.1, 150), Ok((Rashi::Vrishabha, 150)));
        assert_eq!(compute_subdivision(32.5, 150), Ok((Rashi::Vrishabha, 138)));
        assert_eq!(compute_subdivision(59.9, 150), Ok((Rashi::Vrishabha, 1)));
    }

    #[test]
    fn resulting_sign_convention() {
        assert_eq!(resulting_amsha_sign(Rashi::Mesha, 1), Rashi::Mesha);
        assert_eq!(resulting_amsha_sign(Rashi::Mesha, 13), Rashi::Mesha);
        assert_eq!(resulting_amsha_sign(Rashi::Mesha, 14), Rashi::Vrishabha);
        assert_eq!(resulting_amsha_sign(Rashi::Meena, 2), Rashi::Mesha);
    }

    #[test]
    fn position_tags() {
        let p = amsha_position(32.5, NADI_DIVISIONS).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(p.index, 138);
        assert_eq!(p.parity, AmshaParity::Apasavya);
        assert_eq!(p.energy, AmshaEnergy::Prakriti);
        // (1 + 138 - 1) mod 12 = 6 -> Tula, ruled by Venus.
        assert_eq!(p.amsha_rashi, Rashi::Tula);
        assert_eq!(p.ruler, Graha::Shukra);
        assert!(p.progress >= 0.0 && p.progress < 1.0);
    }

    #[test]
    fn directed_index_rejects_outside_range() {
        assert_eq!(directed_index(Rashi::Mesha, 0, 150), None);
        assert_eq!(directed_index(Rashi::Mesha, 151, 150), None);
        assert_eq!(directed_index(Rashi::Karka, 1, 150), Some(150));
    }
}
