//! Lunar phase: tithi, paksha and brightness from Sun/Moon longitudes.
//!
//! A tithi is 12 degrees of Moon-Sun elongation; 30 tithis make a
//! synodic month. Brightness is graded on the phase angle (proximity to
//! full moon), in five equal 36-degree bands.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Degrees of elongation per tithi.
pub const TITHI_SPAN_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing half, tithis 1..=15.
    Shukla,
    /// Waning half, tithis 16..=30.
    Krishna,
}

/// Visible brightness of the Moon, dimmest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoonBrightness {
    New,
    Dim,
    Average,
    Bright,
    Full,
}

impl MoonBrightness {
    /// Full or Bright.
    pub const fn is_bright(self) -> bool {
        matches!(self, Self::Full | Self::Bright)
    }

    /// Dim or New.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dim | Self::New)
    }
}

/// Phase summary of the Moon relative to the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarPhase {
    /// Moon - Sun in [0, 360).
    pub elongation_deg: f64,
    /// Distance from new moon folded to [0, 180]; 180 is full.
    pub phase_angle_deg: f64,
    /// Tithi number, 1..=30.
    pub tithi: u8,
    pub paksha: Paksha,
    pub brightness: MoonBrightness,
}

/// Tithi number (1..=30) for a Moon-Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> u8 {
    let t = (normalize_360(elongation_deg) / TITHI_SPAN_DEG).floor() as u8 + 1;
    t.clamp(1, 30)
}

/// Brightness band for a phase angle in [0, 180].
pub fn brightness_from_phase_angle(phase_angle_deg: f64) -> MoonBrightness {
    match phase_angle_deg {
        a if a >= 144.0 => MoonBrightness::Full,
        a if a >= 108.0 => MoonBrightness::Bright,
        a if a >= 72.0 => MoonBrightness::Average,
        a if a >= 36.0 => MoonBrightness::Dim,
        _ => MoonBrightness::New,
    }
}

/// Lunar phase from sidereal (or tropical, consistently) Sun and Moon longitudes.
pub fn lunar_phase(sun_lon: f64, moon_lon: f64) -> LunarPhase {
    let elongation_deg = normalize_360(moon_lon - sun_lon);
    let phase_angle_deg = if elongation_deg <= 180.0 {
        elongation_deg
    } else {
        360.0 - elongation_deg
    };
    let tithi = tithi_from_elongation(elongation_deg);
    let paksha = if tithi <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    LunarPhase {
        elongation_deg,
        phase_angle_deg,
        tithi,
        paksha,
        brightness: brightness_from_phase_angle(phase_angle_deg),
    }
}
