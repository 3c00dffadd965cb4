//! Rashi (zodiac sign) identification and parity.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 deg sidereal. Sign parity is counted
//! 1-based: Mesha is the 1st (odd) sign, Vrishabha the 2nd (even) sign.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::normalize_360;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Odd/even sign classification (1-based numbering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignParity {
    /// Odd (vishama) sign: Mesha, Mithuna, Simha, ...
    Odd,
    /// Even (sama) sign: Vrishabha, Karka, Kanya, ...
    Even,
}

impl Rashi {
    /// All 12 rashis in order.
    pub const ALL: [Rashi; 12] = ALL_RASHIS;

    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi for a 0-based index, None when the index is not a sign.
    pub const fn from_index(index: u8) -> Option<Rashi> {
        if index < 12 {
            Some(ALL_RASHIS[index as usize])
        } else {
            None
        }
    }

    /// Checked lookup for externally supplied sign keys.
    pub fn try_from_index(index: u8) -> Result<Rashi, VedicError> {
        Self::from_index(index).ok_or(VedicError::UnknownRashiIndex(index))
    }

    /// Rashi containing a sidereal longitude (any real value, normalized first).
    pub fn from_longitude(sidereal_lon: f64) -> Rashi {
        let idx = (normalize_360(sidereal_lon) / 30.0).floor() as u8;
        ALL_RASHIS[idx.min(11) as usize]
    }

    /// Odd/even parity counted 1-based.
    pub const fn parity(self) -> SignParity {
        if self.number() % 2 == 1 {
            SignParity::Odd
        } else {
            SignParity::Even
        }
    }

    /// Start longitude of the sign in degrees.
    pub const fn start_longitude(self) -> f64 {
        self.index() as f64 * 30.0
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Degrees elapsed inside the sign, in [0, 30).
pub fn degree_in_rashi(sidereal_lon: f64) -> f64 {
    let d = normalize_360(sidereal_lon) % 30.0;
    if d >= 30.0 { 0.0 } else { d }
}
