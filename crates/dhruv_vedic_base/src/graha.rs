//! Vedic planet (graha) enum, rashi lordship and sign-difference houses.
//!
//! The 9 grahas form the foundation of every derived assessment in this
//! workspace. Each rashi has a planetary lord, a universal Vedic convention,
//! and relative houses are always counted by sign difference, never by
//! longitude difference.
//!
//! Clean-room implementation from standard Vedic jyotish texts (BPHS).

use serde::{Deserialize, Serialize};

use crate::rashi::Rashi;

/// The 9 Vedic grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// All 9 grahas in traditional order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// The 7 classical grahas (sapta grahas), excluding Rahu and Ketu.
/// These are the only bodies that own a bindu table.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// The five "star" grahas (tara grahas): Mars through Saturn.
///
/// These are the bodies whose presence around the Moon decides lunar
/// isolation yogas such as Kemadruma.
pub const TARA_GRAHAS: [Graha; 5] = [
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Kendra (angular) houses, 1-based.
pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Trikona (trine) houses, 1-based.
pub const TRIKONA_HOUSES: [u8; 3] = [1, 5, 9];

/// Dusthana (difficult) houses, 1-based.
pub const DUSTHANA_HOUSES: [u8; 3] = [6, 8, 12];

impl Graha {
    /// Sanskrit name of the graha.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index into ALL_GRAHAS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Surya => 0,
            Self::Chandra => 1,
            Self::Mangal => 2,
            Self::Buddh => 3,
            Self::Guru => 4,
            Self::Shukra => 5,
            Self::Shani => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Graha for a 0-based index, None when out of range.
    pub const fn from_index(index: u8) -> Option<Graha> {
        if index < 9 {
            Some(ALL_GRAHAS[index as usize])
        } else {
            None
        }
    }

    /// Lunar nodes (chaya grahas) have no body, no rulership and no bindu table.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Index into SAPTA_GRAHAS, None for Rahu/Ketu.
    pub const fn sapta_index(self) -> Option<usize> {
        if self.is_node() {
            None
        } else {
            Some(self.index() as usize)
        }
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Get the planetary lord of a rashi.
///
/// Standard Vedic lordship assignment (BPHS, universal convention):
/// - Mesha/Vrischika → Mangal (Mars)
/// - Vrishabha/Tula → Shukra (Venus)
/// - Mithuna/Kanya → Buddh (Mercury)
/// - Karka → Chandra (Moon)
/// - Simha → Surya (Sun)
/// - Dhanu/Meena → Guru (Jupiter)
/// - Makara/Kumbha → Shani (Saturn)
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha | Rashi::Vrischika => Graha::Mangal,
        Rashi::Vrishabha | Rashi::Tula => Graha::Shukra,
        Rashi::Mithuna | Rashi::Kanya => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Dhanu | Rashi::Meena => Graha::Guru,
        Rashi::Makara | Rashi::Kumbha => Graha::Shani,
    }
}

/// Compute the n-th rashi from a given rashi (1-based offset).
///
/// `nth_rashi_from(Mesha, 1)` = Mesha, `nth_rashi_from(Mesha, 2)` = Vrishabha,
/// `nth_rashi_from(Mesha, 12)` = Meena.
pub const fn nth_rashi_from(rashi: Rashi, offset: u8) -> Rashi {
    let idx = (rashi.index() as u16 + (offset as u16 % 12) + 11) % 12;
    Rashi::ALL[idx as usize]
}

/// Sign-difference house of `target` counted from `reference` (1..=12).
///
/// Same sign is house 1, the next sign is house 2, the previous sign is house 12.
pub const fn house_from(reference: Rashi, target: Rashi) -> u8 {
    ((target.index() as i16 - reference.index() as i16).rem_euclid(12) + 1) as u8
}

/// Whether a 1-based house number is a kendra.
pub const fn is_kendra(house: u8) -> bool {
    matches!(house, 1 | 4 | 7 | 10)
}

/// Whether a 1-based house number is a trikona.
pub const fn is_trikona(house: u8) -> bool {
    matches!(house, 1 | 5 | 9)
}

/// Whether a 1-based house number is a dusthana.
pub const fn is_dusthana(house: u8) -> bool {
    matches!(house, 6 | 8 | 12)
}

/// Houses (1-based, counted from `ascendant`) ruled by a graha.
/// Empty for Rahu/Ketu.
pub fn ruled_houses(graha: Graha, ascendant: Rashi) -> Vec<u8> {
    Rashi::ALL
        .iter()
        .filter(|&&r| !graha.is_node() && rashi_lord(r) == graha)
        .map(|&r| house_from(ascendant, r))
        .collect()
}
