//! Graha dignity, natural friendship and benefic/functional classification.
//!
//! Provides exaltation/debilitation signs, moolatrikone ranges, own-sign
//! ownership, natural (naisargika) friendship, the seven-step dignity scale
//! used by period-lord scoring, natural benefic/malefic nature and the
//! functional nature a graha takes on for a given ascendant.
//!
//! Clean-room implementation from BPHS (Brihat Parashara Hora Shastra).

use serde::{Deserialize, Serialize};

use crate::graha::{Graha, is_dusthana, is_trikona, rashi_lord, ruled_houses};
use crate::rashi::{Rashi, degree_in_rashi};

// ---------------------------------------------------------------------------
// Exaltation, debilitation, moolatrikone, own signs
// ---------------------------------------------------------------------------

/// Exaltation rashi for sapta grahas. None for Rahu/Ketu.
///
/// BPHS: Sun Mesha, Moon Vrishabha, Mars Makara, Mercury Kanya,
/// Jupiter Karka, Venus Meena, Saturn Tula.
pub const fn exaltation_rashi(graha: Graha) -> Option<Rashi> {
    match graha {
        Graha::Surya => Some(Rashi::Mesha),
        Graha::Chandra => Some(Rashi::Vrishabha),
        Graha::Mangal => Some(Rashi::Makara),
        Graha::Buddh => Some(Rashi::Kanya),
        Graha::Guru => Some(Rashi::Karka),
        Graha::Shukra => Some(Rashi::Meena),
        Graha::Shani => Some(Rashi::Tula),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Debilitation rashi: the sign opposite exaltation. None for Rahu/Ketu.
pub const fn debilitation_rashi(graha: Graha) -> Option<Rashi> {
    match exaltation_rashi(graha) {
        Some(r) => Rashi::from_index((r.index() + 6) % 12),
        None => None,
    }
}

/// Moolatrikone range: (rashi, start_deg_in_rashi, end_deg_in_rashi).
/// None for Rahu/Ketu.
pub const fn moolatrikone_range(graha: Graha) -> Option<(Rashi, f64, f64)> {
    match graha {
        Graha::Surya => Some((Rashi::Simha, 0.0, 20.0)),
        Graha::Chandra => Some((Rashi::Vrishabha, 4.0, 20.0)),
        Graha::Mangal => Some((Rashi::Mesha, 0.0, 12.0)),
        Graha::Buddh => Some((Rashi::Kanya, 16.0, 20.0)),
        Graha::Guru => Some((Rashi::Dhanu, 0.0, 10.0)),
        Graha::Shukra => Some((Rashi::Tula, 0.0, 15.0)),
        Graha::Shani => Some((Rashi::Kumbha, 0.0, 20.0)),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Whether `rashi` is ruled by `graha`. Always false for Rahu/Ketu.
pub const fn is_own_sign(graha: Graha, rashi: Rashi) -> bool {
    !graha.is_node() && rashi_lord(rashi) as u8 == graha as u8
}

// ---------------------------------------------------------------------------
// Natural friendship (naisargika maitri)
// ---------------------------------------------------------------------------

/// Natural relationship between two grahas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NaisargikaMaitri {
    Friend,
    Enemy,
    Neutral,
}

/// (friends, enemies) of each sapta graha. Everyone else is neutral.
const fn maitri_lists(graha: Graha) -> (&'static [Graha], &'static [Graha]) {
    use Graha::*;
    match graha {
        Surya => (&[Chandra, Mangal, Guru], &[Shukra, Shani]),
        Chandra => (&[Surya, Buddh], &[]),
        Mangal => (&[Surya, Chandra, Guru], &[Buddh]),
        Buddh => (&[Surya, Shukra], &[Chandra]),
        Guru => (&[Surya, Chandra, Mangal], &[Buddh, Shukra]),
        Shukra => (&[Buddh, Shani], &[Surya, Chandra]),
        Shani => (&[Buddh, Shukra], &[Surya, Chandra, Mangal]),
        Rahu | Ketu => (&[], &[]),
    }
}

/// Natural (naisargika) friendship of `graha` towards `other` (BPHS table).
/// Neutral for any pairing involving Rahu/Ketu and for a graha with itself.
pub fn naisargika_maitri(graha: Graha, other: Graha) -> NaisargikaMaitri {
    let (friends, enemies) = maitri_lists(graha);
    if friends.contains(&other) {
        NaisargikaMaitri::Friend
    } else if enemies.contains(&other) {
        NaisargikaMaitri::Enemy
    } else {
        NaisargikaMaitri::Neutral
    }
}

// ---------------------------------------------------------------------------
// Dignity
// ---------------------------------------------------------------------------

/// Seven-step dignity scale, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Moolatrikone,
    OwnSign,
    Friend,
    Neutral,
    Enemy,
    Debilitated,
}

impl Dignity {
    /// 6 for Exalted down to 0 for Debilitated.
    pub const fn strength_rank(self) -> u8 {
        match self {
            Self::Exalted => 6,
            Self::Moolatrikone => 5,
            Self::OwnSign => 4,
            Self::Friend => 3,
            Self::Neutral => 2,
            Self::Enemy => 1,
            Self::Debilitated => 0,
        }
    }

    /// Exalted, moolatrikone or own sign.
    pub const fn is_dignified(self) -> bool {
        matches!(self, Self::Exalted | Self::Moolatrikone | Self::OwnSign)
    }
}

/// Dignity of a graha at a sidereal longitude (naisargika friendship only).
///
/// Priority: exaltation > debilitation > moolatrikone > own sign >
/// natural friendship with the sign lord. Rahu/Ketu are always Neutral.
pub fn dignity_at(graha: Graha, sidereal_lon: f64) -> Dignity {
    if graha.is_node() {
        return Dignity::Neutral;
    }
    let rashi = Rashi::from_longitude(sidereal_lon);

    if exaltation_rashi(graha) == Some(rashi) {
        return Dignity::Exalted;
    }
    if debilitation_rashi(graha) == Some(rashi) {
        return Dignity::Debilitated;
    }
    if let Some((mt_rashi, start, end)) = moolatrikone_range(graha) {
        let deg = degree_in_rashi(sidereal_lon);
        if mt_rashi == rashi && deg >= start && deg < end {
            return Dignity::Moolatrikone;
        }
    }
    if is_own_sign(graha, rashi) {
        return Dignity::OwnSign;
    }

    match naisargika_maitri(graha, rashi_lord(rashi)) {
        NaisargikaMaitri::Friend => Dignity::Friend,
        NaisargikaMaitri::Enemy => Dignity::Enemy,
        NaisargikaMaitri::Neutral => Dignity::Neutral,
    }
}

// ---------------------------------------------------------------------------
// Benefic / malefic
// ---------------------------------------------------------------------------

/// Natural benefic/malefic classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeneficNature {
    Benefic,
    Malefic,
}

/// Natural nature of each graha. The Moon defaults to Benefic.
pub const fn natural_benefic_malefic(graha: Graha) -> BeneficNature {
    match graha {
        Graha::Chandra | Graha::Buddh | Graha::Guru | Graha::Shukra => BeneficNature::Benefic,
        Graha::Surya | Graha::Mangal | Graha::Shani | Graha::Rahu | Graha::Ketu => {
            BeneficNature::Malefic
        }
    }
}

/// Functional nature of a graha for a particular ascendant, from the houses it rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionalNature {
    /// Rules a trikona and no dusthana.
    Benefic,
    /// Rules both a trikona and a dusthana.
    Mixed,
    /// Rules neither, or is a node.
    Neutral,
    /// Rules a dusthana and no trikona.
    Malefic,
}

/// Functional nature from house lordship relative to the ascendant.
pub fn functional_nature(graha: Graha, ascendant: Rashi) -> FunctionalNature {
    let houses = ruled_houses(graha, ascendant);
    let trikona = houses.iter().any(|&h| is_trikona(h));
    let dusthana = houses.iter().any(|&h| is_dusthana(h));
    match (trikona, dusthana) {
        (true, false) => FunctionalNature::Benefic,
        (true, true) => FunctionalNature::Mixed,
        (false, true) => FunctionalNature::Malefic,
        (false, false) => FunctionalNature::Neutral,
    }
}
