//! Graha drishti (planetary aspects) by whole sign.
//!
//! Every graha aspects the 7th sign from itself. Mars additionally aspects
//! the 4th and 8th, Jupiter the 5th and 9th, Saturn the 3rd and 10th. Rahu
//! and Ketu follow the Jupiter pattern.
//!
//! Clean-room implementation from BPHS (Brihat Parashara Hora Shastra).

use crate::graha::{Graha, house_from};
use crate::rashi::Rashi;

/// Houses (1-based, counted from the aspecting graha's sign) that receive a full aspect.
pub const fn aspected_houses(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Mangal => &[4, 7, 8],
        Graha::Guru | Graha::Rahu | Graha::Ketu => &[5, 7, 9],
        Graha::Shani => &[3, 7, 10],
        Graha::Surya | Graha::Chandra | Graha::Buddh | Graha::Shukra => &[7],
    }
}

/// Whether a graha placed in `from` casts a full aspect onto the sign `target`.
pub fn graha_aspects_rashi(graha: Graha, from: Rashi, target: Rashi) -> bool {
    aspected_houses(graha).contains(&house_from(from, target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everyone_aspects_the_seventh() {
        for g in crate::graha::ALL_GRAHAS {
            assert!(graha_aspects_rashi(g, Rashi::Mesha, Rashi::Tula), "{g:?}");
        }
    }

    #[test]
    fn jupiter_trines() {
        assert!(graha_aspects_rashi(Graha::Guru, Rashi::Mesha, Rashi::Simha));
        assert!(graha_aspects_rashi(Graha::Guru, Rashi::Mesha, Rashi::Dhanu));
        assert!(!graha_aspects_rashi(Graha::Guru, Rashi::Mesha, Rashi::Karka));
    }

    #[test]
    fn no_self_aspect() {
        for g in crate::graha::ALL_GRAHAS {
            assert!(!graha_aspects_rashi(g, Rashi::Kanya, Rashi::Kanya));
        }
    }

    #[test]
    fn saturn_special_aspects() {
        // From Kumbha: 3rd = Mesha, 10th = Vrischika.
        assert!(graha_aspects_rashi(Graha::Shani, Rashi::Kumbha, Rashi::Mesha));
        assert!(graha_aspects_rashi(Graha::Shani, Rashi::Kumbha, Rashi::Vrischika));
        assert!(!graha_aspects_rashi(Graha::Mangal, Rashi::Kumbha, Rashi::Vrischika));
    }
}
