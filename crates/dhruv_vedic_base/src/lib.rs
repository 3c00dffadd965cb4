//! Shared Vedic value types for derived chart assessments.
//!
//! This crate provides:
//! - Graha and rashi enums, lordship and sign-difference houses
//! - Dignity, natural friendship, benefic and functional nature tables
//! - Whole-sign graha drishti
//! - Lunar phase (tithi, paksha, brightness)
//! - Fine amsha (D-150 nadi) subdivision math
//! - Chart, dasha and ashtakavarga snapshots supplied by upstream calculators
//!
//! All implementations are clean-room, derived from BPHS and universal
//! Vedic convention.

pub mod amsha;
pub mod ashtakavarga;
pub mod chart;
pub mod dasha;
pub mod dignity;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod rashi;
pub mod tithi;
pub mod util;

pub use amsha::{
    AmshaEnergy, AmshaParity, AmshaPosition, NADI_DIVISIONS, amsha_position, compute_subdivision,
    directed_index, resulting_amsha_sign, subdivision_width,
};
pub use ashtakavarga::{AshtakavargaTables, BAV_TOTALS, MAX_BAV_BINDUS, SAV_TOTAL};
pub use chart::{ChartContext, PlanetPosition};
pub use dasha::{DashaLevel, DashaLords, DashaPeriod, DashaTimeline, PREDICTIVE_LEVELS};
pub use dignity::{
    BeneficNature, Dignity, FunctionalNature, NaisargikaMaitri, debilitation_rashi, dignity_at,
    exaltation_rashi, functional_nature, is_own_sign, naisargika_maitri, natural_benefic_malefic,
};
pub use drishti::{aspected_houses, graha_aspects_rashi};
pub use error::VedicError;
pub use graha::{
    ALL_GRAHAS, DUSTHANA_HOUSES, Graha, KENDRA_HOUSES, SAPTA_GRAHAS, TARA_GRAHAS, TRIKONA_HOUSES,
    house_from, is_dusthana, is_kendra, is_trikona, nth_rashi_from, rashi_lord, ruled_houses,
};
pub use rashi::{ALL_RASHIS, Rashi, SignParity, degree_in_rashi};
pub use tithi::{LunarPhase, MoonBrightness, Paksha, lunar_phase, tithi_from_elongation};
pub use util::{clamp_score, nakshatra_index, normalize_360};
