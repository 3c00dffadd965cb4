//! Immutable birth-chart snapshot consumed by every assessment.
//!
//! Chart construction (ephemeris lookup, ayanamsha, house division) happens
//! elsewhere; this module only holds the result and answers lookups.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::{Graha, house_from};
use crate::rashi::{Rashi, degree_in_rashi};
use crate::util::{nakshatra_index, normalize_360};

/// Position of one graha in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub graha: Graha,
    pub rashi: Rashi,
    /// Degrees inside `rashi`, [0, 30).
    pub degree_in_rashi: f64,
    /// Whole-sign house from the ascendant, 1..=12.
    pub house: u8,
    /// 0-based nakshatra index, 0..=26.
    pub nakshatra: u8,
    pub retrograde: bool,
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
}

impl PlanetPosition {
    /// Derive sign, degree, whole-sign house and nakshatra from a longitude.
    pub fn from_longitude(graha: Graha, sidereal_lon: f64, retrograde: bool, ascendant: Rashi) -> Self {
        let longitude = normalize_360(sidereal_lon);
        let rashi = Rashi::from_longitude(longitude);
        Self {
            graha,
            rashi,
            degree_in_rashi: degree_in_rashi(longitude),
            house: house_from(ascendant, rashi),
            nakshatra: nakshatra_index(longitude),
            retrograde,
            longitude,
        }
    }
}

/// A birth chart: ascendant, planet positions (unique per graha) and birth time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartContext {
    ascendant_longitude: f64,
    positions: Vec<PlanetPosition>,
    birth: NaiveDateTime,
}

impl ChartContext {
    /// Build a chart snapshot. Positions keep the caller's order.
    pub fn new(
        ascendant_longitude: f64,
        positions: Vec<PlanetPosition>,
        birth: NaiveDateTime,
    ) -> Result<Self, VedicError> {
        let mut seen = [false; 9];
        for p in &positions {
            let slot = &mut seen[p.graha.index() as usize];
            if *slot {
                return Err(VedicError::DuplicateBody(p.graha));
            }
            *slot = true;
        }
        Ok(Self {
            ascendant_longitude: normalize_360(ascendant_longitude),
            positions,
            birth,
        })
    }

    /// Build from (graha, longitude, retrograde) triples, deriving houses from the ascendant.
    pub fn from_longitudes(
        ascendant_longitude: f64,
        longitudes: &[(Graha, f64, bool)],
        birth: NaiveDateTime,
    ) -> Result<Self, VedicError> {
        let asc = Rashi::from_longitude(ascendant_longitude);
        let positions = longitudes
            .iter()
            .map(|&(g, lon, retro)| PlanetPosition::from_longitude(g, lon, retro, asc))
            .collect();
        Self::new(ascendant_longitude, positions, birth)
    }

    pub fn ascendant_longitude(&self) -> f64 {
        self.ascendant_longitude
    }

    pub fn ascendant(&self) -> Rashi {
        Rashi::from_longitude(self.ascendant_longitude)
    }

    pub fn birth(&self) -> NaiveDateTime {
        self.birth
    }

    pub fn positions(&self) -> &[PlanetPosition] {
        &self.positions
    }

    /// Position of a graha, None when the chart does not carry it.
    pub fn position(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.positions.iter().find(|p| p.graha == graha)
    }

    /// Grahas occupying a sign, in chart order.
    pub fn occupants(&self, rashi: Rashi) -> impl Iterator<Item = Graha> + '_ {
        self.positions
            .iter()
            .filter(move |p| p.rashi == rashi)
            .map(|p| p.graha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn birth() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(1990, 5, 17)
            .and_then(|d| d.and_hms_opt(6, 30, 0))
            .unwrap()
    }

    #[test]
    fn derived_fields() {
        let p = PlanetPosition::from_longitude(Graha::Chandra, 225.0, false, Rashi::Mesha);
        assert_eq!(p.rashi, Rashi::Vrischika);
        assert_eq!(p.house, 8);
        assert!((p.degree_in_rashi - 15.0).abs() < 1e-12);
    }

    #[test]
    fn duplicate_bodies_rejected() {
        let r = ChartContext::from_longitudes(
            10.0,
            &[(Graha::Surya, 40.0, false), (Graha::Surya, 41.0, false)],
            birth(),
        );
        assert_eq!(r, Err(VedicError::DuplicateBody(Graha::Surya)));
    }

    #[test]
    fn lookup_and_occupants() {
        let chart = ChartContext::from_longitudes(
            10.0,
            &[
                (Graha::Surya, 40.0, false),
                (Graha::Buddh, 45.0, true),
                (Graha::Guru, 100.0, false),
            ],
            birth(),
        )
        .unwrap();
        assert_eq!(chart.ascendant(), Rashi::Mesha);
        assert!(chart.position(Graha::Buddh).is_some_and(|p| p.retrograde));
        assert!(chart.position(Graha::Shani).is_none());
        let occ: Vec<Graha> = chart.occupants(Rashi::Vrishabha).collect();
        assert_eq!(occ, vec![Graha::Surya, Graha::Buddh]);
    }
}
