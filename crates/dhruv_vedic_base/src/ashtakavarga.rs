//! Ashtakavarga (benefic point) tables.
//!
//! `AshtakavargaTables` holds the two lookups the predictive engines read:
//! Sarvashtakavarga (sign -> bindus) and Bhinna Ashtakavarga
//! (graha -> sign -> bindus). Tables normally arrive precomputed from a chart
//! service; `AshtakavargaTables::from_chart` rebuilds them from the BPHS
//! contribution rules when only positions are at hand.
//!
//! Chart-independent totals: Sun 48, Moon 49, Mars 39, Mercury 54,
//! Jupiter 56, Venus 52, Saturn 39; SAV 337.
//!
//! Clean-room implementation from BPHS (Brihat Parashara Hora Shastra).

use serde::{Deserialize, Serialize};

use crate::chart::ChartContext;
use crate::error::VedicError;
use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::rashi::Rashi;

// ---------------------------------------------------------------------------
// Rules table (bitmask encoding)
// ---------------------------------------------------------------------------

/// Build a bitmask from 1-based offset values.
/// Bit i is set if offset i appears in the list.
const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1u16 << offsets[i];
        i += 1;
    }
    mask
}

/// Contribution rules: RULES[target_graha][contributor] = bitmask of favorable offsets.
///
/// target_graha: 0=Sun, 1=Moon, 2=Mars, 3=Mercury, 4=Jupiter, 5=Venus, 6=Saturn
/// contributor:  0=Sun, 1=Moon, 2=Mars, 3=Mercury, 4=Jupiter, 5=Venus, 6=Saturn, 7=Lagna
///
/// Offsets are 1-based (1=same rashi, 2=next rashi, ..., 12=previous rashi).
/// Source: BPHS standard rules.
const RULES: [[u16; 8]; 7] = [
    // Sun (total: 48)
    [
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),     // from Sun
        bits(&[3, 6, 10, 11]),                    // from Moon
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),       // from Mars
        bits(&[3, 5, 6, 9, 10, 11, 12]),          // from Mercury
        bits(&[5, 6, 9, 11]),                      // from Jupiter
        bits(&[6, 7, 12]),                         // from Venus
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),       // from Saturn
        bits(&[3, 4, 6, 10, 11, 12]),             // from Lagna
    ],
    // Moon (total: 49)
    [
        bits(&[3, 6, 7, 8, 10, 11]),             // from Sun
        bits(&[1, 3, 6, 7, 10, 11]),             // from Moon
        bits(&[2, 3, 5, 6, 9, 10, 11]),          // from Mars
        bits(&[1, 3, 4, 5, 7, 8, 10, 11]),       // from Mercury
        bits(&[1, 4, 7, 8, 10, 11, 12]),          // from Jupiter
        bits(&[3, 4, 5, 7, 9, 10, 11]),           // from Venus
        bits(&[3, 5, 6, 11]),                      // from Saturn
        bits(&[3, 6, 10, 11]),                     // from Lagna
    ],
    // Mars (total: 39)
    [
        bits(&[3, 5, 6, 10, 11]),                 // from Sun
        bits(&[3, 6, 11]),                         // from Moon
        bits(&[1, 2, 4, 7, 8, 10, 11]),           // from Mars
        bits(&[3, 5, 6, 11]),                      // from Mercury
        bits(&[6, 10, 11, 12]),                    // from Jupiter
        bits(&[6, 8, 11, 12]),                     // from Venus
        bits(&[1, 4, 7, 8, 9, 10, 11]),           // from Saturn
        bits(&[1, 3, 6, 10, 11]),                  // from Lagna
    ],
    // Mercury (total: 54)
    [
        bits(&[5, 6, 9, 11, 12]),                 // from Sun
        bits(&[2, 4, 6, 8, 10, 11]),              // from Moon
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),        // from Mars
        bits(&[1, 3, 5, 6, 9, 10, 11, 12]),       // from Mercury
        bits(&[6, 8, 11, 12]),                     // from Jupiter
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),         // from Venus
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),        // from Saturn
        bits(&[1, 2, 4, 6, 8, 10, 11]),            // from Lagna
    ],
    // Jupiter (total: 56)
    [
        bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]),    // from Sun
        bits(&[2, 5, 7, 9, 11]),                   // from Moon
        bits(&[1, 2, 4, 7, 8, 10, 11]),            // from Mars
        bits(&[1, 2, 4, 5, 6, 9, 10, 11]),         // from Mercury
        bits(&[1, 2, 3, 4, 7, 8, 10, 11]),         // from Jupiter
        bits(&[2, 5, 6, 9, 10, 11]),               // from Venus
        bits(&[3, 5, 6, 12]),                       // from Saturn
        bits(&[1, 2, 4, 5, 6, 7, 9, 10, 11]),     // from Lagna
    ],
    // Venus (total: 52)
    [
        bits(&[8, 11, 12]),                        // from Sun
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]),     // from Moon
        bits(&[3, 4, 6, 9, 11, 12]),               // from Mars
        bits(&[3, 5, 6, 9, 11]),                    // from Mercury
        bits(&[5, 8, 9, 10, 11]),                   // from Jupiter
        bits(&[1, 2, 3, 4, 5, 8, 9, 10, 11]),      // from Venus
        bits(&[3, 4, 5, 8, 9, 10, 11]),             // from Saturn
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),           // from Lagna
    ],
    // Saturn (total: 39)
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]),           // from Sun
        bits(&[3, 6, 11]),                          // from Moon
        bits(&[3, 5, 6, 10, 11, 12]),              // from Mars
        bits(&[6, 8, 9, 10, 11, 12]),              // from Mercury
        bits(&[5, 6, 11, 12]),                      // from Jupiter
        bits(&[6, 11, 12]),                         // from Venus
        bits(&[3, 5, 6, 11]),                       // from Saturn
        bits(&[1, 3, 4, 6, 10, 11]),               // from Lagna
    ],
];


/// BAV totals per sapta graha, identical for every chart.
pub const BAV_TOTALS: [u8; 7] = [48, 49, 39, 54, 56, 52, 39];

/// SAV total, identical for every chart.
pub const SAV_TOTAL: u16 = 337;

/// Most bindus a single BAV cell can hold (7 grahas + lagna).
pub const MAX_BAV_BINDUS: u8 = 8;

// ---------------------------------------------------------------------------
// Bindu computation
// ---------------------------------------------------------------------------

/// Bindus for one target graha in every rashi.
///
/// `contributors` holds the rashis of the 7 sapta grahas followed by the lagna.
fn bav_points(target: usize, contributors: &[Rashi; 8]) -> [u8; 12] {
    let rules = &RULES[target];
    let mut points = [0u8; 12];
    for (rashi_idx, cell) in points.iter_mut().enumerate() {
        *cell = contributors
            .iter()
            .zip(rules.iter())
            .filter(|&(from, &mask)| {
                let offset = (rashi_idx as i16 - from.index() as i16).rem_euclid(12) + 1;
                (mask >> offset) & 1 == 1
            })
            .count() as u8;
    }
    points
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Sign -> bindu and graha -> sign -> bindu lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AshtakavargaTables {
    /// Sarvashtakavarga, indexed by 0-based rashi.
    sav: [u8; 12],
    /// Bhinna ashtakavarga per sapta graha (SAPTA_GRAHAS order), indexed by rashi.
    bav: [[u8; 12]; 7],
}

impl AshtakavargaTables {
    /// Wrap externally supplied BAV tables; SAV is their column sum.
    pub fn from_bav(bav: [[u8; 12]; 7]) -> Self {
        let mut sav = [0u8; 12];
        for row in &bav {
            for (total, &b) in sav.iter_mut().zip(row.iter()) {
                *total = total.saturating_add(b);
            }
        }
        Self { sav, bav }
    }

    /// Wrap externally supplied tables where SAV was computed (or reduced) separately.
    pub fn new(sav: [u8; 12], bav: [[u8; 12]; 7]) -> Self {
        Self { sav, bav }
    }

    /// Compute the tables from a chart's sapta graha signs and lagna.
    ///
    /// Returns `None` when any sapta graha is missing from the chart.
    pub fn from_chart(chart: &ChartContext) -> Option<Self> {
        let mut contributors = [chart.ascendant(); 8];
        for (slot, g) in contributors.iter_mut().zip(SAPTA_GRAHAS) {
            *slot = chart.position(g)?.rashi;
        }
        let mut bav = [[0u8; 12]; 7];
        for (target, row) in bav.iter_mut().enumerate() {
            *row = bav_points(target, &contributors);
        }
        Some(Self::from_bav(bav))
    }

    /// SAV bindus of a rashi.
    pub fn sav_bindus(&self, rashi: Rashi) -> u8 {
        self.sav[rashi.index() as usize]
    }

    /// BAV bindus of a graha in a rashi. Rahu/Ketu have no table.
    pub fn bav_bindus(&self, graha: Graha, rashi: Rashi) -> Result<u8, VedicError> {
        let idx = graha
            .sapta_index()
            .ok_or(VedicError::MissingBinduTable(graha))?;
        Ok(self.bav[idx][rashi.index() as usize])
    }

    /// Full BAV row for a graha.
    pub fn bav_row(&self, graha: Graha) -> Result<&[u8; 12], VedicError> {
        let idx = graha
            .sapta_index()
            .ok_or(VedicError::MissingBinduTable(graha))?;
        Ok(&self.bav[idx])
    }

    pub fn sav(&self) -> &[u8; 12] {
        &self.sav
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn chart_with(signs: [u8; 7], lagna: u8) -> ChartContext {
        let lons: Vec<(Graha, f64, bool)> = SAPTA_GRAHAS
            .iter()
            .zip(signs)
            .map(|(&g, s)| (g, s as f64 * 30.0 + 12.0, false))
            .collect();
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        ChartContext::from_longitudes(lagna as f64 * 30.0 + 5.0, &lons, birth).unwrap()
    }

    #[test]
    fn rules_table_bav_totals() {
        for (graha, &expected) in BAV_TOTALS.iter().enumerate() {
            let total: u32 = RULES[graha].iter().map(|&mask| mask.count_ones()).sum();
            assert_eq!(total as u8, expected, "rule count for graha {graha}");
        }
    }

    #[test]
    fn totals_hold_for_any_chart() {
        for (signs, lagna) in [([0u8; 7], 0u8), ([3, 7, 0, 11, 5, 9, 2], 1), ([5, 2, 8, 10, 1, 6, 4], 9)] {
            let tables = AshtakavargaTables::from_chart(&chart_with(signs, lagna)).unwrap();
            for (i, g) in SAPTA_GRAHAS.iter().enumerate() {
                let row_total: u8 = tables.bav_row(*g).unwrap().iter().sum();
                assert_eq!(row_total, BAV_TOTALS[i], "{g:?} in {signs:?}");
            }
            let sav_total: u16 = tables.sav().iter().map(|&b| b as u16).sum();
            assert_eq!(sav_total, SAV_TOTAL);
        }
    }

    #[test]
    fn cells_never_exceed_eight() {
        let tables = AshtakavargaTables::from_chart(&chart_with([3, 7, 0, 11, 5, 9, 2], 1)).unwrap();
        for g in SAPTA_GRAHAS {
            assert!(tables.bav_row(g).unwrap().iter().all(|&b| b <= MAX_BAV_BINDUS));
        }
    }

    #[test]
    fn nodes_have_no_table() {
        let tables = AshtakavargaTables::from_bav([[4; 12]; 7]);
        assert_eq!(
            tables.bav_bindus(Graha::Rahu, Rashi::Mesha),
            Err(VedicError::MissingBinduTable(Graha::Rahu))
        );
        assert_eq!(tables.bav_bindus(Graha::Guru, Rashi::Mesha), Ok(4));
        assert_eq!(tables.sav_bindus(Rashi::Tula), 28);
    }

    #[test]
    fn incomplete_chart_yields_none() {
        let birth = NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap();
        let chart = ChartContext::from_longitudes(5.0, &[(Graha::Surya, 10.0, false)], birth).unwrap();
        assert!(AshtakavargaTables::from_chart(&chart).is_none());
    }
}
