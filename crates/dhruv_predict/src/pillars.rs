//! The three scoring pillars: dasha lords, gochara (transits from the natal
//! Moon) and ashtakavarga bindus.
//!
//! Each pillar reduces to a [`PillarScore`] in [0, 100]; 50 is neutral.
//!
//! Transit tables follow Phaladeepika (Gochara Phala): favorable and neutral
//! houses counted from the natal Moon, and the vedha house that obstructs each
//! favorable one.

use dhruv_vedic_base::{
    AshtakavargaTables, ChartContext, DashaLevel, DashaLords, Dignity, FunctionalNature, Graha,
    Rashi, dignity_at, functional_nature, house_from,
};
use tracing::{trace, warn};

use crate::error::PredictError;
use crate::synthesis_types::{
    BinduReading, BinduTier, GocharaPillar, GocharaReading, Pillar, PillarScore,
    SaturnConfiguration, ScoreSource, SubScore, TransitFavor, TransitPlacement,
};
use crate::yoga_types::{SeverityTier, YogaAnalysisResult};

/// Score of a level or transit with nothing to say.
pub const NEUTRAL_SCORE: f64 = 50.0;

// ---------------------------------------------------------------------------
// Dasha pillar
// ---------------------------------------------------------------------------

/// Weight of each predictive dasha level.
pub const DASHA_LEVEL_WEIGHTS: [(DashaLevel, f64); 3] = [
    (DashaLevel::Mahadasha, 0.50),
    (DashaLevel::Antardasha, 0.35),
    (DashaLevel::Pratyantardasha, 0.15),
];

pub const fn functional_base_score(nature: FunctionalNature) -> f64 {
    match nature {
        FunctionalNature::Benefic => 70.0,
        FunctionalNature::Mixed => 55.0,
        FunctionalNature::Neutral => 50.0,
        FunctionalNature::Malefic => 35.0,
    }
}

pub const fn dignity_multiplier(dignity: Dignity) -> f64 {
    match dignity {
        Dignity::Exalted => 1.5,
        Dignity::Moolatrikone => 1.4,
        Dignity::OwnSign => 1.3,
        Dignity::Friend => 1.15,
        Dignity::Neutral => 1.0,
        Dignity::Enemy => 0.75,
        Dignity::Debilitated => 0.5,
    }
}

/// Points taken from a level whose lord activates a still-active yoga.
pub const fn yoga_penalty(severity: SeverityTier) -> f64 {
    match severity {
        SeverityTier::ActiveSevere => 15.0,
        SeverityTier::ActiveModerate => 10.0,
        SeverityTier::WeaklyCancelled => 5.0,
        _ => 0.0,
    }
}

/// Score of one dasha lord: functional base times dignity multiplier, clamped.
pub fn score_dasha_lord(chart: &ChartContext, lord: Graha) -> Option<f64> {
    let pos = chart.position(lord)?;
    let base = functional_base_score(functional_nature(lord, chart.ascendant()));
    let mult = dignity_multiplier(dignity_at(lord, pos.longitude));
    Some((base * mult).clamp(0.0, 100.0))
}

/// Weighted mean over Maha/Antar/Pratyantar lords.
///
/// A level without a running period, or whose lord the chart does not carry,
/// contributes [`NEUTRAL_SCORE`]. With `yoga`, a level whose lord activates the
/// yoga loses [`yoga_penalty`] points.
pub fn score_dasha_pillar(
    chart: &ChartContext,
    lords: &DashaLords,
    yoga: Option<&YogaAnalysisResult>,
) -> PillarScore {
    let sub_scores = DASHA_LEVEL_WEIGHTS
        .iter()
        .map(|&(level, weight)| {
            let score = match lords.at(level) {
                None => {
                    trace!(level = level.name(), "no running period");
                    NEUTRAL_SCORE
                }
                Some(lord) => {
                    let base = score_dasha_lord(chart, lord).unwrap_or_else(|| {
                        warn!(lord = %lord, level = level.name(), "dasha lord missing from chart, scoring neutral");
                        NEUTRAL_SCORE
                    });
                    let penalty = yoga
                        .filter(|y| y.activation_for(lord).is_some())
                        .map_or(0.0, |y| yoga_penalty(y.severity));
                    (base - penalty).clamp(0.0, 100.0)
                }
            };
            SubScore {
                source: ScoreSource::Dasha(level),
                score,
                weight,
            }
        })
        .collect();
    PillarScore::from_sub_scores(Pillar::Dasha, sub_scores, 1.0)
}

// ---------------------------------------------------------------------------
// Gochara pillar
// ---------------------------------------------------------------------------

/// Relative weight of each transiting body; slower bodies weigh more.
pub const fn transit_weight(graha: Graha) -> f64 {
    match graha {
        Graha::Shani => 1.5,
        Graha::Guru => 1.4,
        Graha::Rahu | Graha::Ketu => 1.3,
        Graha::Mangal => 1.0,
        Graha::Surya | Graha::Shukra => 0.8,
        Graha::Buddh => 0.7,
        Graha::Chandra => 0.5,
    }
}

/// Favorable houses from the natal Moon.
pub const fn favorable_houses(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Surya | Graha::Rahu | Graha::Ketu => &[3, 6, 10, 11],
        Graha::Chandra => &[1, 3, 6, 7, 10, 11],
        Graha::Mangal | Graha::Shani => &[3, 6, 11],
        Graha::Buddh => &[2, 4, 6, 8, 10, 11],
        Graha::Guru => &[2, 5, 7, 9, 11],
        Graha::Shukra => &[1, 2, 3, 4, 5, 8, 9, 11, 12],
    }
}

/// Neutral houses from the natal Moon.
pub const fn neutral_houses(graha: Graha) -> &'static [u8] {
    match graha {
        Graha::Surya | Graha::Rahu | Graha::Ketu => &[1, 2, 5],
        Graha::Chandra => &[2, 5],
        Graha::Mangal => &[1, 10],
        Graha::Buddh => &[1, 3, 5],
        Graha::Guru => &[1, 4, 6, 8, 10],
        Graha::Shukra => &[6, 7, 10],
        Graha::Shani => &[1, 2, 10],
    }
}

/// (favorable house, vedha house) pairs. The nodes have none.
pub const fn vedha_pairs(graha: Graha) -> &'static [(u8, u8)] {
    match graha {
        Graha::Surya => &[(3, 9), (6, 12), (10, 4), (11, 5)],
        Graha::Chandra => &[(1, 5), (3, 9), (6, 12), (7, 2), (10, 4), (11, 8)],
        Graha::Mangal | Graha::Shani => &[(3, 12), (6, 9), (11, 5)],
        Graha::Buddh => &[(2, 5), (4, 3), (6, 9), (8, 1), (10, 8), (11, 12)],
        Graha::Guru => &[(2, 12), (5, 4), (7, 3), (9, 10), (11, 8)],
        Graha::Shukra => &[
            (1, 8),
            (2, 7),
            (3, 1),
            (4, 10),
            (5, 9),
            (8, 5),
            (9, 11),
            (11, 6),
            (12, 3),
        ],
        Graha::Rahu | Graha::Ketu => &[],
    }
}

/// Vedha house obstructing `graha` in `house`, if the pair exists.
pub fn vedha_house(graha: Graha, house: u8) -> Option<u8> {
    vedha_pairs(graha)
        .iter()
        .find(|&&(fav, _)| fav == house)
        .map(|&(_, v)| v)
}

pub fn transit_favor(graha: Graha, house: u8) -> TransitFavor {
    if favorable_houses(graha).contains(&house) {
        TransitFavor::Favorable
    } else if neutral_houses(graha).contains(&house) {
        TransitFavor::Neutral
    } else {
        TransitFavor::Unfavorable
    }
}

/// Score one transit from the natal Moon sign.
///
/// The base comes from the house tables. A favorable reading is then
/// overridden to [`NEUTRAL_SCORE`] when any body in `obstructing` other than
/// the transiting one occupies its vedha house. Retrograde motion scales
/// unobstructed favorable readings by 1.1 and unfavorable ones by 0.9.
pub fn score_gochara_transit(
    natal_moon: Rashi,
    transit: &TransitPlacement,
    obstructing: &[TransitPlacement],
) -> GocharaReading {
    let house = house_from(natal_moon, transit.rashi);
    let favor = transit_favor(transit.graha, house);

    let mut score = match favor {
        TransitFavor::Favorable => 70.0 + 2.0 * house as f64,
        TransitFavor::Neutral => NEUTRAL_SCORE,
        TransitFavor::Unfavorable if matches!(house, 6 | 8 | 12) => 20.0,
        TransitFavor::Unfavorable => 30.0,
    };

    let vedha_by = match (favor, vedha_house(transit.graha, house)) {
        (TransitFavor::Favorable, Some(vh)) => obstructing
            .iter()
            .find(|o| o.graha != transit.graha && house_from(natal_moon, o.rashi) == vh)
            .map(|o| o.graha),
        _ => None,
    };
    if vedha_by.is_some() {
        score = NEUTRAL_SCORE;
    } else if transit.retrograde {
        match favor {
            TransitFavor::Favorable => score *= 1.1,
            TransitFavor::Unfavorable => score *= 0.9,
            TransitFavor::Neutral => {}
        }
    }

    GocharaReading {
        graha: transit.graha,
        house,
        favor,
        vedha_by,
        retrograde: transit.retrograde,
        score: score.clamp(0.0, 100.0),
    }
}

/// Aggregate all transits, weighted by [`transit_weight`], then apply the
/// Saturn configuration multiplier.
pub fn score_gochara_pillar(
    chart: &ChartContext,
    transits: &[TransitPlacement],
) -> Result<GocharaPillar, PredictError> {
    let moon = chart
        .position(Graha::Chandra)
        .ok_or(PredictError::MissingInput {
            body: Graha::Chandra,
            context: "natal Moon for gochara",
        })?
        .rashi;

    let readings: Vec<GocharaReading> = transits
        .iter()
        .map(|t| score_gochara_transit(moon, t, transits))
        .collect();
    let saturn = readings
        .iter()
        .find(|r| r.graha == Graha::Shani)
        .and_then(|r| SaturnConfiguration::from_house(r.house));

    let sub_scores = readings
        .iter()
        .map(|r| SubScore {
            source: ScoreSource::Transit(r.graha),
            score: r.score,
            weight: transit_weight(r.graha),
        })
        .collect();
    let mut score = PillarScore::from_sub_scores(
        Pillar::Gochara,
        sub_scores,
        saturn.map_or(1.0, SaturnConfiguration::multiplier),
    );
    score.obstructed = readings.iter().any(GocharaReading::is_obstructed);

    Ok(GocharaPillar {
        score,
        readings,
        saturn,
    })
}

// ---------------------------------------------------------------------------
// Ashtakavarga pillar
// ---------------------------------------------------------------------------

/// Minimum BAV bindus for a favorable transit.
pub const FAVORABLE_BAV: u8 = 4;
/// Minimum SAV bindus for a favorable transit.
pub const FAVORABLE_SAV: u8 = 28;

/// Score a body transiting `rashi` on its BAV and the sign's SAV.
///
/// Rahu and Ketu have no bindu table and are rejected as a configuration error.
pub fn score_ashtakavarga_transit(
    graha: Graha,
    rashi: Rashi,
    tables: &AshtakavargaTables,
) -> Result<BinduReading, PredictError> {
    let bav = tables
        .bav_bindus(graha, rashi)
        .map_err(|e| PredictError::config(e.to_string()))?;
    let sav = tables.sav_bindus(rashi);
    let favorable = bav >= FAVORABLE_BAV && sav >= FAVORABLE_SAV;
    let mut score = bav as f64 / 8.0 * 60.0 + sav as f64 / 40.0 * 30.0;
    if favorable {
        score += 10.0;
    }
    Ok(BinduReading {
        graha,
        rashi,
        bav,
        sav,
        tier: BinduTier::from_bindus(bav),
        favorable,
        score: score.clamp(0.0, 100.0),
    })
}

/// Aggregate the sapta graha transits; nodes are skipped.
pub fn score_ashtakavarga_pillar(
    transits: &[TransitPlacement],
    tables: &AshtakavargaTables,
) -> Result<PillarScore, PredictError> {
    let sub_scores = transits
        .iter()
        .filter(|t| !t.graha.is_node())
        .map(|t| {
            let reading = score_ashtakavarga_transit(t.graha, t.rashi, tables)?;
            Ok(SubScore {
                source: ScoreSource::Bindu(t.graha),
                score: reading.score,
                weight: transit_weight(t.graha),
            })
        })
        .collect::<Result<Vec<_>, PredictError>>()?;
    Ok(PillarScore::from_sub_scores(Pillar::Ashtakavarga, sub_scores, 1.0))
}
