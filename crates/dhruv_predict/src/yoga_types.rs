//! Types for yoga formation, cancellation (bhanga) and impact assessment.

use dhruv_vedic_base::{Dignity, Graha, LunarPhase, MoonBrightness, Rashi};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Formation
// ---------------------------------------------------------------------------

/// Formation test of a lunar-isolation yoga around a reference body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YogaFormation {
    pub reference: Graha,
    pub reference_rashi: Rashi,
    /// No eligible body in the 2nd sign from the reference.
    pub second_house_empty: bool,
    /// No eligible body in the 12th sign from the reference.
    pub twelfth_house_empty: bool,
    /// No eligible body in the reference sign itself.
    pub reference_unaccompanied: bool,
    pub bodies_in_second: Vec<Graha>,
    pub bodies_in_twelfth: Vec<Graha>,
    pub bodies_conjunct: Vec<Graha>,
    /// 0..=100; 0 when not formed.
    pub strength: u8,
}

impl YogaFormation {
    /// All conditions hold at once.
    pub fn is_formed(&self) -> bool {
        self.second_house_empty && self.twelfth_house_empty && self.reference_unaccompanied
    }
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

/// Closed catalog of cancellation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CancellationType {
    /// A body in a kendra from the reference body.
    KendraFromReference,
    /// A body in a kendra from the ascendant.
    KendraFromLagna,
    /// The reference body itself in a kendra from the ascendant.
    ReferenceInKendra,
    JupiterAspect,
    VenusAspect,
    /// A natural benefic in the reference sign.
    BeneficConjunction,
    ReferenceExalted,
    ReferenceOwnSign,
    /// The Moon is full or nearly so.
    BrightMoon,
}

/// Every cancellation type, in evaluation order.
pub const ALL_CANCELLATION_TYPES: [CancellationType; 9] = [
    CancellationType::KendraFromReference,
    CancellationType::KendraFromLagna,
    CancellationType::ReferenceInKendra,
    CancellationType::JupiterAspect,
    CancellationType::VenusAspect,
    CancellationType::BeneficConjunction,
    CancellationType::ReferenceExalted,
    CancellationType::ReferenceOwnSign,
    CancellationType::BrightMoon,
];

impl CancellationType {
    /// Classical strength on a 1..=3 scale.
    pub const fn classical_strength(self) -> u8 {
        match self {
            Self::KendraFromReference
            | Self::ReferenceInKendra
            | Self::JupiterAspect
            | Self::BeneficConjunction
            | Self::ReferenceExalted
            | Self::ReferenceOwnSign => 3,
            Self::KendraFromLagna | Self::VenusAspect | Self::BrightMoon => 2,
        }
    }

    /// Score contributed when the rule holds.
    pub const fn weight(self) -> u32 {
        self.classical_strength() as u32 * 10
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::KendraFromReference => "Kendra from reference",
            Self::KendraFromLagna => "Kendra from lagna",
            Self::ReferenceInKendra => "Reference in kendra",
            Self::JupiterAspect => "Jupiter aspect",
            Self::VenusAspect => "Venus aspect",
            Self::BeneficConjunction => "Benefic conjunction",
            Self::ReferenceExalted => "Reference exalted",
            Self::ReferenceOwnSign => "Reference in own sign",
            Self::BrightMoon => "Bright Moon",
        }
    }
}

/// One satisfied cancellation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancellationFactor {
    pub kind: CancellationType,
    /// Body that satisfied the rule, when the rule is about a body.
    pub graha: Option<Graha>,
    /// House (from the rule's own reference point) involved, when any.
    pub house: Option<u8>,
    pub weight: u32,
    pub effective: bool,
}

impl CancellationFactor {
    pub const fn new(kind: CancellationType, graha: Option<Graha>, house: Option<u8>) -> Self {
        Self {
            kind,
            graha,
            house,
            weight: kind.weight(),
            effective: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Residual severity after cancellation, least severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityTier {
    /// The yoga is not formed.
    NotPresent,
    FullyCancelled,
    MostlyCancelled,
    PartiallyCancelled,
    WeaklyCancelled,
    ActiveModerate,
    ActiveSevere,
}

impl SeverityTier {
    /// 0 (no effect) to 5 (full effect).
    pub const fn rank(self) -> u8 {
        match self {
            Self::NotPresent | Self::FullyCancelled => 0,
            Self::MostlyCancelled => 1,
            Self::PartiallyCancelled => 2,
            Self::WeaklyCancelled => 3,
            Self::ActiveModerate => 4,
            Self::ActiveSevere => 5,
        }
    }

    /// rank / 5.
    pub fn factor(self) -> f64 {
        self.rank() as f64 / 5.0
    }

    /// Nothing remains to remedy.
    pub const fn is_nullified(self) -> bool {
        matches!(self, Self::NotPresent | Self::FullyCancelled)
    }
}

// ---------------------------------------------------------------------------
// Reference analysis
// ---------------------------------------------------------------------------

/// State of the reference body feeding impact modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceAnalysis {
    pub graha: Graha,
    pub rashi: Rashi,
    pub degree_in_rashi: f64,
    pub house: u8,
    pub dignity: Dignity,
    /// Present when the reference is the Moon and the Sun is in the chart.
    pub phase: Option<LunarPhase>,
    pub dispositor: Graha,
    /// None when the dispositor is not in the chart.
    pub dispositor_dignity: Option<Dignity>,
}

// ---------------------------------------------------------------------------
// Impacts
// ---------------------------------------------------------------------------

/// Life area affected by the yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeArea {
    Emotional,
    Financial,
    Social,
}

/// A scored facet of a life area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactMetric {
    MentalPeace,
    EmotionalStability,
    Confidence,
    AnxietyTendency,
    DepressionRisk,
    WealthRetention,
    FinancialStability,
    UnexpectedExpenses,
    SupportFromOthers,
    FamilySupport,
    FriendshipQuality,
    PublicImage,
    IsolationTendency,
}

/// Every metric, grouped by area.
pub const ALL_IMPACT_METRICS: [ImpactMetric; 13] = [
    ImpactMetric::MentalPeace,
    ImpactMetric::EmotionalStability,
    ImpactMetric::Confidence,
    ImpactMetric::AnxietyTendency,
    ImpactMetric::DepressionRisk,
    ImpactMetric::WealthRetention,
    ImpactMetric::FinancialStability,
    ImpactMetric::UnexpectedExpenses,
    ImpactMetric::SupportFromOthers,
    ImpactMetric::FamilySupport,
    ImpactMetric::FriendshipQuality,
    ImpactMetric::PublicImage,
    ImpactMetric::IsolationTendency,
];

impl ImpactMetric {
    pub const fn area(self) -> LifeArea {
        match self {
            Self::MentalPeace
            | Self::EmotionalStability
            | Self::Confidence
            | Self::AnxietyTendency
            | Self::DepressionRisk => LifeArea::Emotional,
            Self::WealthRetention
            | Self::FinancialStability
            | Self::UnexpectedExpenses
            | Self::SupportFromOthers => LifeArea::Financial,
            Self::FamilySupport
            | Self::FriendshipQuality
            | Self::PublicImage
            | Self::IsolationTendency => LifeArea::Social,
        }
    }

    /// Tendency/risk metrics grow with severity; the rest shrink.
    pub const fn is_adverse(self) -> bool {
        matches!(
            self,
            Self::AnxietyTendency
                | Self::DepressionRisk
                | Self::UnexpectedExpenses
                | Self::IsolationTendency
        )
    }

    /// Points moved by a full-severity yoga.
    pub const fn severity_span(self) -> u8 {
        match self {
            Self::MentalPeace | Self::WealthRetention | Self::FriendshipQuality => 50,
            Self::EmotionalStability | Self::FinancialStability => 45,
            Self::Confidence | Self::PublicImage => 40,
            Self::DepressionRisk | Self::UnexpectedExpenses | Self::FamilySupport => 55,
            Self::AnxietyTendency | Self::SupportFromOthers | Self::IsolationTendency => 60,
        }
    }
}

/// Qualitative impact, from the severity rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ImpactLevel {
    Positive,
    Minimal,
    Mild,
    Moderate,
    High,
    Severe,
}

impl ImpactLevel {
    pub const fn from_severity(severity: SeverityTier) -> Self {
        match severity.rank() {
            0 => Self::Positive,
            1 => Self::Minimal,
            2 => Self::Mild,
            3 => Self::Moderate,
            4 => Self::High,
            _ => Self::Severe,
        }
    }
}

/// Inputs that shift impact scores away from the severity baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpactModifiers {
    /// None when the phase could not be computed.
    pub brightness: Option<MoonBrightness>,
    pub dignity: Dignity,
    /// A Jupiter-aspect cancellation is present.
    pub jupiter_aspect: bool,
    /// Lord of the 2nd from the ascendant is exalted, moolatrikone or in own sign.
    pub second_lord_dignified: bool,
    /// Lord of the 4th from the ascendant is exalted, moolatrikone or in own sign.
    pub fourth_lord_dignified: bool,
}

impl Default for ImpactModifiers {
    fn default() -> Self {
        Self {
            brightness: None,
            dignity: Dignity::Neutral,
            jupiter_aspect: false,
            second_lord_dignified: false,
            fourth_lord_dignified: false,
        }
    }
}

/// One metric's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricScore {
    pub metric: ImpactMetric,
    /// 0..=100. Higher is better for supportive metrics and worse for
    /// tendency/risk metrics (see [`ImpactMetric::is_adverse`]).
    pub score: u8,
}

/// Scores of one life area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaImpact {
    pub area: LifeArea,
    pub level: ImpactLevel,
    pub metrics: Vec<MetricScore>,
}

impl AreaImpact {
    pub fn score(&self, metric: ImpactMetric) -> Option<u8> {
        self.metrics
            .iter()
            .find(|m| m.metric == metric)
            .map(|m| m.score)
    }
}

// ---------------------------------------------------------------------------
// Activation and remedies
// ---------------------------------------------------------------------------

/// Why a period activates the yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivationRole {
    /// The reference body's own period.
    Primary,
    /// Periods that intensify lunar affliction.
    Amplifier,
    /// The reference sign's lord.
    Dispositor,
}

/// A dasha lord whose period brings the yoga's results forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationPeriod {
    pub graha: Graha,
    pub role: ActivationRole,
    /// 1..=5.
    pub intensity: u8,
}

/// Remedy family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemedyCategory {
    Mantra,
    Donation,
    Fasting,
    Gemstone,
    Puja,
    Lifestyle,
    Yantra,
}

/// Closed catalog of remedies for lunar affliction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemedyKind {
    ChandraBeejaMantra,
    ShivaAbhisheka,
    MondayWhiteDonation,
    MondayFast,
    PearlOrMoonstone,
    ChandraYantra,
    ServeMother,
    EveningMeditation,
    /// Maintenance practice when nothing remains to remedy.
    MondayMoonWorship,
}

impl RemedyKind {
    pub const fn category(self) -> RemedyCategory {
        match self {
            Self::ChandraBeejaMantra => RemedyCategory::Mantra,
            Self::ShivaAbhisheka => RemedyCategory::Puja,
            Self::MondayWhiteDonation => RemedyCategory::Donation,
            Self::MondayFast => RemedyCategory::Fasting,
            Self::PearlOrMoonstone => RemedyCategory::Gemstone,
            Self::ChandraYantra => RemedyCategory::Yantra,
            Self::ServeMother | Self::EveningMeditation | Self::MondayMoonWorship => {
                RemedyCategory::Lifestyle
            }
        }
    }

    /// 1 is most important.
    pub const fn priority(self) -> u8 {
        match self {
            Self::ChandraBeejaMantra | Self::ShivaAbhisheka => 1,
            Self::MondayWhiteDonation | Self::MondayFast | Self::PearlOrMoonstone => 2,
            Self::ChandraYantra
            | Self::ServeMother
            | Self::EveningMeditation
            | Self::MondayMoonWorship => 3,
        }
    }
}

/// A recommended remedy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remedy {
    pub kind: RemedyKind,
    pub category: RemedyCategory,
    pub priority: u8,
}

impl From<RemedyKind> for Remedy {
    fn from(kind: RemedyKind) -> Self {
        Self {
            kind,
            category: kind.category(),
            priority: kind.priority(),
        }
    }
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Complete assessment of one yoga in one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaAnalysisResult {
    pub formation: YogaFormation,
    pub reference: ReferenceAnalysis,
    pub cancellations: Vec<CancellationFactor>,
    pub cancellation_score: u32,
    pub severity: SeverityTier,
    pub impacts: Vec<AreaImpact>,
    pub activation_periods: Vec<ActivationPeriod>,
    pub remedies: Vec<Remedy>,
}

impl YogaAnalysisResult {
    pub fn impact(&self, area: LifeArea) -> Option<&AreaImpact> {
        self.impacts.iter().find(|i| i.area == area)
    }

    /// Activation entry for a dasha lord, if it activates this yoga.
    pub fn activation_for(&self, graha: Graha) -> Option<&ActivationPeriod> {
        self.activation_periods.iter().find(|p| p.graha == graha)
    }
}
