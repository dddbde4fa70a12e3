use serde::Serialize;

use crate::domain::{AgeBracket, Role, SkillDomain};

/// Per-grade competition context, surfaced for the score pipeline view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeContext {
    pub tier_code: String,
    pub known_tier: bool,
    pub tier_value: f64,
    pub arm: f64,
    pub format_modifier: f64,
    pub ccm: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PerformanceIndices {
    /// `None` when no grade had batting activity.
    pub batting: Option<f64>,
    /// `None` when no grade had bowling activity.
    pub bowling: Option<f64>,
}

impl PerformanceIndices {
    pub fn has_data(&self) -> bool {
        self.batting.is_some() || self.bowling.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Band {
    Elite,
    Advanced,
    Competent,
    Emerging,
    Developing,
    #[serde(rename = "—")]
    Unscored,
}

/// Evaluated top-down; the first threshold the score reaches wins.
const BAND_THRESHOLDS: [(u32, Band); 4] = [
    (85, Band::Elite),
    (70, Band::Advanced),
    (55, Band::Competent),
    (40, Band::Emerging),
];

impl Band {
    pub fn from_score(score: u32) -> Self {
        BAND_THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, band)| *band)
            .unwrap_or(if score > 0 { Band::Developing } else { Band::Unscored })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Band::Elite => "Elite",
            Band::Advanced => "Advanced",
            Band::Competent => "Competent",
            Band::Emerging => "Emerging",
            Band::Developing => "Developing",
            Band::Unscored => "—",
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Band::Elite => "#10B981",
            Band::Advanced => "#0075C9",
            Band::Competent => "#F59E0B",
            Band::Emerging => "#E96BB0",
            Band::Developing => "#4A4A6A",
            Band::Unscored => "#9CA3AF",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainDiagnostic {
    pub domain: SkillDomain,
    pub label: String,
    /// Mean blended rating on the 1-5 scale, `None` when nothing is rated.
    pub average: Option<f64>,
    pub percent: Option<f64>,
    pub rated_count: usize,
    pub total_count: usize,
    pub weight: f64,
}

impl DomainDiagnostic {
    pub fn is_rated(&self) -> bool {
        self.rated_count > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HolisticScore {
    pub score: u32,
    pub band: Band,
    pub completeness: u32,
    pub rated_count: usize,
    pub total_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AwarenessLabel {
    #[serde(rename = "Over-estimates")]
    OverEstimates,
    #[serde(rename = "Under-estimates")]
    UnderEstimates,
    Aligned,
    #[serde(rename = "—")]
    Unassessed,
}

impl AwarenessLabel {
    pub fn as_str(&self) -> &str {
        match self {
            AwarenessLabel::OverEstimates => "Over-estimates",
            AwarenessLabel::UnderEstimates => "Under-estimates",
            AwarenessLabel::Aligned => "Aligned",
            AwarenessLabel::Unassessed => "—",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelfAwareness {
    /// Self mean minus coach mean.
    pub gap: Option<f64>,
    pub label: AwarenessLabel,
    /// Only self ratings exist so far.
    pub provisional: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pdi {
    pub value: f64,
    pub percent: u32,
}

/// Everything the engine derives for one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub player_id: String,
    pub name: String,
    pub role: Role,
    pub age: Option<u32>,
    pub age_bracket: AgeBracket,
    pub cohort: String,
    pub grades: Vec<GradeContext>,
    pub headline_arm: f64,
    pub batting_index: Option<f64>,
    pub bowling_index: Option<f64>,
    pub cps: u32,
    pub holistic_score: u32,
    pub band: Band,
    pub completeness: u32,
    pub pdi: f64,
    pub pdi_percent: u32,
    pub cohort_percentile: u32,
    pub cohort_size: usize,
    pub age_score: u32,
    pub overall_score: u32,
    pub domain_breakdown: Vec<DomainDiagnostic>,
    pub self_awareness: SelfAwareness,
    pub trajectory: bool,
}
