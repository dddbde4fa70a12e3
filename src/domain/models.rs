use std::collections::BTreeMap;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

use super::skills::SkillDomain;

/// Declared playing role. Drives weights and the skill catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Role {
    SpecialistBatter,
    PaceBowler,
    SpinBowler,
    WicketkeeperBatter,
    BattingAllRounder,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SpecialistBatter,
        Role::PaceBowler,
        Role::SpinBowler,
        Role::WicketkeeperBatter,
        Role::BattingAllRounder,
    ];

    /// Accepts short ids, snake_case ids and display labels. Anything else is
    /// treated as a specialist batter, the most generic profile.
    pub fn from_label(label: &str) -> Self {
        let key: String = label
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "batter" | "specialistbatter" | "bat" => Role::SpecialistBatter,
            "pace" | "pacebowler" => Role::PaceBowler,
            "spin" | "spinbowler" => Role::SpinBowler,
            "keeper" | "wk" | "wkbatter" | "wicketkeeperbatter" => Role::WicketkeeperBatter,
            "allrounder" | "ar" | "battingallrounder" => Role::BattingAllRounder,
            _ => {
                warn!("Unknown role '{}', scoring as Specialist Batter", label);
                Role::SpecialistBatter
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::SpecialistBatter => "specialist_batter",
            Role::PaceBowler => "pace_bowler",
            Role::SpinBowler => "spin_bowler",
            Role::WicketkeeperBatter => "wicketkeeper_batter",
            Role::BattingAllRounder => "batting_all_rounder",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Role::SpecialistBatter => "Specialist Batter",
            Role::PaceBowler => "Pace Bowler",
            Role::SpinBowler => "Spin Bowler",
            Role::WicketkeeperBatter => "WK-Batter",
            Role::BattingAllRounder => "Batting All-Rounder",
        }
    }
}

impl From<String> for Role {
    fn from(label: String) -> Self {
        Role::from_label(&label)
    }
}

/// Match format of a grade. Only consulted for senior-aged players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum MatchFormat {
    T20,
    OneDay,
    MultiDay,
    #[default]
    Unspecified,
}

impl MatchFormat {
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_ascii_lowercase();
        if lower.contains("t20") {
            MatchFormat::T20
        } else if lower.contains("two-day") || lower.contains("multi") {
            MatchFormat::MultiDay
        } else if lower.contains("one-day") || lower.contains("one_day") || lower.contains("limited") {
            MatchFormat::OneDay
        } else {
            MatchFormat::Unspecified
        }
    }
}

impl From<String> for MatchFormat {
    fn from(label: String) -> Self {
        MatchFormat::from_label(&label)
    }
}

/// One competition level a player appeared in during a season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradeRecord {
    #[serde(alias = "level")]
    pub tier_code: String,
    pub age_group: String,
    pub format: MatchFormat,
    pub matches: f64,
    pub runs: Option<f64>,
    #[serde(alias = "hs")]
    pub high_score: Option<f64>,
    #[serde(alias = "avg")]
    pub average: Option<f64>,
    pub overs: Option<f64>,
    #[serde(alias = "wkts")]
    pub wickets: Option<f64>,
    #[serde(alias = "sr")]
    pub strike_rate: Option<f64>,
    #[serde(alias = "bAvg")]
    pub bowling_average: Option<f64>,
    #[serde(alias = "econ")]
    pub economy: Option<f64>,
    #[serde(alias = "ct")]
    pub catches: Option<f64>,
    #[serde(alias = "ro")]
    pub run_outs: Option<f64>,
    #[serde(alias = "st")]
    pub stumpings: Option<f64>,
}

impl GradeRecord {
    pub fn has_batting(&self) -> bool {
        self.runs.is_some_and(|r| r > 0.0)
    }

    pub fn has_bowling(&self) -> bool {
        self.overs.is_some_and(|o| o > 0.0)
    }
}

/// Coach and self assessment for one skill item, each on a 1-5 scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default, deserialize_with = "rated", skip_serializing_if = "Option::is_none")]
    pub coach: Option<u8>,
    #[serde(rename = "self", default, deserialize_with = "rated", skip_serializing_if = "Option::is_none")]
    pub self_rating: Option<u8>,
}

impl Rating {
    pub fn new(coach: Option<u8>, self_rating: Option<u8>) -> Self {
        Self { coach, self_rating }
    }

    pub fn is_rated(&self) -> bool {
        self.coach.is_some() || self.self_rating.is_some()
    }
}

/// A zero rating is how collaborators say "not yet assessed".
fn rated<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<u8>::deserialize(deserializer)?;
    Ok(value.filter(|&r| r > 0))
}

/// Sparse ratings: domain, then item name, then the assessment.
pub type SkillRatingSet = BTreeMap<SkillDomain, BTreeMap<String, Rating>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub dob: Option<NaiveDate>,
    pub role: Role,
    #[serde(default)]
    pub grades: Vec<GradeRecord>,
    #[serde(default)]
    pub ratings: SkillRatingSet,
}

impl Player {
    pub fn new(id: &str, role: Role) -> Self {
        Self {
            id: id.to_string(),
            name: String::new(),
            dob: None,
            role,
            grades: Vec::new(),
            ratings: SkillRatingSet::new(),
        }
    }

    pub fn rating(&self, domain: SkillDomain, item: &str) -> Option<&Rating> {
        self.ratings.get(&domain).and_then(|items| items.get(item))
    }
}
