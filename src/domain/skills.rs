use serde::{Deserialize, Serialize};

use super::models::Role;

static BAT_ITEMS: [&str; 10] = [
    "Stance & Setup",
    "Trigger Movement & Balance",
    "Front-Foot Drive",
    "Back-Foot Play",
    "Power Hitting",
    "Sweep & Reverse Sweep",
    "Playing Spin",
    "Playing Pace",
    "Strike Rotation",
    "Death-Over Hitting",
];

static PACE_ITEMS: [&str; 10] = [
    "Run-Up Rhythm",
    "Action Alignment",
    "Front-Leg Brace",
    "Wrist & Seam",
    "Stock Ball Control",
    "Yorker Execution",
    "Slower Ball Variation",
    "Bouncer Effectiveness",
    "Wide-Line Strategy",
    "Bowling to Plans",
];

static SPIN_ITEMS: [&str; 10] = [
    "Stock Ball Accuracy",
    "Revolutions & Spin Rate",
    "Wrong'un Execution",
    "Flight & Dip Control",
    "Use of Crease",
    "Match-Up Bowling",
    "Middle-Over Control",
    "Powerplay Tactics",
    "Death-Over Spin",
    "Reading the Batter",
];

static KEEP_ITEMS: [&str; 8] = [
    "Stance & Ready Position",
    "Footwork to Pace",
    "Standing Up to Spin",
    "Glove Work",
    "Stumping Speed",
    "Diving & Athleticism",
    "Communication",
    "Throwing Accuracy",
];

static ALL_ROUNDER_BOWLING_ITEMS: [&str; 5] = [
    "Stock Ball Control",
    "Variation Execution",
    "Bowling to Plans",
    "Death Execution",
    "Match-Up Awareness",
];

static BATTER_FIELDING_ITEMS: [&str; 4] = [
    "Ground Fielding",
    "Catching",
    "Part-Time Bowling",
    "Running Between",
];

static IQ_ITEMS: [&str; 6] = [
    "Powerplay Awareness",
    "Middle-Over Management",
    "Death-Over Decisions",
    "Match Reading",
    "Field Awareness",
    "Adaptability",
];

static MENTAL_ITEMS: [&str; 7] = [
    "Courage Under Pressure",
    "Curiosity & Learning",
    "Emotional Regulation",
    "Competitive Drive",
    "Communication & Leadership",
    "Coachability",
    "Resilience",
];

static PACE_PHYSICAL: [&str; 5] = [
    "Explosive Power",
    "Core Stability",
    "Eccentric Quad Strength",
    "Shoulder Mobility",
    "Aerobic Recovery",
];

static SPIN_PHYSICAL: [&str; 5] = [
    "Shoulder Flexibility",
    "Core & Rotational Power",
    "Aerobic Endurance",
    "Balance & Landing",
    "General Movement",
];

static KEEPER_PHYSICAL: [&str; 5] = [
    "Lateral Movement",
    "Squat Endurance",
    "Hand-Eye Coordination",
    "Core Stability",
    "Aerobic Fitness",
];

static BATTER_PHYSICAL: [&str; 5] = [
    "Explosive Power",
    "Agility & Running",
    "Core Balance",
    "Upper Body Power",
    "Aerobic Fitness",
];

static ALL_ROUNDER_PHYSICAL: [&str; 5] = [
    "Explosive Power",
    "Bowling Athleticism",
    "Core Balance",
    "Aerobic Fitness",
    "General Movement",
];

/// The five rated skill categories, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillDomain {
    PrimaryTechnical,
    SecondaryTechnical,
    GameIntelligence,
    Mental,
    Physical,
}

impl SkillDomain {
    pub const ALL: [SkillDomain; 5] = [
        SkillDomain::PrimaryTechnical,
        SkillDomain::SecondaryTechnical,
        SkillDomain::GameIntelligence,
        SkillDomain::Mental,
        SkillDomain::Physical,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SkillDomain::PrimaryTechnical => "primary_technical",
            SkillDomain::SecondaryTechnical => "secondary_technical",
            SkillDomain::GameIntelligence => "game_intelligence",
            SkillDomain::Mental => "mental",
            SkillDomain::Physical => "physical",
        }
    }
}

/// Rated items for one role and domain, in display order.
pub fn items(role: Role, domain: SkillDomain) -> &'static [&'static str] {
    match domain {
        SkillDomain::PrimaryTechnical => match role {
            Role::PaceBowler => &PACE_ITEMS,
            Role::SpinBowler => &SPIN_ITEMS,
            Role::WicketkeeperBatter => &KEEP_ITEMS,
            Role::BattingAllRounder => &BAT_ITEMS[..7],
            Role::SpecialistBatter => &BAT_ITEMS,
        },
        SkillDomain::SecondaryTechnical => match role {
            Role::PaceBowler | Role::SpinBowler => &BAT_ITEMS[..6],
            Role::WicketkeeperBatter => &BAT_ITEMS,
            Role::BattingAllRounder => &ALL_ROUNDER_BOWLING_ITEMS,
            Role::SpecialistBatter => &BATTER_FIELDING_ITEMS,
        },
        SkillDomain::GameIntelligence => &IQ_ITEMS,
        SkillDomain::Mental => &MENTAL_ITEMS,
        SkillDomain::Physical => match role {
            Role::PaceBowler => &PACE_PHYSICAL,
            Role::SpinBowler => &SPIN_PHYSICAL,
            Role::WicketkeeperBatter => &KEEPER_PHYSICAL,
            Role::BattingAllRounder => &ALL_ROUNDER_PHYSICAL,
            Role::SpecialistBatter => &BATTER_PHYSICAL,
        },
    }
}

pub fn domain_label(role: Role, domain: SkillDomain) -> &'static str {
    match domain {
        SkillDomain::PrimaryTechnical => match role {
            Role::PaceBowler => "Pace Bowling",
            Role::SpinBowler => "Spin Bowling",
            Role::WicketkeeperBatter => "Wicketkeeping",
            Role::BattingAllRounder | Role::SpecialistBatter => "Batting",
        },
        SkillDomain::SecondaryTechnical => match role {
            Role::BattingAllRounder => "Bowling",
            Role::SpecialistBatter => "Fielding",
            _ => "Batting",
        },
        SkillDomain::GameIntelligence => "Game Intelligence",
        SkillDomain::Mental => "Mental & Character",
        SkillDomain::Physical => "Physical",
    }
}
