use serde::{Deserialize, Serialize};

use super::settings::ConfigWarning;
use crate::domain::{Role, SkillDomain};

/// How a role splits its Competition Performance Score between bat and ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisciplineWeights {
    pub batting: f64,
    pub bowling: f64,
}

impl DisciplineWeights {
    pub fn sum(&self) -> f64 {
        self.batting + self.bowling
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainWeights {
    pub primary_technical: f64,
    pub secondary_technical: f64,
    pub game_intelligence: f64,
    pub mental: f64,
    pub physical: f64,
}

impl DomainWeights {
    pub fn weight(&self, domain: SkillDomain) -> f64 {
        match domain {
            SkillDomain::PrimaryTechnical => self.primary_technical,
            SkillDomain::SecondaryTechnical => self.secondary_technical,
            SkillDomain::GameIntelligence => self.game_intelligence,
            SkillDomain::Mental => self.mental,
            SkillDomain::Physical => self.physical,
        }
    }

    pub fn sum(&self) -> f64 {
        SkillDomain::ALL.iter().map(|&d| self.weight(d)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleWeights {
    pub discipline: DisciplineWeights,
    pub domains: DomainWeights,
}

impl RoleWeights {
    const fn new(batting: f64, bowling: f64, domains: [f64; 5]) -> Self {
        Self {
            discipline: DisciplineWeights { batting, bowling },
            domains: DomainWeights {
                primary_technical: domains[0],
                secondary_technical: domains[1],
                game_intelligence: domains[2],
                mental: domains[3],
                physical: domains[4],
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleWeightTable {
    pub specialist_batter: RoleWeights,
    pub pace_bowler: RoleWeights,
    pub spin_bowler: RoleWeights,
    pub wicketkeeper_batter: RoleWeights,
    pub batting_all_rounder: RoleWeights,
}

impl Default for RoleWeightTable {
    fn default() -> Self {
        Self {
            specialist_batter: RoleWeights::new(0.85, 0.15, [0.35, 0.10, 0.20, 0.20, 0.15]),
            pace_bowler: RoleWeights::new(0.25, 0.75, [0.35, 0.10, 0.15, 0.20, 0.20]),
            spin_bowler: RoleWeights::new(0.25, 0.75, [0.35, 0.10, 0.15, 0.20, 0.20]),
            wicketkeeper_batter: RoleWeights::new(0.80, 0.20, [0.30, 0.15, 0.15, 0.20, 0.20]),
            batting_all_rounder: RoleWeights::new(0.55, 0.45, [0.30, 0.15, 0.15, 0.20, 0.20]),
        }
    }
}

impl RoleWeightTable {
    pub fn for_role(&self, role: Role) -> &RoleWeights {
        match role {
            Role::SpecialistBatter => &self.specialist_batter,
            Role::PaceBowler => &self.pace_bowler,
            Role::SpinBowler => &self.spin_bowler,
            Role::WicketkeeperBatter => &self.wicketkeeper_batter,
            Role::BattingAllRounder => &self.batting_all_rounder,
        }
    }

    pub fn inconsistencies(&self, tolerance: f64) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for role in Role::ALL {
            let weights = self.for_role(role);
            let domain_sum = weights.domains.sum();
            if (domain_sum - 1.0).abs() > tolerance {
                warnings.push(ConfigWarning::DomainWeightSum {
                    role: role.label().to_string(),
                    sum: domain_sum,
                });
            }
            let discipline_sum = weights.discipline.sum();
            if (discipline_sum - 1.0).abs() > tolerance {
                warnings.push(ConfigWarning::DisciplineWeightSum {
                    role: role.label().to_string(),
                    sum: discipline_sum,
                });
            }
        }

        warnings
    }
}
