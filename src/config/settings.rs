use std::path::Path;

use anyhow::Result;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use super::tiers::TierTable;
use super::weights::RoleWeightTable;
use crate::errors::{with_parse_context, with_read_context};

const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmModel {
    /// Stepped table keyed on how far the age group sits above or below the player.
    Banded,
    /// `1 + delta * arm_sensitivity`.
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CohortGrouping {
    AgeBracket,
    AgeBracketAndRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub arm_model: ArmModel,
    pub arm_sensitivity: f64,
    pub arm_floor: f64,
    pub arm_ceiling: f64,
    pub coach_weight: f64,
    pub self_weight: f64,
    pub self_awareness_gap_min: f64,
    pub self_awareness_gap_max: f64,
    pub trajectory_age_threshold: f64,
    pub pdi_scale_max: f64,
    pub pdi_competition_weight: f64,
    pub cps_scale: f64,
    pub fallback_tier_value: f64,
    pub senior_format_age: u32,
    pub open_age_ceiling: u32,
    pub cohort_grouping: CohortGrouping,
    pub neutral_percentile: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            arm_model: ArmModel::Banded,
            arm_sensitivity: 0.05,
            arm_floor: 0.6,
            arm_ceiling: 1.3,
            coach_weight: 0.75,
            self_weight: 0.25,
            self_awareness_gap_min: -0.5,
            self_awareness_gap_max: 0.5,
            trajectory_age_threshold: 1.5,
            pdi_scale_max: 5.0,
            pdi_competition_weight: 0.25,
            cps_scale: 2.5,
            fallback_tier_value: 0.6,
            senior_format_age: 16,
            open_age_ceiling: 18,
            cohort_grouping: CohortGrouping::AgeBracket,
            neutral_percentile: 50,
        }
    }
}

/// A data-quality signal for administrators. Scoring carries on regardless.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigWarning {
    DomainWeightSum { role: String, sum: f64 },
    DisciplineWeightSum { role: String, sum: f64 },
    BlendWeightSum { sum: f64 },
    ArmBoundsInverted { floor: f64, ceiling: f64 },
    NonPositivePdiScale { value: f64 },
}

impl ConfigWarning {
    pub fn describe(&self) -> String {
        match self {
            ConfigWarning::DomainWeightSum { role, sum } => {
                format!("domain weights for {} sum to {:.3}, expected 1.0", role, sum)
            }
            ConfigWarning::DisciplineWeightSum { role, sum } => {
                format!("batting/bowling weights for {} sum to {:.3}, expected 1.0", role, sum)
            }
            ConfigWarning::BlendWeightSum { sum } => {
                format!("coach and self weights sum to {:.3}, expected 1.0", sum)
            }
            ConfigWarning::ArmBoundsInverted { floor, ceiling } => {
                format!("age-relevance floor {} is above ceiling {}", floor, ceiling)
            }
            ConfigWarning::NonPositivePdiScale { value } => {
                format!("PDI scale maximum must be positive, got {}", value)
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineSettings,
    pub tiers: TierTable,
    pub weights: RoleWeightTable,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a JSON config file. Fields the file leaves out keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = with_read_context(std::fs::read_to_string(path), path)?;
        let config: AppConfig = with_parse_context(serde_json::from_str(&raw), "engine config")?;
        info!("Loaded engine config from {}", path.display());
        config.log_diagnostics();
        Ok(config)
    }

    /// Explicit path first, then `PATHWAY_CONFIG`, then built-in defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match std::env::var("PATHWAY_CONFIG") {
            Ok(env_path) if !env_path.is_empty() => Self::from_file(env_path),
            _ => Ok(Self::new()),
        }
    }

    pub fn diagnostics(&self) -> Vec<ConfigWarning> {
        let mut warnings = self.weights.inconsistencies(WEIGHT_SUM_TOLERANCE);

        let blend_sum = self.engine.coach_weight + self.engine.self_weight;
        if (blend_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            warnings.push(ConfigWarning::BlendWeightSum { sum: blend_sum });
        }
        if self.engine.arm_floor > self.engine.arm_ceiling {
            warnings.push(ConfigWarning::ArmBoundsInverted {
                floor: self.engine.arm_floor,
                ceiling: self.engine.arm_ceiling,
            });
        }
        if self.engine.pdi_scale_max <= 0.0 {
            warnings.push(ConfigWarning::NonPositivePdiScale {
                value: self.engine.pdi_scale_max,
            });
        }

        warnings
    }

    pub fn log_diagnostics(&self) {
        for warning in self.diagnostics() {
            warn!("Config: {}", warning.describe());
        }
    }
}
