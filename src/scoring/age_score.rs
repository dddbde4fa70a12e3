use crate::config::EngineSettings;

use super::rounding::to_percent;

const NEUTRAL_AGE_SCORE: u32 = 50;

/// The headline ARM placed on 0-100 between the configured floor and ceiling.
pub fn age_score(arm: f64, settings: &EngineSettings) -> u32 {
    let range = settings.arm_ceiling - settings.arm_floor;
    if range <= 0.0 {
        return NEUTRAL_AGE_SCORE;
    }
    to_percent((arm - settings.arm_floor) / range * 100.0)
}

/// Mean of pathway, cohort and age scores. A player with no PDI scores 0.
pub fn overall_score(pdi: f64, pdi_percent: u32, cohort_percentile: u32, age_score: u32) -> u32 {
    if pdi <= 0.0 {
        return 0;
    }
    to_percent(f64::from(pdi_percent + cohort_percentile + age_score) / 3.0)
}
