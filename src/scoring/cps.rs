use crate::config::{DisciplineWeights, EngineSettings};

use super::rounding::to_percent;
use super::types::PerformanceIndices;

/// Blends the two indices by role weights. A player with only one
/// discipline is scored on that index alone.
pub fn raw_performance(indices: &PerformanceIndices, weights: &DisciplineWeights) -> f64 {
    match (indices.batting, indices.bowling) {
        (Some(bat), Some(bowl)) => bat * weights.batting + bowl * weights.bowling,
        (Some(bat), None) => bat,
        (None, Some(bowl)) => bowl,
        (None, None) => 0.0,
    }
}

/// Competition Performance Score on 0-100.
pub fn competition_performance_score(
    indices: &PerformanceIndices,
    weights: &DisciplineWeights,
    settings: &EngineSettings,
) -> u32 {
    to_percent(raw_performance(indices, weights) * settings.cps_scale)
}
