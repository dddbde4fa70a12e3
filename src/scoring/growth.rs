use serde::Serialize;

use crate::domain::SkillDomain;

use super::rounding::round2;
use super::types::ScoreResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainDelta {
    pub domain: SkillDomain,
    pub label: String,
    pub baseline: f64,
    pub current: f64,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthDelta {
    pub player_id: String,
    pub domains: Vec<DomainDelta>,
    pub holistic_delta: i64,
    pub pdi_delta: f64,
    /// Only when both snapshots have a self-awareness gap.
    pub self_awareness_delta: Option<f64>,
}

/// Change between two results for the same player. Unrated domains count as 0.
pub fn growth_delta(baseline: &ScoreResult, current: &ScoreResult) -> GrowthDelta {
    let domains = current
        .domain_breakdown
        .iter()
        .map(|now| {
            let before = baseline
                .domain_breakdown
                .iter()
                .find(|d| d.domain == now.domain)
                .and_then(|d| d.average)
                .unwrap_or(0.0);
            let after = now.average.unwrap_or(0.0);
            DomainDelta {
                domain: now.domain,
                label: now.label.clone(),
                baseline: before,
                current: after,
                delta: round2(after - before),
            }
        })
        .collect();

    let self_awareness_delta = match (baseline.self_awareness.gap, current.self_awareness.gap) {
        (Some(before), Some(after)) => Some(round2(after - before)),
        _ => None,
    };

    GrowthDelta {
        player_id: current.player_id.clone(),
        domains,
        holistic_delta: i64::from(current.holistic_score) - i64::from(baseline.holistic_score),
        pdi_delta: round2(current.pdi - baseline.pdi),
        self_awareness_delta,
    }
}
