use std::collections::HashMap;

use log::info;

use crate::config::{CohortGrouping, EngineSettings};
use crate::domain::{AgeBracket, Role};

use super::rounding::to_percent;
use super::types::ScoreResult;

pub fn cohort_key(bracket: AgeBracket, role: Role, grouping: CohortGrouping) -> String {
    match grouping {
        CohortGrouping::AgeBracket => bracket.as_str().to_string(),
        CohortGrouping::AgeBracketAndRole => format!("{} / {}", bracket.as_str(), role.label()),
    }
}

/// Percentile of `subject` among `peers` (the subject included).
///
/// Only peers with a PDI above zero take part. Equal values share a
/// percentile, and a pool with no one else in it returns `neutral`.
pub fn percentile(subject: f64, peers: &[f64], neutral: u32) -> u32 {
    if subject <= 0.0 {
        return 0;
    }
    let pool: Vec<f64> = peers.iter().copied().filter(|&v| v > 0.0).collect();
    if pool.len() <= 1 {
        return neutral.min(100);
    }
    let below = pool.iter().filter(|&&v| v < subject).count();
    to_percent(below as f64 / (pool.len() - 1) as f64 * 100.0)
}

/// Ranks every result against its cohort from one complete snapshot.
pub fn assign_percentiles(results: &mut [ScoreResult], settings: &EngineSettings) {
    let mut cohorts: HashMap<String, Vec<f64>> = HashMap::new();
    for result in results.iter() {
        cohorts.entry(result.cohort.clone()).or_default().push(result.pdi);
    }
    info!("Ranking {} players across {} cohorts", results.len(), cohorts.len());

    for result in results.iter_mut() {
        let peers = cohorts.get(&result.cohort).map(Vec::as_slice).unwrap_or_default();
        result.cohort_size = peers.len();
        result.cohort_percentile = percentile(result.pdi, peers, settings.neutral_percentile);
    }
}
