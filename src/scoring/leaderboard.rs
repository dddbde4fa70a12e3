use std::cmp::Ordering;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::types::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Overall,
    Pathway,
    Cohort,
    Age,
}

impl SortKey {
    pub fn value(&self, result: &ScoreResult) -> u32 {
        match self {
            SortKey::Overall => result.overall_score,
            SortKey::Pathway => result.pdi_percent,
            SortKey::Cohort => result.cohort_percentile,
            SortKey::Age => result.age_score,
        }
    }
}

/// Orders results by `key`, highest first unless `ascending`. Ties fall
/// back to player id so the order is stable across runs.
pub fn rank<'a>(results: &'a [ScoreResult], key: SortKey, ascending: bool) -> Vec<&'a ScoreResult> {
    let mut ranked: Vec<&ScoreResult> = results.iter().collect();
    ranked.sort_by(|a, b| {
        let by_key = key.value(a).cmp(&key.value(b));
        let by_key = if ascending { by_key } else { by_key.reverse() };
        match by_key {
            Ordering::Equal => a.player_id.cmp(&b.player_id),
            other => other,
        }
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::{Player, Role};
    use crate::scoring::ScoringEngine;
    use chrono::NaiveDate;

    fn result(id: &str, overall: u32, age: u32) -> ScoreResult {
        let config = AppConfig::new();
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut r = ScoringEngine::new(&config, as_of).evaluate(&Player::new(id, Role::SpinBowler));
        r.overall_score = overall;
        r.age_score = age;
        r
    }

    #[test]
    fn test_descending_with_id_tiebreak() {
        let results = vec![result("c", 60, 10), result("a", 70, 20), result("b", 60, 30)];
        let ids: Vec<&str> = rank(&results, SortKey::Overall, false)
            .iter()
            .map(|r| r.player_id.as_str())
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_ascending_by_age_score() {
        let results = vec![result("c", 60, 10), result("a", 70, 20), result("b", 60, 30)];
        let ids: Vec<&str> = rank(&results, SortKey::Age, true)
            .iter()
            .map(|r| r.player_id.as_str())
            .collect();
        assert_eq!(ids, ["c", "a", "b"]);
    }
}
