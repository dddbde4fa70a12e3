use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};

use crate::config::AppConfig;
use crate::scoring::{growth_delta, GrowthDelta, ScoreResult};

use super::scoring::{load_roster, ScoringService};

/// Compares a baseline roster snapshot with a current one.
pub struct GrowthService {
    scoring: ScoringService,
}

impl GrowthService {
    pub fn new(config: AppConfig, as_of: NaiveDate) -> Self {
        Self {
            scoring: ScoringService::new(config, as_of),
        }
    }

    pub fn run(&self, baseline: &Path, current: &Path, json: bool) -> Result<()> {
        let before = self.scoring.score(&load_roster(baseline)?);
        let after = self.scoring.score(&load_roster(current)?);
        let deltas = compare(&before, &after);
        info!("Computed growth for {} players", deltas.len());

        if json {
            println!("{}", serde_json::to_string_pretty(&deltas)?);
        } else {
            print!("{}", render_growth(&deltas));
        }
        Ok(())
    }
}

/// Pairs results by player id. Players missing from the baseline are skipped.
pub fn compare(baseline: &[ScoreResult], current: &[ScoreResult]) -> Vec<GrowthDelta> {
    let by_id: HashMap<&str, &ScoreResult> =
        baseline.iter().map(|r| (r.player_id.as_str(), r)).collect();

    current
        .iter()
        .filter_map(|now| match by_id.get(now.player_id.as_str()) {
            Some(before) => Some(growth_delta(before, now)),
            None => {
                warn!("Player {} has no baseline, skipping", now.player_id);
                None
            }
        })
        .collect()
}

pub fn render_growth(deltas: &[GrowthDelta]) -> String {
    let mut out = String::new();
    for delta in deltas {
        out.push_str(&format!(
            "{}: PDI {:+.2}, holistic {:+}, self-awareness {}\n",
            delta.player_id,
            delta.pdi_delta,
            delta.holistic_delta,
            delta
                .self_awareness_delta
                .map(|d| format!("{:+.2}", d))
                .unwrap_or_else(|| "—".to_string()),
        ));
        for domain in &delta.domains {
            out.push_str(&format!(
                "    {:<20} {:.2} -> {:.2} ({:+.2})\n",
                domain.label, domain.baseline, domain.current, domain.delta
            ));
        }
    }
    out
}
