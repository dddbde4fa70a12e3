use chrono::NaiveDate;
use log::{debug, info};
use rayon::prelude::*;

use crate::config::AppConfig;
use crate::domain::{age_on, AgeBracket, AgeGroup, Player};

use super::age_score::{age_score, overall_score};
use super::cohort::{assign_percentiles, cohort_key};
use super::context::{headline_grade, resolve_grade};
use super::cps::competition_performance_score;
use super::domains::{domain_breakdown, self_awareness};
use super::holistic::holistic_score;
use super::performance::performance_indices;
use super::pdi::player_development_index;
use super::rounding::round2;
use super::types::{GradeContext, ScoreResult};

const NEUTRAL_ARM: f64 = 1.0;

/// Runs the scoring pipeline against one configuration snapshot.
///
/// Ages are measured on `as_of`, so the same inputs always give the same output.
pub struct ScoringEngine<'a> {
    config: &'a AppConfig,
    as_of: NaiveDate,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(config: &'a AppConfig, as_of: NaiveDate) -> Self {
        Self { config, as_of }
    }

    /// Scores a single player as a cohort of one.
    pub fn score_player(&self, player: &Player) -> ScoreResult {
        let mut results = vec![self.evaluate(player)];
        self.finish(&mut results);
        results.remove(0)
    }

    /// Scores a whole roster. Players are evaluated in parallel; cohort
    /// ranking then runs once over the full set. Output order is input order.
    pub fn score_roster(&self, players: &[Player]) -> Vec<ScoreResult> {
        info!("Scoring {} players as of {}", players.len(), self.as_of);
        let mut results: Vec<ScoreResult> = players.par_iter().map(|p| self.evaluate(p)).collect();
        self.finish(&mut results);
        results
    }

    /// Everything that depends on the player alone.
    pub fn evaluate(&self, player: &Player) -> ScoreResult {
        let settings = &self.config.engine;
        let role_weights = self.config.weights.for_role(player.role);
        let age = player.dob.and_then(|dob| age_on(dob, self.as_of));
        let age_bracket = AgeBracket::from_age(age);

        let grades: Vec<GradeContext> = player
            .grades
            .iter()
            .map(|g| resolve_grade(g, age, self.config))
            .collect();
        let headline = headline_grade(&grades);
        let headline_arm = headline.map(|i| grades[i].arm).unwrap_or(NEUTRAL_ARM);

        let indices = performance_indices(&player.grades, &grades);
        let cps = competition_performance_score(&indices, &role_weights.discipline, settings);

        let domains = domain_breakdown(player, &role_weights.domains, settings);
        let holistic = holistic_score(&domains);

        let pdi = player_development_index(
            (holistic.rated_count > 0).then_some(holistic.score),
            indices.has_data().then_some(cps),
            settings,
        );

        let trajectory = match (age, headline) {
            (Some(age), Some(i)) => {
                let ceiling = AgeGroup::parse(&player.grades[i].age_group).ceiling(settings.open_age_ceiling);
                on_trajectory(pdi.value, age, ceiling, self.config)
            }
            _ => false,
        };

        debug!(
            "Player {}: cps {} holistic {} pdi {} ({}%)",
            player.id, cps, holistic.score, pdi.value, pdi.percent
        );

        ScoreResult {
            player_id: player.id.clone(),
            name: player.name.clone(),
            role: player.role,
            age,
            age_bracket,
            cohort: cohort_key(age_bracket, player.role, settings.cohort_grouping),
            grades,
            headline_arm,
            batting_index: indices.batting.map(round2),
            bowling_index: indices.bowling.map(round2),
            cps,
            holistic_score: holistic.score,
            band: holistic.band,
            completeness: holistic.completeness,
            pdi: pdi.value,
            pdi_percent: pdi.percent,
            cohort_percentile: 0,
            cohort_size: 0,
            age_score: age_score(headline_arm, settings),
            overall_score: 0,
            domain_breakdown: domains,
            self_awareness: self_awareness(player, settings),
            trajectory,
        }
    }

    fn finish(&self, results: &mut [ScoreResult]) {
        assign_percentiles(results, &self.config.engine);
        for result in results.iter_mut() {
            result.overall_score = overall_score(
                result.pdi,
                result.pdi_percent,
                result.cohort_percentile,
                result.age_score,
            );
        }
    }
}

/// Strong development relative to a player's age: at least half the PDI
/// scale while clearly younger than the headline grade is meant for.
fn on_trajectory(pdi: f64, age: u32, group_ceiling: Option<u32>, config: &AppConfig) -> bool {
    let settings = &config.engine;
    let Some(ceiling) = group_ceiling else {
        return false;
    };
    pdi >= settings.pdi_scale_max / 2.0
        && f64::from(age) < f64::from(ceiling) - settings.trajectory_age_threshold
}
