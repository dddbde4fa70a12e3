use chrono::NaiveDate;
use serde_json::json;

use pathway_scoring::config::AppConfig;
use pathway_scoring::domain::{GradeRecord, Player, Role};
use pathway_scoring::scoring::context::resolve_grade;
use pathway_scoring::scoring::performance::performance_indices;
use pathway_scoring::scoring::{AwarenessLabel, Band, ScoringEngine};

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn ratings(items: &[&str], values: &[u8]) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = items
        .iter()
        .zip(values)
        .map(|(item, v)| (item.to_string(), json!({ "coach": v })))
        .collect();
    serde_json::Value::Object(map)
}

/// Pace bowler, 14 on the scoring date, with two junior grades and a full coach assessment.
fn pace_bowler() -> Player {
    use pathway_scoring::domain::skills::items;
    use pathway_scoring::domain::SkillDomain::*;

    let role = Role::PaceBowler;
    serde_json::from_value(json!({
        "id": "p1",
        "name": "Liam Patel",
        "dob": "2012-03-15",
        "role": "pace",
        "grades": [
            { "level": "local_j1", "ageGroup": "U14", "matches": 12, "runs": 285, "hs": 67, "avg": 28.5,
              "overs": 68, "wkts": 24, "bAvg": 17.9, "econ": 6.32 },
            { "level": "local_j2", "ageGroup": "U16", "matches": 6, "runs": 98, "hs": 34, "avg": 16.3,
              "overs": 32, "wkts": 11, "bAvg": 16.9, "econ": 5.81 }
        ],
        "ratings": {
            "primary_technical": ratings(items(role, PrimaryTechnical), &[4, 3, 4, 3, 3, 2, 3, 4, 3, 3]),
            "secondary_technical": ratings(items(role, SecondaryTechnical), &[3, 3, 3, 2, 3, 2]),
            "game_intelligence": ratings(items(role, GameIntelligence), &[3, 3, 2, 3, 3, 3]),
            "mental": ratings(items(role, Mental), &[4, 4, 3, 4, 3, 4, 3]),
            "physical": ratings(items(role, Physical), &[4, 3, 3, 3, 3])
        }
    }))
    .unwrap()
}

fn grade(code: &str, age_group: &str) -> GradeRecord {
    GradeRecord {
        tier_code: code.to_string(),
        age_group: age_group.to_string(),
        ..GradeRecord::default()
    }
}

#[test]
fn test_ccm_for_age_matched_grade() {
    let config = AppConfig::new();
    let ctx = resolve_grade(&grade("vmcu", "U14"), Some(14), &config);
    assert_eq!(ctx.tier_value, 0.75);
    assert_eq!(ctx.arm, 1.0);
    assert_eq!(ctx.format_modifier, 1.0);
    assert_eq!(ctx.ccm, 0.75);
}

#[test]
fn test_ccm_with_age_up_bonus() {
    let config = AppConfig::new();
    let ctx = resolve_grade(&grade("local_j2", "U16"), Some(14), &config);
    assert_eq!(ctx.arm, 1.3);
    assert_eq!(ctx.ccm, 0.78);
}

#[test]
fn test_cps_end_to_end() {
    let config = AppConfig::new();
    let result = ScoringEngine::new(&config, as_of()).score_player(&pace_bowler());

    let ccms: Vec<f64> = result.grades.iter().map(|g| g.ccm).collect();
    assert_eq!(ccms, [0.75, 0.78]);
    assert_eq!(result.batting_index, Some(24.55));
    assert_eq!(result.bowling_index, Some(14.37));
    assert_eq!(result.cps, 42);
}

#[test]
fn test_holistic_band_for_assessed_pace_bowler() {
    let config = AppConfig::new();
    let result = ScoringEngine::new(&config, as_of()).score_player(&pace_bowler());

    let percents: Vec<f64> = result.domain_breakdown.iter().filter_map(|d| d.percent).collect();
    assert_eq!(percents, [64.0, 53.33, 56.67, 71.43, 64.0]);
    assert_eq!(result.holistic_score, 63);
    assert_eq!(result.band, Band::Competent);
    assert_eq!(result.completeness, 100);
}

#[test]
fn test_full_pipeline_for_pace_bowler() {
    let config = AppConfig::new();
    let result = ScoringEngine::new(&config, as_of()).score_player(&pace_bowler());

    assert_eq!(result.age, Some(14));
    assert_eq!(result.pdi, 2.89);
    assert_eq!(result.pdi_percent, 58);
    assert_eq!(result.headline_arm, 1.3);
    assert_eq!(result.age_score, 100);
    assert_eq!(result.cohort_percentile, 50);
    assert_eq!(result.overall_score, 69);
    assert!(result.trajectory);
    assert_eq!(result.self_awareness.label, AwarenessLabel::Unassessed);
    assert!(!result.self_awareness.provisional);
}

#[test]
fn test_ranges_hold_for_extreme_inputs() {
    let config = AppConfig::new();
    let mut player = pace_bowler();
    player.grades.push(GradeRecord {
        matches: 500.0,
        runs: Some(90_000.0),
        high_score: Some(400.0),
        average: Some(300.0),
        overs: Some(1.0),
        bowling_average: Some(900.0),
        economy: Some(40.0),
        ..grade("prem_1", "Open/Senior")
    });

    let result = ScoringEngine::new(&config, as_of()).score_player(&player);
    assert!(result.cps <= 100);
    assert!(result.holistic_score <= 100);
    assert!(result.pdi >= 0.0 && result.pdi <= config.engine.pdi_scale_max);
    assert!(result.cohort_percentile <= 100);
    assert!(result.overall_score <= 100);
}

#[test]
fn test_emptiness() {
    let config = AppConfig::new();
    let engine = ScoringEngine::new(&config, as_of());

    let mut no_grades = pace_bowler();
    no_grades.grades.clear();
    let result = engine.score_player(&no_grades);
    assert_eq!(result.cps, 0);
    assert_eq!(result.batting_index, None);
    assert_eq!(result.holistic_score, 63);

    let mut no_ratings = pace_bowler();
    no_ratings.ratings.clear();
    let result = engine.score_player(&no_ratings);
    assert_eq!(result.holistic_score, 0);
    assert_eq!(result.completeness, 0);
    assert_eq!(result.band, Band::Unscored);
    assert_eq!(result.cps, 42);
}

#[test]
fn test_unknown_tier_does_not_fail() {
    let config = AppConfig::new();
    let ctx = resolve_grade(&grade("street_cricket", "U14"), Some(14), &config);
    assert_eq!(ctx.tier_value, 0.6);
    assert!(!ctx.known_tier);
}

#[test]
fn test_scoring_is_idempotent() {
    let config = AppConfig::new();
    let engine = ScoringEngine::new(&config, as_of());
    let roster = vec![pace_bowler(), Player::new("p2", Role::SpinBowler)];
    assert_eq!(engine.score_roster(&roster), engine.score_roster(&roster));
}

#[test]
fn test_squared_ccm_favours_harder_competition() {
    let config = AppConfig::new();
    let stats = GradeRecord {
        matches: 10.0,
        runs: Some(300.0),
        high_score: Some(60.0),
        average: Some(30.0),
        ..GradeRecord::default()
    };
    // raw contribution before CCM: 18 + 15 + 3 + 5
    let raw = 41.0;

    let hard = GradeRecord { tier_code: "prem_1".to_string(), age_group: "U14".to_string(), ..stats.clone() };
    let easy = GradeRecord { tier_code: "local_j3".to_string(), age_group: "U14".to_string(), ..stats };
    let grades = vec![hard, easy];
    let contexts: Vec<_> = grades.iter().map(|g| resolve_grade(g, Some(14), &config)).collect();

    let index = performance_indices(&grades, &contexts).batting.unwrap();
    let squared = (raw * 1.0 * 1.0 + raw * 0.45 * 0.45) / 1.45;
    let linear = (raw * 1.0 + raw * 0.45) / 1.45;
    assert!((index - squared).abs() < 1e-9);
    assert!(index < linear);

    let hard_only = performance_indices(&grades[..1], &contexts[..1]).batting.unwrap();
    let easy_only = performance_indices(&grades[1..], &contexts[1..]).batting.unwrap();
    assert!((hard_only / easy_only - 1.0 / 0.45).abs() < 1e-9);
}

#[test]
fn test_adult_in_open_cricket_is_age_appropriate() {
    let config = AppConfig::new();
    let player: Player = serde_json::from_value(json!({
        "id": "p4",
        "dob": "2004-05-19",
        "role": "keeper",
        "grades": [
            { "level": "prem_1", "ageGroup": "Open/Senior", "format": "T20", "matches": 4, "runs": 87, "hs": 42, "avg": 29.0 },
            { "level": "prem_1", "ageGroup": "Open/Senior", "format": "Two-Day / Multi-Day", "matches": 8, "runs": 189, "hs": 54, "avg": 27.0 }
        ]
    }))
    .unwrap();

    let result = ScoringEngine::new(&config, as_of()).score_player(&player);
    assert_eq!(result.age, Some(22));
    assert_eq!(result.age_bracket.as_str(), "U20+");

    let t20 = &result.grades[0];
    assert_eq!(t20.arm, 1.0);
    assert_eq!(t20.format_modifier, 1.15);
    assert_eq!(t20.ccm, 1.15);

    let two_day = &result.grades[1];
    assert_eq!(two_day.arm, 1.0);
    assert_eq!(two_day.format_modifier, 0.9);
    assert_eq!(two_day.ccm, 0.9);

    assert_eq!(result.headline_arm, 1.0);
    assert_eq!(result.age_score, 57);
    assert!(result.cps > 0 && result.cps <= 100);
    assert!(!result.trajectory);
}
