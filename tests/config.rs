use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use pathway_scoring::config::{AppConfig, ConfigWarning};
use pathway_scoring::domain::{GradeRecord, Player, Role};
use pathway_scoring::scoring::ScoringEngine;
use pathway_scoring::services::load_roster;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("pathway_scoring_{}_{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_partial_config_file_overrides_named_fields() {
    let path = scratch_file(
        "partial.json",
        r#"{
            "engine": { "fallback_tier_value": 0.5 },
            "tiers": [ { "code": "club", "label": "Club", "category": "Local", "tier_value": 0.7 } ]
        }"#,
    );
    let config = AppConfig::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.engine.fallback_tier_value, 0.5);
    assert_eq!(config.engine.pdi_scale_max, 5.0);
    assert_eq!(config.tiers.len(), 1);
    assert_eq!(config.tiers.tier_value("prem_1", config.engine.fallback_tier_value), 0.5);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let err = AppConfig::from_file("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().starts_with("Failed to read from"));
}

#[test]
fn test_skewed_weights_warn_but_still_score() {
    let mut config = AppConfig::new();
    config.weights.specialist_batter.domains.primary_technical = 0.70;

    let warnings = config.diagnostics();
    assert!(warnings
        .iter()
        .any(|w| matches!(w, ConfigWarning::DomainWeightSum { role, .. } if role == "Specialist Batter")));

    let mut player = Player::new("p", Role::SpecialistBatter);
    player.grades.push(GradeRecord {
        tier_code: "local_j1".to_string(),
        age_group: "U14".to_string(),
        matches: 5.0,
        runs: Some(120.0),
        high_score: Some(45.0),
        average: Some(24.0),
        ..GradeRecord::default()
    });
    let result = ScoringEngine::new(&config, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()).score_player(&player);
    assert!(result.cps > 0);
}

#[test]
fn test_roster_file_round_trip_through_loader() {
    let path = scratch_file(
        "roster.json",
        r#"[
            { "id": "p1", "name": "A", "dob": "2011-02-01", "role": "Spin Bowler" },
            { "id": "p2", "role": "goalkeeper", "ratings": { "mental": { "Resilience": { "coach": 0, "self": 3 } } } }
        ]"#,
    );
    let players = load_roster(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].role, Role::SpinBowler);
    assert_eq!(players[1].role, Role::SpecialistBatter);

    let result = ScoringEngine::new(&AppConfig::new(), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        .score_player(&players[1]);
    assert_eq!(result.holistic_score, 60);
    assert!(result.self_awareness.provisional);
}

#[test]
fn test_malformed_roster_reports_parse_context() {
    let path = scratch_file("broken.json", "{ not json");
    let err = load_roster(&path).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert_eq!(err.to_string(), "Failed to parse roster");
}
