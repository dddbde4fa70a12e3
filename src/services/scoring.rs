use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use colored::{ColoredString, Colorize};
use log::info;

use crate::config::AppConfig;
use crate::domain::Player;
use crate::errors::{with_parse_context, with_read_context};
use crate::scoring::{rank, Band, ScoreResult, ScoringEngine, SortKey};

/// Reads a roster: a JSON array of players.
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Vec<Player>> {
    let path = path.as_ref();
    let raw = with_read_context(std::fs::read_to_string(path), path)?;
    let players: Vec<Player> = with_parse_context(serde_json::from_str(&raw), "roster")?;
    info!("Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

pub struct ScoringService {
    config: AppConfig,
    as_of: NaiveDate,
}

impl ScoringService {
    pub fn new(config: AppConfig, as_of: NaiveDate) -> Self {
        Self { config, as_of }
    }

    pub fn score(&self, players: &[Player]) -> Vec<ScoreResult> {
        ScoringEngine::new(&self.config, self.as_of).score_roster(players)
    }

    pub fn run(&self, roster: &Path, sort: SortKey, ascending: bool, json: bool) -> Result<()> {
        let players = load_roster(roster)?;
        let results = self.score(&players);
        let ranked = rank(&results, sort, ascending);

        if json {
            println!("{}", serde_json::to_string_pretty(&ranked)?);
        } else {
            print!("{}", render_leaderboard(&ranked));
        }
        Ok(())
    }
}

pub fn render_leaderboard(ranked: &[&ScoreResult]) -> String {
    let mut out = format!(
        "{:<4} {:<10} {:<22} {:<20} {:<8} {:>7} {:>5} {:<11} {:>5} {:>7} {:>6} {:>4}\n",
        "#", "ID", "Name", "Role", "Bracket", "Overall", "CPS", "Band", "PDI", "Cohort", "Age", "Traj"
    );
    for (i, r) in ranked.iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<10} {:<22} {:<20} {:<8} {:>7} {:>5} {} {:>5.2} {:>7} {:>6} {:>4}\n",
            i + 1,
            r.player_id,
            truncate(&r.name, 22),
            r.role.label(),
            r.age_bracket.as_str(),
            r.overall_score,
            r.cps,
            paint_band(r.band, &format!("{:<11}", format!("{} {}", r.holistic_score, r.band.as_str()))),
            r.pdi,
            r.cohort_percentile,
            r.age_score,
            if r.trajectory { "↑" } else { "" },
        ));
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

pub fn paint_band(band: Band, text: &str) -> ColoredString {
    match hex_rgb(band.color()) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

/// "#RRGGBB" to its components.
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
