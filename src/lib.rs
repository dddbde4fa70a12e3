pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod scoring;
pub mod services;

use std::path::Path;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::scoring::SortKey;
use crate::services::{GrowthService, ScoringService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn as_of_or_today(as_of: Option<NaiveDate>) -> NaiveDate {
    as_of.unwrap_or_else(|| Local::now().date_naive())
}

pub fn handle_score(
    roster: &Path,
    config: Option<&Path>,
    as_of: Option<NaiveDate>,
    sort: SortKey,
    ascending: bool,
    json: bool,
) -> Result<()> {
    let config = AppConfig::resolve(config)?;
    let service = ScoringService::new(config, as_of_or_today(as_of));
    service.run(roster, sort, ascending, json)
}

pub fn handle_check(config: Option<&Path>) -> Result<()> {
    let config = AppConfig::resolve(config)?;
    for tier in config.tiers.iter() {
        println!("{:<10} {:>5.2}  {} ({})", tier.code, tier.tier_value, tier.label, tier.category);
    }
    let warnings = config.diagnostics();
    if warnings.is_empty() {
        println!("Config OK: {} competition tiers, weights consistent", config.tiers.len());
    } else {
        for warning in &warnings {
            println!("warning: {}", warning.describe());
        }
    }
    info!("Config check finished with {} warnings", warnings.len());
    Ok(())
}

pub fn handle_growth(
    baseline: &Path,
    current: &Path,
    config: Option<&Path>,
    as_of: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let config = AppConfig::resolve(config)?;
    let service = GrowthService::new(config, as_of_or_today(as_of));
    service.run(baseline, current, json)
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
