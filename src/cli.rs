use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::scoring::SortKey;

#[derive(Parser, Debug)]
#[command(author, version, about = "youth cricket player development scoring")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Score a roster and print the leaderboard
    Score {
        /// Roster file (JSON array of players)
        #[arg(short, long)]
        roster: PathBuf,
        /// Engine config file (falls back to PATHWAY_CONFIG, then defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Date ages are measured on (defaults to today)
        #[arg(long = "as-of")]
        as_of: Option<NaiveDate>,
        /// Leaderboard column to sort by
        #[arg(short, long, value_enum, default_value_t = SortKey::Overall)]
        sort: SortKey,
        /// Lowest first
        #[arg(long)]
        asc: bool,
        /// Print full results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report inconsistencies in the engine config
    Check {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Compare two roster snapshots
    Growth {
        #[arg(short, long)]
        baseline: PathBuf,
        #[arg(long)]
        current: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(long = "as-of")]
        as_of: Option<NaiveDate>,
        #[arg(long)]
        json: bool,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_defaults() {
        let cli = Cli::parse_from(["pathway_scoring", "score", "--roster", "roster.json"]);
        match cli.command {
            Command::Score { sort, asc, json, as_of, .. } => {
                assert_eq!(sort, SortKey::Overall);
                assert!(!asc && !json);
                assert_eq!(as_of, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_score_accepts_as_of() {
        let cli = Cli::parse_from([
            "pathway_scoring", "score", "--roster", "roster.json", "--as-of", "2026-03-01", "--sort", "cohort",
        ]);
        match cli.command {
            Command::Score { as_of, sort, .. } => {
                assert_eq!(as_of, NaiveDate::from_ymd_opt(2026, 3, 1));
                assert_eq!(sort, SortKey::Cohort);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_growth_parses_dates() {
        let cli = Cli::parse_from([
            "pathway_scoring", "growth", "-b", "pre.json", "--current", "post.json", "--as-of", "2026-10-19",
        ]);
        match cli.command {
            Command::Growth { as_of, .. } => assert_eq!(as_of, NaiveDate::from_ymd_opt(2026, 10, 19)),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
