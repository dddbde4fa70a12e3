use anyhow::Result;

use pathway_scoring::cli::Command;
use pathway_scoring::{handle_check, handle_completions, handle_growth, handle_score, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Score { roster, config, as_of, sort, asc, json } => {
            handle_score(roster, config.as_deref(), *as_of, *sort, *asc, *json)
        }
        Command::Check { config } => handle_check(config.as_deref()),
        Command::Growth { baseline, current, config, as_of, json } => {
            handle_growth(baseline, current, config.as_deref(), *as_of, *json)
        }
        Command::Completions { shell } => handle_completions(*shell),
    }
}
