//! University records CLI.
//!
//! Runs the scripted demonstration or renders a roster file of students,
//! lecturers and staff.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use university::demo::run_demo;
use university::exit_codes;
use university::io::config::{DEFAULT_CONFIG_FILE, OutputFormat, load_config};
use university::logging;
use university::show::show_roster;

#[derive(Parser)]
#[command(
    name = "university",
    version,
    about = "Student, lecturer and staff records"
)]
struct Cli {
    /// Path to the campus config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the scripted demonstration.
    Demo,
    /// Print every record in a roster file.
    Show {
        /// Roster TOML file.
        roster: PathBuf,
        /// Output format (defaults to the config value).
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli.config).context("load config")?;
    debug!(config = %cli.config.display(), "config ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Demo => {
            run_demo(&mut out, &cfg)?;
        }
        Command::Show { roster, format } => {
            show_roster(&mut out, &roster, format.unwrap_or(cfg.format))?;
        }
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_demo() {
        let cli = Cli::parse_from(["university", "demo"]);
        assert!(matches!(cli.command, Command::Demo));
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn parse_show_with_format() {
        let cli = Cli::parse_from(["university", "show", "roster.toml", "--format", "json"]);
        match cli.command {
            Command::Show { roster, format } => {
                assert_eq!(roster, PathBuf::from("roster.toml"));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            Command::Demo => panic!("expected show"),
        }
    }

    #[test]
    fn parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["university", "demo", "--config", "alt.toml"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
    }
}
