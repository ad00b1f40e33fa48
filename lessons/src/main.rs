//! Small standalone lessons: factorial, safe division, and account overrides.

mod banking;
mod cli;
mod division;
mod factorial;

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use university::{exit_codes, logging};

#[derive(Parser)]
#[command(name = "lessons", version, about = "Standalone Rust lessons")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the factorial of N.
    Factorial {
        #[arg(default_value_t = 5)]
        n: u32,
    },
    /// Divide two numbers read from stdin, re-prompting on bad input.
    Divide,
    /// Run scripted withdrawals on savings and checking accounts.
    Bank,
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
    match cli.command {
        Command::Factorial { n } => cli::print_factorial(&mut io::stdout().lock(), n),
        Command::Divide => cli::divide(),
        Command::Bank => cli::print_banking(&mut io::stdout().lock()),
    }
}
