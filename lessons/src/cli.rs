//! CLI command implementations.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::banking::banking_demo;
use crate::division::run_division;
use crate::factorial::factorial;

/// Print `n!`.
pub fn print_factorial<W: Write>(out: &mut W, n: u32) -> Result<()> {
    let value = factorial(n);
    debug!(n, %value, "factorial computed");
    writeln!(out, "The factorial of {} is {}", n, value)?;
    Ok(())
}

/// Run the safe-division prompt loop on stdin/stdout.
pub fn divide() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();
    let quotient = run_division(&mut input, &mut output).context("safe division")?;
    info!(
        dividend = quotient.dividend,
        divisor = quotient.divisor,
        result = quotient.result,
        "division complete"
    );
    Ok(())
}

/// Print the scripted account withdrawals.
pub fn print_banking<W: Write>(out: &mut W) -> Result<()> {
    for line in banking_demo() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
