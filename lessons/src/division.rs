//! Interactive safe division: keep prompting until two valid numbers with a
//! non-zero divisor are entered.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing::debug;

pub const FIRST_PROMPT: &str = "Enter the first number: ";
pub const SECOND_PROMPT: &str = "Enter the second number (cannot be zero): ";
pub const ZERO_DIVISOR: &str = "Error: Division by zero is not allowed. Please try again.";
pub const INVALID_NUMBER: &str = "Error: Please enter valid numbers only.";

/// Completed division.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quotient {
    pub dividend: f64,
    pub divisor: f64,
    pub result: f64,
}

enum Entry {
    Number(f64),
    Invalid,
}

/// Run the prompt loop against `input`, writing prompts and messages to
/// `output`. A malformed number at either prompt restarts from the first
/// prompt. Fails if `input` ends first.
pub fn run_division<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Quotient> {
    'outer: loop {
        let dividend = match read_number(input, output, FIRST_PROMPT)? {
            Entry::Number(value) => value,
            Entry::Invalid => {
                writeln!(output, "{}", INVALID_NUMBER)?;
                continue;
            }
        };

        let divisor = loop {
            match read_number(input, output, SECOND_PROMPT)? {
                Entry::Number(value) if value != 0.0 => break value,
                Entry::Number(_) => writeln!(output, "{}", ZERO_DIVISOR)?,
                Entry::Invalid => {
                    writeln!(output, "{}", INVALID_NUMBER)?;
                    continue 'outer;
                }
            }
        };

        let result = dividend / divisor;
        writeln!(
            output,
            "The result of {} divided by {} is: {}",
            format_number(dividend),
            format_number(divisor),
            format_number(result)
        )?;
        return Ok(Quotient {
            dividend,
            divisor,
            result,
        });
    }
}

fn read_number<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<Entry> {
    write!(output, "{}", prompt)?;
    output.flush().context("flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("read number")?;
    if read == 0 {
        bail!("input closed before division completed");
    }
    let trimmed = line.trim();
    match trimmed.parse::<f64>() {
        Ok(value) => Ok(Entry::Number(value)),
        Err(err) => {
            debug!(input = trimmed, %err, "rejected number");
            Ok(Entry::Invalid)
        }
    }
}

/// Shortest round-trip text for `value`, always with a decimal point or an
/// exponent: `10.0`, `0.0001`, `1e-05`, `1e+16`, `nan`, `-inf`.
///
/// Positional notation is used for decimal exponents in `-4..16`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-1.5e-5`.
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if !(-4..16).contains(&exponent) {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exponent.abs());
    }

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("{}0.{}{}", sign, zeros, digits);
    }
    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{}{}{}.0", sign, digits, zeros)
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str) -> (Result<Quotient>, String) {
        let mut input = script.as_bytes();
        let mut output = Vec::new();
        let result = run_division(&mut input, &mut output);
        (result, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn divides_valid_input() {
        let (result, output) = run("10\n4\n");
        let quotient = result.expect("quotient");
        assert_eq!(quotient.result, 2.5);
        assert_eq!(
            output,
            format!(
                "{}{}The result of 10.0 divided by 4.0 is: 2.5\n",
                FIRST_PROMPT, SECOND_PROMPT
            )
        );
    }

    #[test]
    fn zero_divisor_reprompts_only_second_number() {
        let (result, output) = run("10\n0\n3\n");
        assert_eq!(result.expect("quotient").divisor, 3.0);
        assert_eq!(output.matches(FIRST_PROMPT).count(), 1);
        assert_eq!(output.matches(SECOND_PROMPT).count(), 2);
        assert!(output.contains(ZERO_DIVISOR));
        assert!(output.ends_with("is: 3.3333333333333335\n"));
    }

    #[test]
    fn invalid_number_restarts_from_first_prompt() {
        let (result, output) = run("abc\n8\nxyz\n6\n2\n");
        let quotient = result.expect("quotient");
        assert_eq!(quotient.dividend, 6.0);
        assert_eq!(quotient.result, 3.0);
        assert_eq!(output.matches(INVALID_NUMBER).count(), 2);
        assert_eq!(output.matches(FIRST_PROMPT).count(), 3);
    }

    #[test]
    fn numbers_print_like_decimal_literals() {
        let cases = [
            (10.0, "10.0"),
            (2.5, "2.5"),
            (-0.0, "-0.0"),
            (-3.25, "-3.25"),
            (1.0 / 3.0, "0.3333333333333333"),
            (123456.789, "123456.789"),
            (0.0001, "0.0001"),
            (0.00015, "0.00015"),
            (0.00001, "1e-05"),
            (-1.5e-7, "-1.5e-07"),
            (1e15, "1000000000000000.0"),
            (1e16, "1e+16"),
            (1.2345e20, "1.2345e+20"),
            (1e300, "1e+300"),
            (f64::NAN, "nan"),
            (f64::INFINITY, "inf"),
            (f64::NEG_INFINITY, "-inf"),
        ];
        for (value, expected) in cases {
            assert_eq!(format_number(value), expected, "formatting {:e}", value);
        }
    }

    #[test]
    fn large_and_nan_inputs_keep_their_notation() {
        let (result, output) = run("1e16\n1\n");
        assert_eq!(result.expect("quotient").result, 1e16);
        assert!(output.ends_with("The result of 1e+16 divided by 1.0 is: 1e+16\n"));

        let (result, output) = run("nan\n1\n");
        assert!(result.expect("quotient").result.is_nan());
        assert!(output.ends_with("The result of nan divided by 1.0 is: nan\n"));
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = run("5\n0\n");
        let err = result.expect_err("eof");
        assert!(err.to_string().contains("input closed"));
    }
}
