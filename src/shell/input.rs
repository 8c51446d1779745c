//! Validated input prompting
//!
//! Line-oriented prompting helpers for the interactive shell. Every prompt
//! loops until the input validates; EOF on stdin is surfaced as `None` so
//! callers can unwind to the main menu and exit cleanly instead of spinning.

use std::io::{self, Write};

use crate::error::TellerResult;
use crate::models::Money;

/// Print a prompt and read one trimmed line; `None` on EOF
pub fn read_line(prompt: &str) -> TellerResult<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt repeatedly until `parse` accepts the input; `None` on EOF
pub fn prompt_valid<T>(
    prompt: &str,
    error_message: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> TellerResult<Option<T>> {
    loop {
        let Some(line) = read_line(prompt)? else {
            return Ok(None);
        };
        match parse(&line) {
            Some(value) => return Ok(Some(value)),
            None => println!("{}", error_message),
        }
    }
}

/// Prompt for a menu choice between 1 and `max`
pub fn prompt_choice(prompt: &str, max: u32) -> TellerResult<Option<u32>> {
    let error = format!(
        "Invalid choice. Please enter a number between 1 and {}.",
        max
    );
    prompt_valid(prompt, &error, |line| {
        line.parse::<u32>().ok().filter(|n| (1..=max).contains(n))
    })
}

/// Prompt for a strictly positive amount
pub fn prompt_positive_amount(prompt: &str) -> TellerResult<Option<Money>> {
    prompt_valid(
        prompt,
        "Invalid amount. Please enter a positive number.",
        |line| Money::parse(line).ok().filter(|m| m.is_positive()),
    )
}

/// Prompt for a non-negative amount (zero allowed)
pub fn prompt_non_negative_amount(prompt: &str) -> TellerResult<Option<Money>> {
    prompt_valid(
        prompt,
        "Invalid amount. Please enter a non-negative number.",
        |line| Money::parse(line).ok().filter(|m| !m.is_negative()),
    )
}

/// Prompt for an annual interest rate in `[0, max]`; empty input takes the
/// default
pub fn prompt_rate(prompt: &str, max: f64, default: f64) -> TellerResult<Option<f64>> {
    let error = format!(
        "Invalid interest rate. Please enter a number between 0 and {}.",
        max
    );
    prompt_valid(prompt, &error, |line| {
        if line.is_empty() {
            return Some(default);
        }
        line.parse::<f64>()
            .ok()
            .filter(|r| (0.0..=max).contains(r))
    })
}

/// Wait for the user before returning to a menu
pub fn pause() -> TellerResult<()> {
    let _ = read_line("\nPress Enter to continue...")?;
    Ok(())
}
