//! Formatting utilities used for CLI and export outputs.

use chrono::TimeDelta;
use rust_decimal::{Decimal, RoundingStrategy};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// `"{hours}h {minutes}m"`, e.g. `43h 24m`.
pub fn format_duration(d: TimeDelta) -> String {
    let mins = d.num_minutes();
    let sign = if mins < 0 { "-" } else { "" };
    let abs_m = mins.abs();
    format!("{}{}h {}m", sign, abs_m / 60, abs_m % 60)
}

/// Whole currency units with thousands separated by spaces: `12 405`.
pub fn format_money(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Hours with one decimal place, rounded half-up (`2.5`).
pub fn hours_one_decimal(d: TimeDelta) -> Decimal {
    (Decimal::from(d.num_minutes()) / Decimal::from(60))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}
