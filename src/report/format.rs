//! Report formats and monetary presentation.
//!
//! Amounts are rounded to two decimal places (midpoint away from zero) only
//! here, at presentation time.

use std::fmt;

use clap::ValueEnum;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::Breakdown;

/// Output layout of a payroll report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Comma-separated values with a header row and plain two-decimal amounts.
    #[default]
    Csv,
    /// Fixed-width, pipe-delimited table with thousands separators.
    Table,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportFormat::Csv => write!(f, "csv"),
            ReportFormat::Table => write!(f, "table"),
        }
    }
}

/// Rounds `value` to cents for display.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with exactly two decimals and no grouping.
///
/// # Examples
///
/// ```
/// use payroll_deductions::report::format_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(format_amount(Decimal::from(500)), "500.00");
/// assert_eq!(format_amount(Decimal::from_str("1999.995").unwrap()), "2000.00");
/// ```
pub fn format_amount(value: Decimal) -> String {
    format!("{:.2}", round_cents(value))
}

/// Formats an amount with two decimals and comma thousands separators.
///
/// # Examples
///
/// ```
/// use payroll_deductions::report::format_grouped;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_grouped(Decimal::from(1_555_000)), "1,555,000.00");
/// ```
pub fn format_grouped(value: Decimal) -> String {
    let plain = format_amount(value);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (whole, cents) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, cents)
}

/// Formats one breakdown as labelled lines for the console.
///
/// ```text
/// Gross Salary: KSh 53,400.00
/// PAYE Tax:     KSh 1,602.00
/// ...
/// Net Salary:   KSh 48,463.00
/// ```
pub fn format_breakdown(breakdown: &Breakdown) -> String {
    [
        ("Gross Salary:", breakdown.gross),
        ("PAYE Tax:", breakdown.tax),
        ("NHIF Levy:", breakdown.health_levy),
        ("NSSF Levy:", breakdown.social_levy),
        ("Housing Levy:", breakdown.housing_levy),
        ("Total Ded.:", breakdown.total_deductions),
        ("Net Salary:", breakdown.net),
    ]
    .iter()
    .map(|(label, value)| format!("{:<13} KSh {}\n", label, format_grouped(*value)))
    .collect()
}
