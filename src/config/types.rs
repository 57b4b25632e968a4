//! Configuration types for deduction tables.
//!
//! This module contains the strongly-typed structures deserialized from a
//! YAML deduction-table file. They mirror the file layout; conversion into
//! validated [`crate::calculation::DeductionTables`] happens in the loader.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One bracket entry as written in the configuration file.
///
/// At most one of `below` / `at_most` may be set; the final entry of a table
/// sets neither. Exactly one of `rate` / `amount` must be set.
///
/// ```yaml
/// - below: 50000
///   rate: 0.02
/// - at_most: 100000
///   rate: 0.03
/// - rate: 0.10
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BracketConfig {
    /// Strict upper limit (`salary < below`).
    #[serde(default)]
    pub below: Option<Decimal>,
    /// Inclusive upper limit (`salary <= at_most`).
    #[serde(default)]
    pub at_most: Option<Decimal>,
    /// Fraction of salary charged (0.03 means 3%).
    #[serde(default)]
    pub rate: Option<Decimal>,
    /// Flat amount charged.
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// The deduction-table file structure.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeductionTablesConfig {
    /// Income tax brackets.
    pub tax: Vec<BracketConfig>,
    /// Health levy brackets.
    pub health_levy: Vec<BracketConfig>,
    /// Social-security levy brackets.
    pub social_levy: Vec<BracketConfig>,
    /// Housing levy rate.
    pub housing_rate: Decimal,
}
