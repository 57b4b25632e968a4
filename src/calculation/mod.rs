//! Calculation logic for the payroll deduction engine.
//!
//! This module contains the bracket table lookup, the statutory tables,
//! one function per deduction (income tax, health levy, social-security
//! levy, housing levy), the breakdown aggregator and salary validation.

mod bracket;
mod breakdown;
mod health_levy;
mod housing_levy;
mod social_levy;
mod tables;
mod tax;
mod validation;

pub use bracket::{Bracket, BracketTable, Charge, DeductionResult, UpperBound};
pub use breakdown::{DeductionCalculator, compute_breakdown};
pub use health_levy::{calculate_health_levy, health_levy};
pub use housing_levy::{calculate_housing_levy, housing_levy};
pub use social_levy::{calculate_social_levy, social_levy};
pub use tables::{
    DeductionTables, HEALTH_LEVY_BRACKETS, HEALTH_LEVY_TABLE, HOUSING_LEVY_RATE, SOCIAL_LEVY_BRACKETS,
    SOCIAL_LEVY_TABLE, STATUTORY_TABLES, TAX_BRACKETS, TAX_TABLE,
};
pub use tax::{calculate_tax, tax};
pub use validation::{parse_salary, validate_salary};
