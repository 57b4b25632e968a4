//! Health levy (NHIF) calculation.

use rust_decimal::Decimal;

use super::bracket::{BracketTable, DeductionResult};
use super::tables::STATUTORY_TABLES;

/// Returns the statutory health levy for `salary`.
///
/// The levy is a flat amount per bracket, from 300 for salaries below
/// 20,000 up to 9,000 for salaries above 1,000,000.
///
/// # Examples
///
/// ```
/// use payroll_deductions::calculation::health_levy;
/// use rust_decimal::Decimal;
///
/// assert_eq!(health_levy(Decimal::from(20_000)), Decimal::from(500));
/// ```
pub fn health_levy(salary: Decimal) -> Decimal {
    STATUTORY_TABLES.health_levy.apply(salary)
}

/// Applies a health levy table to `salary` and records the audit step.
///
/// # Arguments
///
/// * `salary` - The gross salary the levy is charged on
/// * `table` - The health levy brackets to apply
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `DeductionResult` containing the flat levy for the matching
/// bracket and an audit step.
pub fn calculate_health_levy(
    salary: Decimal,
    table: &BracketTable,
    step_number: u32,
) -> DeductionResult {
    table.apply_with_audit(salary, "Health Levy (NHIF)", step_number)
}
