//! Housing levy calculation.
//!
//! The housing levy is a single rate on the whole gross salary with no brackets.

use rust_decimal::Decimal;

use super::bracket::DeductionResult;
use super::tables::HOUSING_LEVY_RATE;
use crate::models::AuditStep;

/// Returns the statutory housing levy (2.5% of `salary`), unrounded.
///
/// # Examples
///
/// ```
/// use payroll_deductions::calculation::housing_levy;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = housing_levy(Decimal::from(56_800));
/// assert_eq!(amount, Decimal::from_str("1420").unwrap());
/// ```
pub fn housing_levy(salary: Decimal) -> Decimal {
    salary * HOUSING_LEVY_RATE
}

/// Applies a housing levy rate to `salary` and records the audit step.
pub fn calculate_housing_levy(salary: Decimal, rate: Decimal, step_number: u32) -> DeductionResult {
    let amount = salary * rate;
    let percent = (rate * Decimal::ONE_HUNDRED).normalize();

    DeductionResult {
        amount,
        audit_step: AuditStep {
            step_number,
            rule_id: "housing_levy".to_string(),
            rule_name: "Housing Levy".to_string(),
            input: serde_json::json!({
                "salary": salary.normalize().to_string(),
                "rate": rate.normalize().to_string()
            }),
            output: serde_json::json!({
                "amount": amount.normalize().to_string()
            }),
            reasoning: format!(
                "{}% of {} = {}",
                percent,
                salary.normalize(),
                amount.normalize()
            ),
        },
    }
}
