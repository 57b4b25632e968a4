//! Income tax (PAYE) calculation.
//!
//! Tax is a percentage of gross selected by salary bracket: 2% below
//! 50,000, then 3%, 5% and 7% up to and including 100,000, 250,000 and
//! 500,000, and 10% above that.

use rust_decimal::Decimal;

use super::bracket::{BracketTable, DeductionResult};
use super::tables::STATUTORY_TABLES;

/// Returns the statutory income tax for `salary`, unrounded.
///
/// # Examples
///
/// ```
/// use payroll_deductions::calculation::tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 53,400 is inside the inclusive 50,000-100,000 tier (3%)
/// let amount = tax(Decimal::from_str("53400").unwrap());
/// assert_eq!(amount, Decimal::from_str("1602").unwrap());
/// ```
pub fn tax(salary: Decimal) -> Decimal {
    STATUTORY_TABLES.tax.apply(salary)
}

/// Applies a tax table to `salary` and records the audit step.
///
/// The first bracket whose bound admits the salary supplies the rate; the
/// amount is the salary times that rate, unrounded.
///
/// # Arguments
///
/// * `salary` - The gross salary being taxed
/// * `table` - The tax brackets to apply, usually `STATUTORY_TABLES.tax`
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `DeductionResult` containing the tax and an audit step naming
/// the bracket that was applied.
///
/// # Examples
///
/// ```
/// use payroll_deductions::calculation::{STATUTORY_TABLES, calculate_tax};
/// use rust_decimal::Decimal;
///
/// let result = calculate_tax(Decimal::from(50_000), &STATUTORY_TABLES.tax, 1);
/// assert_eq!(result.amount, Decimal::from(1_500));
/// assert_eq!(result.audit_step.rule_id, "tax");
/// assert_eq!(result.audit_step.step_number, 1);
/// ```
pub fn calculate_tax(salary: Decimal, table: &BracketTable, step_number: u32) -> DeductionResult {
    table.apply_with_audit(salary, "PAYE Tax", step_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_just_below_first_threshold_is_two_percent() {
        assert_eq!(tax(dec("49999.99")), dec("49999.99") * dec("0.02"));
    }

    #[test]
    fn test_first_threshold_is_three_percent() {
        assert_eq!(tax(dec("50000")), dec("1500"));
    }

    #[test]
    fn test_second_threshold_is_inclusive() {
        assert_eq!(tax(dec("100000")), dec("3000"));
        assert_eq!(tax(dec("100000.01")), dec("100000.01") * dec("0.05"));
    }

    #[test]
    fn test_upper_tiers() {
        assert_eq!(tax(dec("250000")), dec("12500"));
        assert_eq!(tax(dec("250000.01")), dec("250000.01") * dec("0.07"));
        assert_eq!(tax(dec("500000")), dec("35000"));
        assert_eq!(tax(dec("500000.01")), dec("500000.01") * dec("0.10"));
        assert_eq!(tax(dec("1555000")), dec("155500"));
    }

    #[test]
    fn test_zero_salary_has_zero_tax() {
        assert_eq!(tax(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_calculate_tax_audit_step() {
        let result = calculate_tax(dec("53400"), &STATUTORY_TABLES.tax, 1);

        assert_eq!(result.amount, dec("1602"));
        assert_eq!(result.audit_step.rule_id, "tax");
        assert_eq!(result.audit_step.rule_name, "PAYE Tax");
        assert_eq!(result.audit_step.output["charge"].as_str().unwrap(), "3%");
        assert_eq!(result.audit_step.output["bound"].as_str().unwrap(), "<= 100000");
    }
}
