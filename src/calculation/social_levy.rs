//! Social-security levy (NSSF) calculation.

use rust_decimal::Decimal;

use super::bracket::{BracketTable, DeductionResult};
use super::tables::STATUTORY_TABLES;

/// Returns the statutory social-security levy for `salary`.
///
/// # Examples
///
/// ```
/// use payroll_deductions::calculation::social_levy;
/// use rust_decimal::Decimal;
///
/// assert_eq!(social_levy(Decimal::from(100_000)), Decimal::from(2_500));
/// ```
pub fn social_levy(salary: Decimal) -> Decimal {
    STATUTORY_TABLES.social_levy.apply(salary)
}

/// Applies a social-security levy table to `salary` and records the audit step.
///
/// # Arguments
///
/// * `salary` - The gross salary the levy is charged on
/// * `table` - The social-security levy brackets to apply
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `DeductionResult` containing the flat levy for the matching
/// bracket and an audit step.
pub fn calculate_social_levy(
    salary: Decimal,
    table: &BracketTable,
    step_number: u32,
) -> DeductionResult {
    table.apply_with_audit(salary, "Social Security Levy (NSSF)", step_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(social_levy(dec("99999.99")), dec("1500"));
        assert_eq!(social_levy(dec("100000")), dec("2500"));
        assert_eq!(social_levy(dec("500000")), dec("2500"));
        assert_eq!(social_levy(dec("500000.01")), dec("4500"));
        assert_eq!(social_levy(dec("1000000")), dec("4500"));
        assert_eq!(social_levy(dec("1000000.01")), dec("8500"));
    }

    #[test]
    fn test_calculate_social_levy_audit_step() {
        let result = calculate_social_levy(dec("53400"), &STATUTORY_TABLES.social_levy, 3);

        assert_eq!(result.amount, dec("1500"));
        assert_eq!(result.audit_step.rule_id, "social_levy");
        assert_eq!(result.audit_step.output["bound"].as_str().unwrap(), "< 100000");
        assert!(result.audit_step.reasoning.contains("flat 1500"));
    }
}
