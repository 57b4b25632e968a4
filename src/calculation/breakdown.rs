//! Breakdown aggregation.
//!
//! This module combines the four deductions for one salary into a
//! [`Breakdown`] with its total and net figures.

use rust_decimal::Decimal;

use super::health_levy::calculate_health_levy;
use super::housing_levy::calculate_housing_levy;
use super::social_levy::calculate_social_levy;
use super::tables::DeductionTables;
use super::tax::calculate_tax;
use crate::models::{AuditStep, AuditTrace, Breakdown, DeductionSet};

/// Applies a set of deduction tables to salaries.
///
/// The calculator is pure: the same salary always yields the same breakdown.
///
/// # Example
///
/// ```
/// use payroll_deductions::calculation::DeductionCalculator;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let calculator = DeductionCalculator::statutory();
/// let breakdown = calculator.breakdown(Decimal::from_str("53400.00").unwrap());
///
/// assert_eq!(breakdown.total_deductions, Decimal::from_str("4937").unwrap());
/// assert_eq!(breakdown.net, Decimal::from_str("48463").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeductionCalculator {
    tables: DeductionTables,
}

impl DeductionCalculator {
    /// Creates a calculator over the given tables.
    pub fn new(tables: DeductionTables) -> Self {
        Self { tables }
    }

    /// Creates a calculator over the statutory tables.
    pub fn statutory() -> Self {
        Self::new(DeductionTables::statutory())
    }

    /// Returns the tables this calculator applies.
    pub fn tables(&self) -> &DeductionTables {
        &self.tables
    }

    /// Returns the income tax for `salary`.
    pub fn tax(&self, salary: Decimal) -> Decimal {
        self.tables.tax.apply(salary)
    }

    /// Returns the health levy for `salary`.
    pub fn health_levy(&self, salary: Decimal) -> Decimal {
        self.tables.health_levy.apply(salary)
    }

    /// Returns the social-security levy for `salary`.
    pub fn social_levy(&self, salary: Decimal) -> Decimal {
        self.tables.social_levy.apply(salary)
    }

    /// Returns the housing levy for `salary`.
    pub fn housing_levy(&self, salary: Decimal) -> Decimal {
        salary * self.tables.housing_rate
    }

    /// Returns all four deductions for `salary`.
    pub fn deductions(&self, salary: Decimal) -> DeductionSet {
        DeductionSet {
            tax: self.tax(salary),
            health_levy: self.health_levy(salary),
            social_levy: self.social_levy(salary),
            housing_levy: self.housing_levy(salary),
        }
    }

    /// Returns the full breakdown for `salary`.
    pub fn breakdown(&self, salary: Decimal) -> Breakdown {
        Breakdown::new(salary, self.deductions(salary))
    }

    /// Returns the breakdown along with an audit trace of every rule applied.
    ///
    /// The trace has one step per deduction, in the order tax, health levy,
    /// social-security levy, housing levy, followed by a summary step.
    pub fn breakdown_with_audit(&self, salary: Decimal) -> (Breakdown, AuditTrace) {
        let mut trace = AuditTrace::default();

        let tax = calculate_tax(salary, &self.tables.tax, trace.next_step_number());
        trace.push(tax.audit_step);

        let health = calculate_health_levy(
            salary,
            &self.tables.health_levy,
            trace.next_step_number(),
        );
        trace.push(health.audit_step);

        let social = calculate_social_levy(
            salary,
            &self.tables.social_levy,
            trace.next_step_number(),
        );
        trace.push(social.audit_step);

        let housing =
            calculate_housing_levy(salary, self.tables.housing_rate, trace.next_step_number());
        trace.push(housing.audit_step);

        let breakdown = Breakdown::new(
            salary,
            DeductionSet {
                tax: tax.amount,
                health_levy: health.amount,
                social_levy: social.amount,
                housing_levy: housing.amount,
            },
        );

        trace.push(AuditStep {
            step_number: trace.next_step_number(),
            rule_id: "net_salary".to_string(),
            rule_name: "Net Salary".to_string(),
            input: serde_json::json!({
                "gross": salary.normalize().to_string(),
                "total_deductions": breakdown.total_deductions.normalize().to_string()
            }),
            output: serde_json::json!({
                "net": breakdown.net.normalize().to_string()
            }),
            reasoning: format!(
                "{} - {} = {}",
                salary.normalize(),
                breakdown.total_deductions.normalize(),
                breakdown.net.normalize()
            ),
        });

        (breakdown, trace)
    }
}

/// Computes the statutory breakdown for `salary`.
///
/// # Examples
///
/// ```
/// use payroll_deductions::calculation::compute_breakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = compute_breakdown(Decimal::from(56_800));
/// assert_eq!(breakdown.housing_levy, Decimal::from(1_420));
/// ```
pub fn compute_breakdown(salary: Decimal) -> Breakdown {
    DeductionCalculator::statutory().breakdown(salary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{Bracket, BracketTable, Charge, UpperBound};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_peter_ilunga_breakdown() {
        let breakdown = compute_breakdown(dec("53400.00"));

        assert_eq!(breakdown.gross, dec("53400.00"));
        assert_eq!(breakdown.tax, dec("1602.00"));
        assert_eq!(breakdown.health_levy, dec("500"));
        assert_eq!(breakdown.social_levy, dec("1500"));
        assert_eq!(breakdown.housing_levy, dec("1335.00"));
        assert_eq!(breakdown.total_deductions, dec("4937.00"));
        assert_eq!(breakdown.net, dec("48463.00"));
    }

    #[test]
    fn test_high_earner_breakdown() {
        let breakdown = compute_breakdown(dec("1555000"));

        assert_eq!(breakdown.tax, dec("155500"));
        assert_eq!(breakdown.health_levy, dec("9000"));
        assert_eq!(breakdown.social_levy, dec("8500"));
        assert_eq!(breakdown.housing_levy, dec("38875"));
        assert_eq!(breakdown.total_deductions, dec("211875"));
        assert_eq!(breakdown.net, dec("1343125"));
    }

    #[test]
    fn test_statutory_calculator_matches_free_function() {
        let calculator = DeductionCalculator::statutory();
        for salary in ["1", "19999.99", "53400", "98400", "422100", "880000", "1555000"] {
            assert_eq!(calculator.breakdown(dec(salary)), compute_breakdown(dec(salary)));
        }
    }

    #[test]
    fn test_audit_trace_matches_breakdown() {
        let calculator = DeductionCalculator::statutory();
        let (breakdown, trace) = calculator.breakdown_with_audit(dec("53400"));

        assert_eq!(breakdown, compute_breakdown(dec("53400")));
        let rule_ids: Vec<&str> = trace.steps.iter().map(|s| s.rule_id.as_str()).collect();
        assert_eq!(
            rule_ids,
            vec!["tax", "health_levy", "social_levy", "housing_levy", "net_salary"]
        );

        let step_numbers: Vec<u32> = trace.steps.iter().map(|s| s.step_number).collect();
        assert_eq!(step_numbers, vec![1, 2, 3, 4, 5]);

        let net = trace.step("net_salary").unwrap();
        assert_eq!(net.output["net"].as_str().unwrap(), "48463");
    }

    #[test]
    fn test_custom_tables_are_applied() {
        let mut tables = DeductionTables::statutory();
        tables.social_levy = BracketTable::new(
            "social_levy",
            vec![Bracket::new(UpperBound::Unbounded, Charge::Flat(dec("100")))],
        )
        .unwrap();
        tables.housing_rate = dec("0.01");

        let calculator = DeductionCalculator::new(tables);
        let breakdown = calculator.breakdown(dec("53400"));

        assert_eq!(breakdown.social_levy, dec("100"));
        assert_eq!(breakdown.housing_levy, dec("534"));
        assert_eq!(breakdown.tax, dec("1602"));
    }
}
