//! Salary input validation.
//!
//! The calculator accepts any salary; callers that take salaries from
//! people (the interactive menu, roster files) check them here first.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// Parses a salary typed by a user and checks that it is positive.
///
/// Surrounding whitespace is ignored. Plain decimals (`53400`, `53400.50`)
/// and scientific notation (`5.34e4`) are accepted.
///
/// # Examples
///
/// ```
/// use payroll_deductions::calculation::parse_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_salary(" 53400 ").unwrap(), Decimal::from(53_400));
/// assert!(parse_salary("abc").is_err());
/// assert!(parse_salary("0").is_err());
/// ```
pub fn parse_salary(input: &str) -> PayrollResult<Decimal> {
    let trimmed = input.trim();
    let salary = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| PayrollError::InvalidSalary {
            input: trimmed.to_string(),
            message: "please enter a numeric salary".to_string(),
        })?;

    validate_salary(salary).map_err(|error| match error {
        PayrollError::InvalidSalary { message, .. } => PayrollError::InvalidSalary {
            input: trimmed.to_string(),
            message,
        },
        other => other,
    })
}

/// Checks that `salary` is strictly positive.
pub fn validate_salary(salary: Decimal) -> PayrollResult<Decimal> {
    if salary <= Decimal::ZERO {
        return Err(PayrollError::InvalidSalary {
            input: salary.to_string(),
            message: "salary must be a positive number".to_string(),
        });
    }
    Ok(salary)
}
