//! Employee input rows for batch report generation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named employee and their gross salary.
///
/// Rows are immutable inputs; the report generator never reorders them.
///
/// # Example
///
/// ```
/// use payroll_deductions::models::EmployeeRecord;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord::new("Peter Ilunga", Decimal::new(5_340_000, 2));
/// assert_eq!(employee.name, "Peter Ilunga");
/// assert_eq!(employee.salary.to_string(), "53400.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// The employee's display name.
    pub name: String,
    /// Gross salary in currency units.
    pub salary: Decimal,
}

impl EmployeeRecord {
    /// Creates a new employee record.
    pub fn new(name: impl Into<String>, salary: Decimal) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }
}
