//! Employee roster loading.
//!
//! A roster is a CSV file with a `name,salary` header and one employee per
//! row. Rows keep their file order, which is the order the report uses.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::calculation::validate_salary;
use crate::error::{PayrollError, PayrollResult};
use crate::models::EmployeeRecord;

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    salary: String,
}

/// Loads an employee roster from a CSV file.
///
/// Every salary must parse as a decimal and be strictly positive.
///
/// # Example
///
/// ```no_run
/// use payroll_deductions::config::load_roster;
///
/// let employees = load_roster("./staff.csv")?;
/// println!("{} employees", employees.len());
/// # Ok::<(), payroll_deductions::error::PayrollError>(())
/// ```
pub fn load_roster<P: AsRef<Path>>(path: P) -> PayrollResult<Vec<EmployeeRecord>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let file = File::open(path).map_err(|_| PayrollError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    let employees = read_roster(file, &path_str)?;
    info!(path = %path_str, employees = employees.len(), "Loaded employee roster");
    Ok(employees)
}

/// Reads roster rows from any reader. `source` names the input in errors.
pub fn read_roster<R: std::io::Read>(reader: R, source: &str) -> PayrollResult<Vec<EmployeeRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut employees = Vec::new();
    for (index, row) in csv_reader.deserialize::<RosterRow>().enumerate() {
        // Header is line 1.
        let line = index + 2;
        let row = row.map_err(|e| PayrollError::ConfigParseError {
            path: source.to_string(),
            message: format!("line {}: {}", line, e),
        })?;

        let salary = Decimal::from_str(&row.salary)
            .map_err(|_| PayrollError::InvalidSalary {
                input: row.salary.clone(),
                message: format!("{} line {}: salary is not numeric", source, line),
            })
            .and_then(|salary| {
                validate_salary(salary).map_err(|_| PayrollError::InvalidSalary {
                    input: row.salary.clone(),
                    message: format!("{} line {}: salary must be a positive number", source, line),
                })
            })?;

        employees.push(EmployeeRecord::new(row.name, salary));
    }

    Ok(employees)
}

/// Returns the built-in sample roster used when no roster file is given.
pub fn sample_employees() -> Vec<EmployeeRecord> {
    [
        ("Peter Ilunga", 5_340_000),
        ("Jane Kyakilika", 88_000_000),
        ("Alice Kalekesha", 2_350_000),
        ("Linguja LInguja", 155_500_000),
        ("Esther Liswan", 5_680_000),
        ("Evans Ngosa", 5_670_000),
        ("Frank Mumba", 6_780_000),
        ("Ireen Mants", 55_500_000),
        ("Henry Mwanza", 67_809_000),
        ("Saidati Ebeni", 9_840_000),
        ("Debora Mutenda", 42_210_000),
        ("Niza Sikapizie", 7_890_000),
    ]
    .into_iter()
    .map(|(name, cents)| EmployeeRecord::new(name, Decimal::new(cents, 2)))
    .collect()
}
