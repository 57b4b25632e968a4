//! A prepared payroll run: tables, roster and output path.

use std::path::{Path, PathBuf};

use crate::error::PayrollResult;
use crate::models::EmployeeRecord;
use crate::report::{ReportGenerator, write_report};

/// Everything a batch or interactive run needs.
#[derive(Debug, Clone)]
pub struct Session {
    generator: ReportGenerator,
    employees: Vec<EmployeeRecord>,
    output: PathBuf,
}

impl Session {
    /// Creates a session.
    pub fn new(generator: ReportGenerator, employees: Vec<EmployeeRecord>, output: PathBuf) -> Self {
        Self {
            generator,
            employees,
            output,
        }
    }

    /// Returns the report generator.
    pub fn generator(&self) -> &ReportGenerator {
        &self.generator
    }

    /// Returns the roster in report order.
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    /// Returns the configured output path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Renders the report, writes it, and returns the written path with the text.
    pub fn generate(&self) -> PayrollResult<(PathBuf, String)> {
        let content = self.generator.render(&self.employees)?;
        let path = write_report(&self.output, &content)?;
        Ok((path, content))
    }
}
