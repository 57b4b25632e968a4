//! Report rendering and file output.
//!
//! This module turns an ordered list of employees into a CSV or table
//! report and writes it to disk in a single whole-file write.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::calculation::DeductionCalculator;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Breakdown, EmployeeRecord};

use super::format::{ReportFormat, format_amount, format_grouped};

/// Header row of the CSV report.
pub const CSV_HEADER: [&str; 8] = [
    "Name",
    "Gross",
    "Tax",
    "NHIF",
    "NSSF",
    "Housing",
    "Total Deductions",
    "Net",
];

/// Title line of the table report.
pub const TABLE_TITLE: &str = "COMPANY PAYROLL REPORT";

const TABLE_DIVIDER_WIDTH: usize = 97;

/// Renders and writes payroll reports.
///
/// # Example
///
/// ```no_run
/// use payroll_deductions::calculation::DeductionCalculator;
/// use payroll_deductions::config::sample_employees;
/// use payroll_deductions::report::{ReportFormat, ReportGenerator};
///
/// let generator = ReportGenerator::new(DeductionCalculator::statutory())
///     .with_format(ReportFormat::Table);
/// let path = generator.generate(&sample_employees(), "payroll_report.txt")?;
/// println!("Report written to: {}", path.display());
/// # Ok::<(), payroll_deductions::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportGenerator {
    calculator: DeductionCalculator,
    format: ReportFormat,
}

impl ReportGenerator {
    /// Creates a CSV report generator over the given calculator.
    pub fn new(calculator: DeductionCalculator) -> Self {
        Self {
            calculator,
            format: ReportFormat::default(),
        }
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    /// Returns the output format.
    pub fn format(&self) -> ReportFormat {
        self.format
    }

    /// Returns the calculator used for every row.
    pub fn calculator(&self) -> &DeductionCalculator {
        &self.calculator
    }

    /// Computes one breakdown per employee, in input order.
    pub fn breakdowns<'a>(
        &self,
        employees: &'a [EmployeeRecord],
    ) -> Vec<(&'a EmployeeRecord, Breakdown)> {
        employees
            .iter()
            .map(|employee| (employee, self.calculator.breakdown(employee.salary)))
            .collect()
    }

    /// Renders the full report text.
    pub fn render(&self, employees: &[EmployeeRecord]) -> PayrollResult<String> {
        let rows = self.breakdowns(employees);
        match self.format {
            ReportFormat::Csv => render_csv(&rows),
            ReportFormat::Table => Ok(render_table(&rows)),
        }
    }

    /// Renders the report and writes it to `output_path`.
    ///
    /// An existing file is truncated and replaced. Returns the canonical
    /// path of the written file.
    ///
    /// # Errors
    ///
    /// Returns `ReportWrite` if the file cannot be created or written, and
    /// `ReportEncoding` if the CSV body cannot be encoded.
    pub fn generate<P: AsRef<Path>>(
        &self,
        employees: &[EmployeeRecord],
        output_path: P,
    ) -> PayrollResult<PathBuf> {
        let output_path = output_path.as_ref();
        let path_str = output_path.display().to_string();
        info!(
            employees = employees.len(),
            format = %self.format,
            path = %path_str,
            "Generating payroll report"
        );

        let content = self.render(employees)?;
        write_report(output_path, &content)
    }
}

/// Writes rendered report text to `output_path`, replacing any existing file.
///
/// Returns the canonical path of the written file.
pub fn write_report<P: AsRef<Path>>(output_path: P, content: &str) -> PayrollResult<PathBuf> {
    let output_path = output_path.as_ref();
    let path_str = output_path.display().to_string();
    let write_error = |source| PayrollError::ReportWrite {
        path: path_str.clone(),
        source,
    };

    fs::write(output_path, content.as_bytes()).map_err(write_error)?;
    let written = resolve_written_path(output_path);

    debug!(bytes = content.len(), path = %written.display(), "Report written");
    Ok(written)
}

/// Resolves the path of a file that has already been written.
///
/// Prefers the canonical path; when that cannot be resolved the file is
/// still on disk, so the absolute form of `path` is returned instead.
fn resolve_written_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|error| {
        warn!(
            path = %path.display(),
            error = %error,
            "Could not canonicalize report path"
        );
        std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
    })
}

/// Writes a CSV report with the statutory tables.
///
/// Shorthand for `ReportGenerator::default().generate(employees, output_path)`.
pub fn generate_report<P: AsRef<Path>>(
    employees: &[EmployeeRecord],
    output_path: P,
) -> PayrollResult<PathBuf> {
    ReportGenerator::default().generate(employees, output_path)
}

fn render_csv(rows: &[(&EmployeeRecord, Breakdown)]) -> PayrollResult<String> {
    let encoding_error = |e: &dyn std::fmt::Display| PayrollError::ReportEncoding {
        message: e.to_string(),
    };

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| encoding_error(&e))?;

    for (employee, breakdown) in rows {
        writer
            .write_record([
                employee.name.clone(),
                format_amount(breakdown.gross),
                format_amount(breakdown.tax),
                format_amount(breakdown.health_levy),
                format_amount(breakdown.social_levy),
                format_amount(breakdown.housing_levy),
                format_amount(breakdown.total_deductions),
                format_amount(breakdown.net),
            ])
            .map_err(|e| encoding_error(&e))?;
    }

    let bytes = writer.into_inner().map_err(|e| encoding_error(&e))?;
    String::from_utf8(bytes).map_err(|e| encoding_error(&e))
}

fn render_table(rows: &[(&EmployeeRecord, Breakdown)]) -> String {
    let divider = "-".repeat(TABLE_DIVIDER_WIDTH);
    let mut out = String::new();

    out.push_str(TABLE_TITLE);
    out.push('\n');
    out.push_str(&divider);
    out.push('\n');
    out.push_str(&table_line([
        "Name",
        "Gross Salary",
        "PAYE Tax",
        "NHIF",
        "NSSF",
        "Housing",
        "Net Salary",
    ]));
    out.push_str(&divider);
    out.push('\n');

    for (employee, breakdown) in rows {
        out.push_str(&table_line([
            employee.name.as_str(),
            &format_grouped(breakdown.gross),
            &format_grouped(breakdown.tax),
            &format_grouped(breakdown.health_levy),
            &format_grouped(breakdown.social_levy),
            &format_grouped(breakdown.housing_levy),
            &format_grouped(breakdown.net),
        ]));
    }

    out.push_str(&divider);
    out.push('\n');
    out
}

fn table_line(cells: [&str; 7]) -> String {
    let [name, gross, tax, nhif, nssf, housing, net] = cells;
    format!(
        " | {:<15} | {:>12} | {:>10} | {:>8} | {:>8} | {:>10} | {:>12} |\n",
        name, gross, tax, nhif, nssf, housing, net
    )
}
