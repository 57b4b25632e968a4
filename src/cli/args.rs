//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::calculation::DeductionCalculator;
use crate::config::{ConfigLoader, load_roster, sample_employees};
use crate::error::PayrollResult;
use crate::report::{ReportFormat, ReportGenerator};

use super::session::Session;

/// Command-line options for the `payroll` binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "payroll", version)]
#[command(about = "Compute statutory payroll deductions and write a report")]
pub struct Cli {
    /// Path of the report file to write.
    #[arg(short, long, default_value = "payroll_report.txt")]
    pub output: PathBuf,

    /// Print the generated report to stdout.
    #[arg(long)]
    pub print: bool,

    /// Report layout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    pub format: ReportFormat,

    /// Employee roster CSV (`name,salary`); the sample roster is used when omitted.
    #[arg(long, value_name = "CSV")]
    pub employees: Option<PathBuf>,

    /// Deduction tables YAML; the statutory tables are used when omitted.
    #[arg(long, value_name = "YAML")]
    pub config: Option<PathBuf>,

    /// Run the interactive menu instead of a single batch run.
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Loads the configured tables and roster into a session.
    pub fn session(&self) -> PayrollResult<Session> {
        let calculator = match &self.config {
            Some(path) => ConfigLoader::load(path)?.calculator(),
            None => DeductionCalculator::statutory(),
        };

        let employees = match &self.employees {
            Some(path) => load_roster(path)?,
            None => {
                info!("No roster given, using the sample roster");
                sample_employees()
            }
        };

        let generator = ReportGenerator::new(calculator).with_format(self.format);
        Ok(Session::new(generator, employees, self.output.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["payroll"]).unwrap();

        assert_eq!(cli.output, PathBuf::from("payroll_report.txt"));
        assert!(!cli.print);
        assert_eq!(cli.format, ReportFormat::Csv);
        assert!(cli.employees.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.interactive);
    }

    #[test]
    fn test_output_print_and_format() {
        let cli =
            Cli::try_parse_from(["payroll", "-o", "out.csv", "--print", "--format", "table"])
                .unwrap();

        assert_eq!(cli.output, PathBuf::from("out.csv"));
        assert!(cli.print);
        assert_eq!(cli.format, ReportFormat::Table);
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["payroll", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_default_session_uses_sample_roster() {
        let cli = Cli::try_parse_from(["payroll", "-i"]).unwrap();
        let session = cli.session().unwrap();

        assert!(cli.interactive);
        assert_eq!(session.employees().len(), 12);
        assert_eq!(session.generator().format(), ReportFormat::Csv);
    }

    #[test]
    fn test_session_with_missing_roster_fails() {
        let cli = Cli::try_parse_from(["payroll", "--employees", "/nonexistent/staff.csv"])
            .unwrap();
        assert!(cli.session().is_err());
    }
}
