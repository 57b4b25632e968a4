//! Interactive menu.
//!
//! The menu reads choices from any [`BufRead`] and writes to any [`Write`],
//! so it runs the same against a terminal or an in-memory script.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::calculation::parse_salary;
use crate::report::format_breakdown;

use super::session::Session;

/// What the loop should do after handling a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive payroll menu.
pub struct Menu<'a, R, W> {
    input: R,
    output: W,
    session: &'a Session,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Creates a menu over the given input, output and session.
    pub fn new(input: R, output: W, session: &'a Session) -> Self {
        Self {
            input,
            output,
            session,
        }
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// Invalid salaries and failed report writes are reported and the loop
    /// continues. Only failures of the console itself end the loop early.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n--- PAYROLL SYSTEM MENU ---")?;
            writeln!(self.output, "1. Generate Employee Records from List (Save to File)")?;
            writeln!(self.output, "2. Calculate Single Salary (Manual Input)")?;
            writeln!(self.output, "3. Exit")?;

            let Some(choice) = self.prompt("Enter choice (1-3): ")? else {
                info!("Input closed, leaving menu");
                return Ok(());
            };

            let flow = match choice.as_str() {
                "1" => self.generate_records()?,
                "2" => self.single_salary()?,
                "3" => {
                    writeln!(self.output, "Exiting program.")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Writes a prompt and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn generate_records(&mut self) -> io::Result<Flow> {
        let employees = self.session.employees().len();
        writeln!(self.output, "\nGenerating records for {} employees...", employees)?;

        match self.session.generate() {
            Ok((path, content)) => {
                write!(self.output, "{}", content)?;
                writeln!(
                    self.output,
                    "\nSUCCESS: Records have been saved to '{}'.",
                    self.session.output().display()
                )?;
                writeln!(self.output, "File location: {}", path.display())?;
            }
            Err(e) => {
                warn!(error = %e, kind = ?e.kind(), "Report generation failed");
                writeln!(self.output, "Error writing to file: {}", e)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn single_salary(&mut self) -> io::Result<Flow> {
        let input = self.prompt("\nEnter your Salary: ")?.unwrap_or_default();

        match parse_salary(&input) {
            Ok(salary) => {
                let breakdown = self.session.generator().calculator().breakdown(salary);
                writeln!(self.output, "\nSalary Breakdown")?;
                write!(self.output, "{}", format_breakdown(&breakdown))?;
            }
            Err(e) => {
                warn!(error = %e, "Rejected salary input");
                writeln!(self.output, "{}", e)?;
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::DeductionCalculator;
    use crate::models::EmployeeRecord;
    use crate::report::ReportGenerator;
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn session(output: PathBuf) -> Session {
        Session::new(
            ReportGenerator::new(DeductionCalculator::statutory()),
            vec![EmployeeRecord::new("Peter Ilunga", Decimal::new(5_340_000, 2))],
            output,
        )
    }

    fn run_script(session: &Session, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(script.as_bytes(), &mut output, session).run().unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_single_salary_prints_breakdown() {
        let session = session(PathBuf::from("unused.csv"));
        let output = run_script(&session, "2\n53400\n3\n");

        assert!(output.contains("Salary Breakdown"));
        assert!(output.contains("PAYE Tax:     KSh 1,602.00"));
        assert!(output.contains("Net Salary:   KSh 48,463.00"));
        assert!(output.contains("Exiting program."));
    }

    #[test]
    fn test_invalid_salaries_keep_loop_running() {
        let session = session(PathBuf::from("unused.csv"));
        let output = run_script(&session, "2\nabc\n2\n0\n2\n-5\n3\n");

        assert!(output.contains("Invalid salary 'abc'"));
        assert!(output.contains("Invalid salary '0'"));
        assert!(output.contains("Invalid salary '-5'"));
        assert!(!output.contains("Salary Breakdown"));
        assert!(output.contains("Exiting program."));
    }

    #[test]
    fn test_invalid_choice_is_reported() {
        let session = session(PathBuf::from("unused.csv"));
        let output = run_script(&session, "9\n3\n");

        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_end_of_input_leaves_menu() {
        let session = session(PathBuf::from("unused.csv"));
        let output = run_script(&session, "");

        assert!(output.contains("--- PAYROLL SYSTEM MENU ---"));
        assert!(!output.contains("Exiting program."));
    }

    #[test]
    fn test_generate_records_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let session = session(path.clone());
        let output = run_script(&session, "1\n3\n");

        assert!(output.contains("Generating records for 1 employees..."));
        assert!(output.contains("Peter Ilunga,53400.00,1602.00"));
        assert!(output.contains("SUCCESS"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Name,Gross,Tax,NHIF,NSSF,Housing,Total Deductions,Net\n"));
    }

    #[test]
    fn test_generate_records_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.csv");
        let session = session(path);
        let output = run_script(&session, "1\n3\n");

        assert!(output.contains("Error writing to file: Failed to write report to"));
        assert!(output.contains("Exiting program."));
    }
}
