//! Error types for the payroll deduction engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the calculator, loaders and report writer can raise.

use std::io;

use thiserror::Error;

/// Broad category of a [`PayrollError`].
///
/// Callers use this to decide whether a failure is reported and retried
/// (validation) or surfaced as a failed run (I/O, configuration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input value was rejected.
    Validation,
    /// A file could not be read or written.
    Io,
    /// Configuration or roster data is missing or malformed.
    Config,
}

/// The main error type for the payroll deduction engine.
///
/// # Example
///
/// ```
/// use payroll_deductions::error::{ErrorKind, PayrollError};
///
/// let error = PayrollError::InvalidSalary {
///     input: "-5".to_string(),
///     message: "salary must be greater than zero".to_string(),
/// };
/// assert_eq!(error.kind(), ErrorKind::Validation);
/// assert_eq!(
///     error.to_string(),
///     "Invalid salary '-5': salary must be greater than zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A salary was not numeric or was not strictly positive.
    #[error("Invalid salary '{input}': {message}")]
    InvalidSalary {
        /// The raw input that was rejected.
        input: String,
        /// A description of why it was rejected.
        message: String,
    },

    /// The report file could not be created or written.
    #[error("Failed to write report to '{path}': {source}")]
    ReportWrite {
        /// The output path that failed.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The report body could not be encoded.
    #[error("Failed to encode report: {message}")]
    ReportEncoding {
        /// A description of the encoding failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A deduction bracket table is structurally invalid.
    #[error("Invalid bracket table '{table}': {message}")]
    InvalidTable {
        /// The name of the offending table.
        table: String,
        /// A description of what made the table invalid.
        message: String,
    },
}

impl PayrollError {
    /// Returns the broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PayrollError::InvalidSalary { .. } => ErrorKind::Validation,
            PayrollError::ReportWrite { .. } | PayrollError::ReportEncoding { .. } => {
                ErrorKind::Io
            }
            PayrollError::ConfigNotFound { .. }
            | PayrollError::ConfigParseError { .. }
            | PayrollError::InvalidTable { .. } => ErrorKind::Config,
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_salary_displays_input_and_message() {
        let error = PayrollError::InvalidSalary {
            input: "abc".to_string(),
            message: "not a number".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid salary 'abc': not a number");
        assert_eq!(error.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_report_write_wraps_io_source() {
        let error = PayrollError::ReportWrite {
            path: "/readonly/report.csv".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to write report to '/readonly/report.csv': permission denied"
        );
        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(error.source().is_some());
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PayrollError::ConfigNotFound {
            path: "/missing/deductions.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/deductions.yaml"
        );
        assert_eq!(error.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_table_displays_table_and_message() {
        let error = PayrollError::InvalidTable {
            table: "tax".to_string(),
            message: "table is empty".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid bracket table 'tax': table is empty");
        assert_eq!(error.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_report_encoding_is_io_kind() {
        let error = PayrollError::ReportEncoding {
            message: "invalid utf-8".to_string(),
        };
        assert_eq!(error.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_salary() -> PayrollResult<()> {
            Err(PayrollError::InvalidSalary {
                input: "0".to_string(),
                message: "salary must be greater than zero".to_string(),
            })
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_invalid_salary()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
