//! Payroll report generation.
//!
//! Reports list one row per employee in input order, in either CSV or a
//! fixed-width table layout, and are written to a single file.

mod format;
mod writer;

pub use format::{ReportFormat, format_amount, format_breakdown, format_grouped, round_cents};
pub use writer::{CSV_HEADER, ReportGenerator, TABLE_TITLE, generate_report, write_report};
