//! Core data models for the payroll deduction engine.
//!
//! This module contains the input rows, computed breakdowns and audit
//! records shared by the calculator and the report generator.

mod audit;
mod breakdown;
mod employee;

pub use audit::{AuditStep, AuditTrace};
pub use breakdown::{Breakdown, DeductionSet};
pub use employee::EmployeeRecord;
