//! Configuration loading for the payroll deduction engine.
//!
//! This module loads deduction tables from YAML files and employee rosters
//! from CSV files, and provides the built-in sample roster.
//!
//! # Example
//!
//! ```no_run
//! use payroll_deductions::config::{ConfigLoader, sample_employees};
//!
//! let config = ConfigLoader::load("./config/deductions.yaml").unwrap();
//! let calculator = config.calculator();
//! for employee in sample_employees() {
//!     println!("{}: {}", employee.name, calculator.breakdown(employee.salary).net);
//! }
//! ```

mod loader;
mod roster;
mod types;

pub use loader::ConfigLoader;
pub use roster::{load_roster, read_roster, sample_employees};
pub use types::{BracketConfig, DeductionTablesConfig};
