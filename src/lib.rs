//! Statutory payroll deductions.
//!
//! This crate computes income tax, health levy, social-security levy and
//! housing levy for gross salaries using bracket tables, aggregates them
//! into gross-to-net breakdowns, and writes payroll reports as CSV or as a
//! fixed-width table.

#![warn(missing_docs)]

pub mod calculation;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
