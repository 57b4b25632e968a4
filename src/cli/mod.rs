//! Command-line surface for the `payroll` binary.
//!
//! This module parses arguments, prepares a [`Session`] from them, and
//! drives the interactive menu.

mod args;
mod menu;
mod session;

pub use args::Cli;
pub use menu::Menu;
pub use session::Session;
