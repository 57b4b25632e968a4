//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading deduction
//! tables from a YAML file.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculation::{
    Bracket, BracketTable, Charge, DeductionCalculator, DeductionTables, HEALTH_LEVY_TABLE,
    SOCIAL_LEVY_TABLE, TAX_TABLE, UpperBound,
};
use crate::error::{PayrollError, PayrollResult};

use super::types::{BracketConfig, DeductionTablesConfig};

/// Loads and provides access to deduction tables.
///
/// # File Layout
///
/// ```text
/// tax:            # brackets, ascending
///   - below: 50000
///     rate: 0.02
///   - rate: 0.10  # final bracket has no bound
/// health_levy:
///   - ...
/// social_levy:
///   - ...
/// housing_rate: 0.025
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_deductions::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/deductions.yaml").unwrap();
/// let calculator = loader.calculator();
/// println!("Net: {}", calculator.breakdown(Decimal::from(53_400)).net);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: DeductionTables,
}

impl ConfigLoader {
    /// Loads deduction tables from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown keys (`ConfigParseError`)
    /// - Any table is malformed (`InvalidTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        info!(path = %path_str, "Loaded deduction tables");
        Ok(loader)
    }

    /// Parses deduction tables from YAML text.
    ///
    /// `source` names the text in error messages.
    pub fn from_yaml_str(content: &str, source: &str) -> PayrollResult<Self> {
        let config: DeductionTablesConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let tables = Self::build_tables(config)?;
        debug!(
            source,
            tax_brackets = tables.tax.brackets().len(),
            health_levy_brackets = tables.health_levy.brackets().len(),
            social_levy_brackets = tables.social_levy.brackets().len(),
            "Validated deduction tables"
        );
        Ok(Self { tables })
    }

    fn build_tables(config: DeductionTablesConfig) -> PayrollResult<DeductionTables> {
        if config.housing_rate < Decimal::ZERO {
            return Err(PayrollError::InvalidTable {
                table: "housing_rate".to_string(),
                message: format!("rate must not be negative ({})", config.housing_rate),
            });
        }

        Ok(DeductionTables {
            tax: Self::build_table(TAX_TABLE, &config.tax)?,
            health_levy: Self::build_table(HEALTH_LEVY_TABLE, &config.health_levy)?,
            social_levy: Self::build_table(SOCIAL_LEVY_TABLE, &config.social_levy)?,
            housing_rate: config.housing_rate,
        })
    }

    fn build_table(name: &str, entries: &[BracketConfig]) -> PayrollResult<BracketTable> {
        let brackets = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::build_bracket(name, index, entry))
            .collect::<PayrollResult<Vec<_>>>()?;

        BracketTable::new(name, brackets)
    }

    fn build_bracket(name: &str, index: usize, entry: &BracketConfig) -> PayrollResult<Bracket> {
        let invalid = |message: &str| PayrollError::InvalidTable {
            table: name.to_string(),
            message: format!("bracket {} {}", index + 1, message),
        };

        let upper = match (entry.below, entry.at_most) {
            (Some(limit), None) => UpperBound::Below(limit),
            (None, Some(limit)) => UpperBound::AtMost(limit),
            (None, None) => UpperBound::Unbounded,
            (Some(_), Some(_)) => return Err(invalid("sets both 'below' and 'at_most'")),
        };

        let charge = match (entry.rate, entry.amount) {
            (Some(rate), None) => Charge::Rate(rate),
            (None, Some(amount)) => Charge::Flat(amount),
            (None, None) => return Err(invalid("needs a 'rate' or an 'amount'")),
            (Some(_), Some(_)) => return Err(invalid("sets both 'rate' and 'amount'")),
        };

        Ok(Bracket::new(upper, charge))
    }

    /// Returns the loaded tables.
    pub fn tables(&self) -> &DeductionTables {
        &self.tables
    }

    /// Returns a calculator over the loaded tables.
    pub fn calculator(&self) -> DeductionCalculator {
        DeductionCalculator::new(self.tables.clone())
    }
}
