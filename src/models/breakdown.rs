//! Deduction and breakdown models.
//!
//! This module contains [`DeductionSet`], the four statutory deductions for
//! one salary, and [`Breakdown`], the full gross-to-net record derived from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four statutory deductions for a single salary.
///
/// # Example
///
/// ```
/// use payroll_deductions::models::DeductionSet;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let deductions = DeductionSet {
///     tax: Decimal::from_str("1602.00").unwrap(),
///     health_levy: Decimal::from(500),
///     social_levy: Decimal::from(1500),
///     housing_levy: Decimal::from_str("1335.00").unwrap(),
/// };
/// assert_eq!(deductions.total(), Decimal::from_str("4937.00").unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionSet {
    /// Income tax (PAYE).
    pub tax: Decimal,
    /// Health levy (NHIF).
    pub health_levy: Decimal,
    /// Social-security levy (NSSF).
    pub social_levy: Decimal,
    /// Housing levy.
    pub housing_levy: Decimal,
}

impl DeductionSet {
    /// Returns the sum of all four deductions.
    pub fn total(&self) -> Decimal {
        self.tax + self.health_levy + self.social_levy + self.housing_levy
    }
}

/// A gross-to-net breakdown for one salary.
///
/// `total_deductions` is always the sum of the four deductions and `net` is
/// always `gross - total_deductions`. `net` is negative when the flat levies
/// exceed a very small gross; this is reported, not prevented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// The gross salary.
    pub gross: Decimal,
    /// Income tax (PAYE).
    pub tax: Decimal,
    /// Health levy (NHIF).
    pub health_levy: Decimal,
    /// Social-security levy (NSSF).
    pub social_levy: Decimal,
    /// Housing levy.
    pub housing_levy: Decimal,
    /// Sum of all deductions.
    pub total_deductions: Decimal,
    /// Gross minus total deductions.
    pub net: Decimal,
}

impl Breakdown {
    /// Builds a breakdown from a gross salary and its deductions.
    pub fn new(gross: Decimal, deductions: DeductionSet) -> Self {
        let total_deductions = deductions.total();
        Self {
            gross,
            tax: deductions.tax,
            health_levy: deductions.health_levy,
            social_levy: deductions.social_levy,
            housing_levy: deductions.housing_levy,
            total_deductions,
            net: gross - total_deductions,
        }
    }

    /// Returns the deductions this breakdown was built from.
    pub fn deductions(&self) -> DeductionSet {
        DeductionSet {
            tax: self.tax,
            health_levy: self.health_levy,
            social_levy: self.social_levy,
            housing_levy: self.housing_levy,
        }
    }
}
