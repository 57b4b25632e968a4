//! Statutory deduction tables.
//!
//! The first tier of every bracketed table is strict (`<`) and every later
//! tier is inclusive (`<=`). Lookups depend on that asymmetry at the
//! threshold salaries, so it is encoded per bracket rather than per table.

use rust_decimal::Decimal;

use super::bracket::{Bracket, BracketTable, Charge, UpperBound};

const fn units(value: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, 0)
}

const fn fraction(mantissa: u32, scale: u32) -> Decimal {
    Decimal::from_parts(mantissa, 0, 0, false, scale)
}

/// Table name used for income tax.
pub const TAX_TABLE: &str = "tax";
/// Table name used for the health levy.
pub const HEALTH_LEVY_TABLE: &str = "health_levy";
/// Table name used for the social-security levy.
pub const SOCIAL_LEVY_TABLE: &str = "social_levy";

/// Income tax: 2% / 3% / 5% / 7% / 10%.
pub const TAX_BRACKETS: [Bracket; 5] = [
    Bracket::new(UpperBound::Below(units(50_000)), Charge::Rate(fraction(2, 2))),
    Bracket::new(UpperBound::AtMost(units(100_000)), Charge::Rate(fraction(3, 2))),
    Bracket::new(UpperBound::AtMost(units(250_000)), Charge::Rate(fraction(5, 2))),
    Bracket::new(UpperBound::AtMost(units(500_000)), Charge::Rate(fraction(7, 2))),
    Bracket::new(UpperBound::Unbounded, Charge::Rate(fraction(10, 2))),
];

/// Health levy: flat amounts from 300 to 9000.
pub const HEALTH_LEVY_BRACKETS: [Bracket; 8] = [
    Bracket::new(UpperBound::Below(units(20_000)), Charge::Flat(units(300))),
    Bracket::new(UpperBound::AtMost(units(80_000)), Charge::Flat(units(500))),
    Bracket::new(UpperBound::AtMost(units(120_000)), Charge::Flat(units(1_200))),
    Bracket::new(UpperBound::AtMost(units(200_000)), Charge::Flat(units(1_800))),
    Bracket::new(UpperBound::AtMost(units(250_000)), Charge::Flat(units(2_500))),
    Bracket::new(UpperBound::AtMost(units(500_000)), Charge::Flat(units(4_500))),
    Bracket::new(UpperBound::AtMost(units(1_000_000)), Charge::Flat(units(7_500))),
    Bracket::new(UpperBound::Unbounded, Charge::Flat(units(9_000))),
];

/// Social-security levy: flat amounts from 1500 to 8500.
pub const SOCIAL_LEVY_BRACKETS: [Bracket; 4] = [
    Bracket::new(UpperBound::Below(units(100_000)), Charge::Flat(units(1_500))),
    Bracket::new(UpperBound::AtMost(units(500_000)), Charge::Flat(units(2_500))),
    Bracket::new(UpperBound::AtMost(units(1_000_000)), Charge::Flat(units(4_500))),
    Bracket::new(UpperBound::Unbounded, Charge::Flat(units(8_500))),
];

/// Housing levy rate (2.5% of gross, no brackets).
pub const HOUSING_LEVY_RATE: Decimal = fraction(25, 3);

/// The full set of tables a calculator applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionTables {
    /// Income tax brackets.
    pub tax: BracketTable,
    /// Health levy brackets.
    pub health_levy: BracketTable,
    /// Social-security levy brackets.
    pub social_levy: BracketTable,
    /// Housing levy rate applied to the whole gross.
    pub housing_rate: Decimal,
}

impl DeductionTables {
    /// Returns the statutory tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_deductions::calculation::DeductionTables;
    ///
    /// let tables = DeductionTables::statutory();
    /// assert_eq!(tables.tax.brackets().len(), 5);
    /// assert_eq!(tables.health_levy.brackets().len(), 8);
    /// assert_eq!(tables.social_levy.brackets().len(), 4);
    /// ```
    pub const fn statutory() -> Self {
        Self {
            tax: BracketTable::from_static(TAX_TABLE, &TAX_BRACKETS),
            health_levy: BracketTable::from_static(HEALTH_LEVY_TABLE, &HEALTH_LEVY_BRACKETS),
            social_levy: BracketTable::from_static(SOCIAL_LEVY_TABLE, &SOCIAL_LEVY_BRACKETS),
            housing_rate: HOUSING_LEVY_RATE,
        }
    }
}

impl Default for DeductionTables {
    fn default() -> Self {
        Self::statutory()
    }
}

/// The statutory tables, shared by the free deduction functions.
pub static STATUTORY_TABLES: DeductionTables = DeductionTables::statutory();

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_statutory_tables_pass_validation() {
        let tables = DeductionTables::statutory();

        for table in [&tables.tax, &tables.health_levy, &tables.social_levy] {
            let rebuilt = BracketTable::new(table.name(), table.brackets().to_vec());
            assert!(rebuilt.is_ok(), "{} failed validation", table.name());
        }
    }

    #[test]
    fn test_const_helpers_build_expected_values() {
        assert_eq!(HOUSING_LEVY_RATE, dec("0.025"));
        assert_eq!(TAX_BRACKETS[0].charge, Charge::Rate(dec("0.02")));
        assert_eq!(TAX_BRACKETS[0].upper, UpperBound::Below(dec("50000")));
        assert_eq!(
            HEALTH_LEVY_BRACKETS[6].upper,
            UpperBound::AtMost(dec("1000000"))
        );
    }

    #[test]
    fn test_only_first_tier_is_strict() {
        for brackets in [
            &TAX_BRACKETS[..],
            &HEALTH_LEVY_BRACKETS[..],
            &SOCIAL_LEVY_BRACKETS[..],
        ] {
            assert!(matches!(brackets[0].upper, UpperBound::Below(_)));
            for bracket in &brackets[1..brackets.len() - 1] {
                assert!(matches!(bracket.upper, UpperBound::AtMost(_)));
            }
        }
    }

    #[test]
    fn test_default_is_statutory() {
        assert_eq!(DeductionTables::default(), STATUTORY_TABLES);
    }
}
