//! Bracket table lookup.
//!
//! A [`BracketTable`] is an ordered list of salary ranges, each carrying
//! either a percentage rate or a flat amount. Lookup scans the table in
//! ascending order and applies the first bracket whose upper bound admits
//! the salary. Each bound states its own comparison, so a table can mix a
//! strict first tier (`< 50000`) with inclusive later tiers (`<= 100000`).

use std::borrow::Cow;
use std::fmt;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::AuditStep;

/// The upper edge of a bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    /// Admits salaries strictly less than the limit.
    Below(Decimal),
    /// Admits salaries less than or equal to the limit.
    AtMost(Decimal),
    /// Admits every salary; only valid as the final bracket.
    Unbounded,
}

impl UpperBound {
    /// Returns true if `salary` falls at or under this bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_deductions::calculation::UpperBound;
    /// use rust_decimal::Decimal;
    ///
    /// let limit = Decimal::from(50_000);
    /// assert!(!UpperBound::Below(limit).admits(limit));
    /// assert!(UpperBound::AtMost(limit).admits(limit));
    /// assert!(UpperBound::Unbounded.admits(limit));
    /// ```
    pub fn admits(&self, salary: Decimal) -> bool {
        match *self {
            UpperBound::Below(limit) => salary < limit,
            UpperBound::AtMost(limit) => salary <= limit,
            UpperBound::Unbounded => true,
        }
    }

    /// Sort key used to check that bounds ascend: `< x` sits before `<= x`.
    fn order_key(&self) -> Option<(Decimal, u8)> {
        match *self {
            UpperBound::Below(limit) => Some((limit, 0)),
            UpperBound::AtMost(limit) => Some((limit, 1)),
            UpperBound::Unbounded => None,
        }
    }
}

impl fmt::Display for UpperBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpperBound::Below(limit) => write!(f, "< {}", limit.normalize()),
            UpperBound::AtMost(limit) => write!(f, "<= {}", limit.normalize()),
            UpperBound::Unbounded => write!(f, "above all thresholds"),
        }
    }
}

/// What a bracket charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charge {
    /// A fraction of the salary (0.03 means 3%).
    Rate(Decimal),
    /// A fixed amount independent of the salary.
    Flat(Decimal),
}

impl Charge {
    /// Computes the deduction this charge yields for `salary`.
    pub fn apply(&self, salary: Decimal) -> Decimal {
        match *self {
            Charge::Rate(rate) => salary * rate,
            Charge::Flat(amount) => amount,
        }
    }

    fn value(&self) -> Decimal {
        match *self {
            Charge::Rate(v) | Charge::Flat(v) => v,
        }
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Charge::Rate(rate) => {
                write!(f, "{}%", (*rate * Decimal::ONE_HUNDRED).normalize())
            }
            Charge::Flat(amount) => write!(f, "flat {}", amount.normalize()),
        }
    }
}

/// One salary range and its charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    /// The upper edge of the range.
    pub upper: UpperBound,
    /// The charge applied within the range.
    pub charge: Charge,
}

impl Bracket {
    /// Creates a bracket.
    pub const fn new(upper: UpperBound, charge: Charge) -> Self {
        Self { upper, charge }
    }
}

/// The result of applying a bracket table, including the amount and audit step.
#[derive(Debug, Clone)]
pub struct DeductionResult {
    /// The deduction amount, unrounded.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// An ordered table of brackets scanned in ascending order.
///
/// Tables built with [`BracketTable::new`] are validated so that every
/// non-negative salary selects exactly one bracket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTable {
    name: Cow<'static, str>,
    brackets: Cow<'static, [Bracket]>,
}

impl BracketTable {
    /// Wraps a fixed, known-good table without validation.
    pub(crate) const fn from_static(name: &'static str, brackets: &'static [Bracket]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            brackets: Cow::Borrowed(brackets),
        }
    }

    /// Builds a table, checking that it is well formed.
    ///
    /// A table is accepted when it is non-empty, its bounds strictly ascend,
    /// its final bracket (and only that one) is unbounded, and no charge is
    /// negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_deductions::calculation::{Bracket, BracketTable, Charge, UpperBound};
    /// use rust_decimal::Decimal;
    ///
    /// let table = BracketTable::new(
    ///     "levy",
    ///     vec![
    ///         Bracket::new(UpperBound::Below(Decimal::from(100)), Charge::Flat(Decimal::ONE)),
    ///         Bracket::new(UpperBound::Unbounded, Charge::Flat(Decimal::TWO)),
    ///     ],
    /// )
    /// .unwrap();
    /// assert_eq!(table.apply(Decimal::from(100)), Decimal::TWO);
    /// ```
    pub fn new(name: impl Into<String>, brackets: Vec<Bracket>) -> PayrollResult<Self> {
        let name = name.into();
        let invalid = |message: String| PayrollError::InvalidTable {
            table: name.clone(),
            message,
        };

        let Some(last) = brackets.last() else {
            return Err(invalid("table has no brackets".to_string()));
        };
        if last.upper != UpperBound::Unbounded {
            return Err(invalid("final bracket must be unbounded".to_string()));
        }

        let mut previous: Option<(Decimal, u8)> = None;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.charge.value() < Decimal::ZERO {
                return Err(invalid(format!(
                    "bracket {} has a negative charge ({})",
                    index + 1,
                    bracket.charge
                )));
            }

            if index + 1 == brackets.len() {
                break;
            }

            let Some(key) = bracket.upper.order_key() else {
                return Err(invalid(format!(
                    "bracket {} is unbounded but is not the final bracket",
                    index + 1
                )));
            };
            if previous.is_some_and(|p| key <= p) {
                return Err(invalid(format!(
                    "bracket {} bound ({}) does not ascend",
                    index + 1,
                    bracket.upper
                )));
            }
            previous = Some(key);
        }

        Ok(Self {
            name: Cow::Owned(name),
            brackets: Cow::Owned(brackets),
        })
    }

    /// Returns the table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the brackets in ascending order.
    pub fn brackets(&self) -> &[Bracket] {
        &self.brackets
    }

    /// Returns the zero-based index and bracket that `salary` falls into.
    pub fn select(&self, salary: Decimal) -> Option<(usize, &Bracket)> {
        self.brackets
            .iter()
            .enumerate()
            .find(|(_, bracket)| bracket.upper.admits(salary))
    }

    /// Returns the deduction for `salary`.
    ///
    /// Validated tables always end in an unbounded bracket, so a salary that
    /// matches nothing only occurs for a malformed table and yields zero.
    pub fn apply(&self, salary: Decimal) -> Decimal {
        self.select(salary)
            .map(|(_, bracket)| bracket.charge.apply(salary))
            .unwrap_or(Decimal::ZERO)
    }

    /// Applies the table and records the decision as an audit step.
    pub fn apply_with_audit(
        &self,
        salary: Decimal,
        rule_name: &str,
        step_number: u32,
    ) -> DeductionResult {
        let (amount, output, reasoning) = match self.select(salary) {
            Some((index, bracket)) => {
                let amount = bracket.charge.apply(salary);
                (
                    amount,
                    serde_json::json!({
                        "amount": amount.normalize().to_string(),
                        "bracket": index + 1,
                        "bound": bracket.upper.to_string(),
                        "charge": bracket.charge.to_string()
                    }),
                    format!(
                        "{} is {} (bracket {}): {} = {}",
                        salary.normalize(),
                        bracket.upper,
                        index + 1,
                        bracket.charge,
                        amount.normalize()
                    ),
                )
            }
            None => (
                Decimal::ZERO,
                serde_json::json!({ "amount": "0", "bracket": null }),
                format!("{} matched no bracket, nothing deducted", salary.normalize()),
            ),
        };

        DeductionResult {
            amount,
            audit_step: AuditStep {
                step_number,
                rule_id: self.name.to_string(),
                rule_name: rule_name.to_string(),
                input: serde_json::json!({
                    "salary": salary.normalize().to_string()
                }),
                output,
                reasoning,
            },
        }
    }
}
