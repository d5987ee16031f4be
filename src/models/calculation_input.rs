//! The facts a settlement is computed from.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::TerminationType;

/// Input to a settlement calculation.
///
/// # Example
///
/// ```
/// use rescission_engine::models::{CalculationInput, TerminationType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = CalculationInput {
///     termination_type: TerminationType::WithoutCause,
///     monthly_salary: Decimal::new(300000, 2),
///     hire_date: NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
///     termination_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
///     indemnified_notice: true,
///     unused_vacation_days: 0,
///     fgts_balance: Some(Decimal::new(500000, 2)),
///     dependents: 0,
///     months_worked_this_year: None,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The legal form of the termination.
    pub termination_type: TerminationType,
    /// Monthly salary.
    pub monthly_salary: Decimal,
    /// First day of employment.
    pub hire_date: NaiveDate,
    /// Last day of employment.
    pub termination_date: NaiveDate,
    /// Whether the employee asks for the notice period to be paid out.
    #[serde(default)]
    pub indemnified_notice: bool,
    /// Vacation days already acquired but not taken.
    #[serde(default)]
    pub unused_vacation_days: u32,
    /// FGTS balance deposited so far; absent means zero.
    #[serde(default)]
    pub fgts_balance: Option<Decimal>,
    /// Number of dependents for the income-tax deduction.
    #[serde(default)]
    pub dependents: u32,
    /// Caller's own count of months worked this year. Informational only.
    #[serde(default)]
    pub months_worked_this_year: Option<u32>,
}

/// Largest accepted salary or FGTS balance, in whole reais. Keeps every
/// intermediate product inside `Decimal`'s range.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

impl CalculationInput {
    /// Checks the preconditions the calculation relies on.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a negative salary, a negative FGTS
    /// balance, either amount above [`MAX_AMOUNT`], or a termination date
    /// before the hire date.
    pub fn validate(&self) -> EngineResult<()> {
        check_amount("monthly_salary", self.monthly_salary)?;
        if let Some(balance) = self.fgts_balance {
            check_amount("fgts_balance", balance)?;
        }

        if self.termination_date < self.hire_date {
            return Err(EngineError::InvalidInput {
                field: "termination_date".to_string(),
                message: format!(
                    "{} precedes hire date {}",
                    self.termination_date, self.hire_date
                ),
            });
        }

        Ok(())
    }

    /// The deposited FGTS balance, zero when absent.
    pub fn fgts_balance_or_zero(&self) -> Decimal {
        self.fgts_balance.unwrap_or(Decimal::ZERO)
    }
}

fn check_amount(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not be negative, got {}", amount),
        });
    }
    if amount > Decimal::from(MAX_AMOUNT) {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: format!("must not exceed {}, got {}", MAX_AMOUNT, amount),
        });
    }
    Ok(())
}
