//! Progressive withholding: INSS contribution and IRRF income tax.
//!
//! The contribution walks the capped bracket table and taxes each slice of
//! the base at its own bracket's rate, rounding once at the end. Income tax
//! selects a single bracket for the base net of contribution and dependent
//! deductions and applies `base × rate − deduction`.

use rust_decimal::Decimal;
use tracing::trace;

use crate::config::TaxTables;
use crate::error::{EngineError, EngineResult};

use super::money::{round_money, zero_money};

/// Legal reference for the employee INSS contribution.
pub const CONTRIBUTION_LEGAL_REF: &str = "Lei 8.212/1991 art. 20";

/// Legal reference for IRRF withholding.
pub const INCOME_TAX_LEGAL_REF: &str = "Lei 7.713/1988 art. 7";

/// Computes withholdings on a single earning base.
///
/// Implementations must be thread-safe (`Send + Sync`) because a single
/// calculator may serve many concurrent calculations.
pub trait WithholdingCalculator: Send + Sync {
    /// Contribution withheld on `base`, rounded to cents. Zero for a
    /// non-positive base.
    fn calculate_contribution(&self, base: Decimal) -> Decimal;

    /// Income tax withheld on `taxable_base` after subtracting the
    /// contribution already withheld and the dependent deductions.
    ///
    /// # Errors
    ///
    /// Returns `NoApplicableBracket` when the table has no bracket for the
    /// net base.
    fn calculate_income_tax(
        &self,
        taxable_base: Decimal,
        contribution_withheld: Decimal,
        dependents: u32,
    ) -> EngineResult<Decimal>;
}

/// Bracket-table withholding over a validated [`TaxTables`].
///
/// # Examples
///
/// ```
/// use rescission_engine::calculation::{BracketWithholding, WithholdingCalculator};
/// use rescission_engine::config::TaxTables;
/// use rust_decimal::Decimal;
///
/// let withholding = BracketWithholding::new(TaxTables::brazil_2025().unwrap());
/// let inss = withholding.calculate_contribution(Decimal::new(200000, 2));
/// assert_eq!(inss, Decimal::new(15750, 2));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BracketWithholding<'a> {
    tables: &'a TaxTables,
}

impl<'a> BracketWithholding<'a> {
    /// Creates a withholding calculator over `tables`.
    pub fn new(tables: &'a TaxTables) -> Self {
        Self { tables }
    }
}

impl WithholdingCalculator for BracketWithholding<'_> {
    fn calculate_contribution(&self, base: Decimal) -> Decimal {
        if base <= Decimal::ZERO {
            return zero_money();
        }

        let mut total = Decimal::ZERO;
        let mut previous_ceiling = Decimal::ZERO;

        for bracket in self.tables.contribution() {
            let slice = base.min(bracket.upper_bound) - previous_ceiling;
            if slice > Decimal::ZERO {
                total += slice * bracket.rate;
            }
            previous_ceiling = bracket.upper_bound;

            if base <= bracket.upper_bound {
                break;
            }
        }

        trace!(base = %base, contribution = %total, "contribution computed");
        round_money(total)
    }

    fn calculate_income_tax(
        &self,
        taxable_base: Decimal,
        contribution_withheld: Decimal,
        dependents: u32,
    ) -> EngineResult<Decimal> {
        if taxable_base <= Decimal::ZERO {
            return Ok(zero_money());
        }

        let dependent_deduction = self.tables.dependent_deduction() * Decimal::from(dependents);
        let net_base = taxable_base - contribution_withheld - dependent_deduction;
        if net_base < Decimal::ZERO {
            return Ok(zero_money());
        }

        let bracket = self
            .tables
            .withholding()
            .iter()
            .find(|b| b.contains(net_base))
            .ok_or(EngineError::NoApplicableBracket { base: net_base })?;

        let tax = net_base * bracket.rate - bracket.deduction;
        trace!(net_base = %net_base, rate = %bracket.rate, tax = %tax, "income tax computed");

        if tax > Decimal::ZERO {
            Ok(round_money(tax))
        } else {
            Ok(zero_money())
        }
    }
}
