//! Tax table types for settlement withholding.
//!
//! This module contains the strongly-typed bracket tables used by the
//! withholding engine, together with the built-in tables for tax year 2025.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One bracket of the capped contribution (INSS) table.
///
/// The bracket covers the slice of the base between the previous bracket's
/// ceiling (or zero) and `upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionBracket {
    /// The ceiling of this bracket.
    pub upper_bound: Decimal,
    /// The marginal rate applied to the slice inside this bracket.
    pub rate: Decimal,
}

/// One bracket of the income-tax (IRRF) withholding table.
///
/// Tax for a base inside this bracket is `base × rate − deduction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingBracket {
    /// The ceiling of this bracket; `None` for the open-ended top bracket.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// The rate applied to the whole base.
    pub rate: Decimal,
    /// The amount subtracted from `base × rate` (parcela a deduzir).
    pub deduction: Decimal,
}

impl WithholdingBracket {
    /// Returns true if `base` falls inside this bracket's ceiling.
    pub fn contains(&self, base: Decimal) -> bool {
        self.upper_bound.is_none_or(|ceiling| base <= ceiling)
    }
}

/// The validated set of tables for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxTables {
    tax_year: i32,
    contribution: Vec<ContributionBracket>,
    withholding: Vec<WithholdingBracket>,
    dependent_deduction: Decimal,
}

static BRAZIL_2025: LazyLock<EngineResult<TaxTables>> = LazyLock::new(|| {
    TaxTables::new(
        2025,
        vec![
            ContributionBracket {
                upper_bound: Decimal::new(150000, 2),
                rate: Decimal::new(75, 3),
            },
            ContributionBracket {
                upper_bound: Decimal::new(280000, 2),
                rate: Decimal::new(9, 2),
            },
            ContributionBracket {
                upper_bound: Decimal::new(420000, 2),
                rate: Decimal::new(12, 2),
            },
            ContributionBracket {
                upper_bound: Decimal::new(780000, 2),
                rate: Decimal::new(14, 2),
            },
        ],
        vec![
            WithholdingBracket {
                upper_bound: Some(Decimal::new(225920, 2)),
                rate: Decimal::ZERO,
                deduction: Decimal::ZERO,
            },
            WithholdingBracket {
                upper_bound: Some(Decimal::new(282665, 2)),
                rate: Decimal::new(75, 3),
                deduction: Decimal::new(16944, 2),
            },
            WithholdingBracket {
                upper_bound: Some(Decimal::new(375105, 2)),
                rate: Decimal::new(15, 2),
                deduction: Decimal::new(38144, 2),
            },
            WithholdingBracket {
                upper_bound: Some(Decimal::new(466468, 2)),
                rate: Decimal::new(225, 3),
                deduction: Decimal::new(66277, 2),
            },
            WithholdingBracket {
                upper_bound: None,
                rate: Decimal::new(275, 3),
                deduction: Decimal::new(89600, 2),
            },
        ],
        Decimal::new(18959, 2),
    )
});

impl TaxTables {
    /// Builds a validated set of tables.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTaxTable` if either table is empty, out of order, has
    /// a rate outside `[0, 1]`, or if the withholding table does not end in
    /// exactly one open-ended bracket. A negative dependent deduction is
    /// reported against the withholding table.
    pub fn new(
        tax_year: i32,
        contribution: Vec<ContributionBracket>,
        withholding: Vec<WithholdingBracket>,
        dependent_deduction: Decimal,
    ) -> EngineResult<Self> {
        validate_contribution(&contribution)?;
        validate_withholding(&withholding)?;
        if dependent_deduction < Decimal::ZERO {
            return Err(table_error("withholding", "dependent deduction is negative"));
        }

        Ok(Self {
            tax_year,
            contribution,
            withholding,
            dependent_deduction,
        })
    }

    /// The tables for tax year 2025, built and validated once per process.
    ///
    /// # Errors
    ///
    /// Returns the `InvalidTaxTable` error raised by validation if the
    /// built-in brackets are malformed.
    pub fn brazil_2025() -> EngineResult<&'static TaxTables> {
        BRAZIL_2025.as_ref().map_err(Clone::clone)
    }

    /// Returns the tax year these tables apply to.
    pub fn tax_year(&self) -> i32 {
        self.tax_year
    }

    /// Returns the contribution brackets, ascending.
    pub fn contribution(&self) -> &[ContributionBracket] {
        &self.contribution
    }

    /// Returns the withholding brackets, ascending, open-ended last.
    pub fn withholding(&self) -> &[WithholdingBracket] {
        &self.withholding
    }

    /// Returns the income-tax deduction per dependent.
    pub fn dependent_deduction(&self) -> Decimal {
        self.dependent_deduction
    }

    /// Returns the contribution ceiling (the last bracket's bound).
    pub fn contribution_ceiling(&self) -> Decimal {
        self.contribution
            .last()
            .map(|b| b.upper_bound)
            .unwrap_or(Decimal::ZERO)
    }
}

fn table_error(table: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidTaxTable {
        table: table.to_string(),
        message: message.into(),
    }
}

fn validate_rate(table: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(table_error(table, format!("rate {} outside [0, 1]", rate)));
    }
    Ok(())
}

fn validate_contribution(brackets: &[ContributionBracket]) -> EngineResult<()> {
    if brackets.is_empty() {
        return Err(table_error("contribution", "table is empty"));
    }

    let mut previous = Decimal::ZERO;
    for bracket in brackets {
        if bracket.upper_bound <= previous {
            return Err(table_error(
                "contribution",
                format!(
                    "bound {} does not ascend from {}",
                    bracket.upper_bound, previous
                ),
            ));
        }
        validate_rate("contribution", bracket.rate)?;
        previous = bracket.upper_bound;
    }
    Ok(())
}

fn validate_withholding(brackets: &[WithholdingBracket]) -> EngineResult<()> {
    let Some((last, bounded)) = brackets.split_last() else {
        return Err(table_error("withholding", "table is empty"));
    };

    if last.upper_bound.is_some() {
        return Err(table_error("withholding", "missing open-ended final bracket"));
    }

    let mut previous = Decimal::ZERO;
    for bracket in bounded {
        let Some(bound) = bracket.upper_bound else {
            return Err(table_error(
                "withholding",
                "open-ended bracket must be the last entry",
            ));
        };
        if bound <= previous {
            return Err(table_error(
                "withholding",
                format!("bound {} does not ascend from {}", bound, previous),
            ));
        }
        previous = bound;
    }

    for bracket in brackets {
        validate_rate("withholding", bracket.rate)?;
        if bracket.deduction < Decimal::ZERO {
            return Err(table_error(
                "withholding",
                format!("deduction {} is negative", bracket.deduction),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn contribution(bounds: &[(&str, &str)]) -> Vec<ContributionBracket> {
        bounds
            .iter()
            .map(|(bound, rate)| ContributionBracket {
                upper_bound: dec(bound),
                rate: dec(rate),
            })
            .collect()
    }

    fn open_bracket() -> WithholdingBracket {
        WithholdingBracket {
            upper_bound: None,
            rate: dec("0.275"),
            deduction: dec("896.00"),
        }
    }

    #[test]
    fn test_builtin_2025_tables_pass_validation() {
        let builtin = TaxTables::brazil_2025().unwrap();
        let rebuilt = TaxTables::new(
            builtin.tax_year(),
            builtin.contribution().to_vec(),
            builtin.withholding().to_vec(),
            builtin.dependent_deduction(),
        )
        .unwrap();

        assert_eq!(&rebuilt, builtin);
        assert_eq!(builtin.tax_year(), 2025);
        assert_eq!(builtin.contribution_ceiling(), dec("7800.00"));
        assert_eq!(builtin.dependent_deduction(), dec("189.59"));
    }

    #[test]
    fn test_builtin_is_shared_instance() {
        assert!(std::ptr::eq(
            TaxTables::brazil_2025().unwrap(),
            TaxTables::brazil_2025().unwrap()
        ));
    }

    #[test]
    fn test_empty_contribution_table_rejected() {
        let result = TaxTables::new(2025, vec![], vec![open_bracket()], dec("189.59"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidTaxTable { ref table, .. }) if table == "contribution"
        ));
    }

    #[test]
    fn test_non_ascending_contribution_rejected() {
        let result = TaxTables::new(
            2025,
            contribution(&[("2800.00", "0.09"), ("1500.00", "0.075")]),
            vec![open_bracket()],
            dec("189.59"),
        );
        match result {
            Err(EngineError::InvalidTaxTable { table, message }) => {
                assert_eq!(table, "contribution");
                assert!(message.contains("1500.00"));
            }
            other => panic!("Expected InvalidTaxTable, got {:?}", other),
        }
    }

    #[test]
    fn test_rate_above_one_rejected() {
        let result = TaxTables::new(
            2025,
            contribution(&[("1500.00", "1.5")]),
            vec![open_bracket()],
            dec("189.59"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_withholding_without_open_ended_bracket_rejected() {
        let result = TaxTables::new(
            2025,
            contribution(&[("1500.00", "0.075")]),
            vec![WithholdingBracket {
                upper_bound: Some(dec("2259.20")),
                rate: Decimal::ZERO,
                deduction: Decimal::ZERO,
            }],
            dec("189.59"),
        );
        match result {
            Err(EngineError::InvalidTaxTable { table, message }) => {
                assert_eq!(table, "withholding");
                assert!(message.contains("open-ended"));
            }
            other => panic!("Expected InvalidTaxTable, got {:?}", other),
        }
    }

    #[test]
    fn test_open_ended_bracket_in_middle_rejected() {
        let result = TaxTables::new(
            2025,
            contribution(&[("1500.00", "0.075")]),
            vec![open_bracket(), open_bracket()],
            dec("189.59"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_dependent_deduction_rejected() {
        let result = TaxTables::new(
            2025,
            contribution(&[("1500.00", "0.075")]),
            vec![open_bracket()],
            dec("-1"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_withholding_bracket_contains() {
        let bounded = WithholdingBracket {
            upper_bound: Some(dec("2259.20")),
            rate: Decimal::ZERO,
            deduction: Decimal::ZERO,
        };
        assert!(bounded.contains(dec("2259.20")));
        assert!(!bounded.contains(dec("2259.21")));
        assert!(open_bracket().contains(dec("1000000")));
    }
}
