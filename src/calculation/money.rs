//! Exact-decimal helpers shared by every settlement formula.
//!
//! Intermediate ratios are carried at [`INTERMEDIATE_SCALE`] fractional
//! digits; only final amounts are rounded to cents, half-up.

use rust_decimal::{Decimal, RoundingStrategy};

/// Fractional digits kept for intermediate ratios (salary/30, months/12, x/3).
pub const INTERMEDIATE_SCALE: u32 = 10;

/// Fractional digits of every returned amount.
pub const MONEY_SCALE: u32 = 2;

/// The commercial month used to derive a daily rate.
pub const DAYS_PER_MONTH: i64 = 30;

/// Rounds to two fractional digits, half away from zero, and pads the
/// scale so `5000` becomes `5000.00`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Zero with two fractional digits.
pub fn zero_money() -> Decimal {
    Decimal::new(0, MONEY_SCALE)
}

/// Divides and rounds the quotient to [`INTERMEDIATE_SCALE`] digits, half-up.
pub fn divide_precise(numerator: Decimal, denominator: Decimal) -> Decimal {
    (numerator / denominator)
        .round_dp_with_strategy(INTERMEDIATE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Monthly salary divided by the 30-day commercial month.
pub fn daily_rate(monthly_salary: Decimal) -> Decimal {
    divide_precise(monthly_salary, Decimal::from(DAYS_PER_MONTH))
}

/// Adds the constitutional one-third vacation bonus to `base`.
pub fn plus_one_third(base: Decimal) -> Decimal {
    base + divide_precise(base, Decimal::from(3))
}
