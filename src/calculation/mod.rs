//! Calculation logic for the Rescission Engine.
//!
//! This module contains the settlement formulas and their orchestration:
//! decimal rounding helpers, notice-period and accrual-month counting, the
//! individual earning components, progressive INSS/IRRF withholding, and the
//! [`RescissionCalculator`] that ties them together.

mod accrual;
mod earnings;
mod money;
mod notice;
mod rescission;
mod withholding;

pub use accrual::{ACCRUAL_LEGAL_REF, AccrualWindow, MIN_DAYS_FOR_MONTH, accrual_months, accrual_window};
pub use earnings::{
    accrued_vacation, fgts_penalty, indemnified_notice, proportional_thirteenth,
    proportional_vacation, salary_balance,
};
pub use money::{
    DAYS_PER_MONTH, INTERMEDIATE_SCALE, MONEY_SCALE, daily_rate, divide_precise, plus_one_third,
    round_money, zero_money,
};
pub use notice::{
    BASE_NOTICE_DAYS, MAX_NOTICE_DAYS, NOTICE_DAYS_PER_YEAR, NOTICE_LEGAL_REF,
    applied_notice_days, full_years_between, notice_days, projected_notice_days,
};
pub use rescission::{
    PAYMENT_DEADLINE_DAYS, PAYMENT_DEADLINE_LEGAL_REF, RescissionCalculator, calculate_rescission,
};
pub use withholding::{
    BracketWithholding, CONTRIBUTION_LEGAL_REF, INCOME_TAX_LEGAL_REF, WithholdingCalculator,
};
