//! Formulas for the individual earning components.
//!
//! Each function returns an amount already rounded to cents. Policy
//! gating (which termination types owe which component) lives in the
//! calculator, not here.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::TerminationType;

use super::money::{daily_rate, divide_precise, plus_one_third, round_money};

const MONTHS_PER_YEAR: i64 = 12;

/// Salary for the days of the termination month up to the termination date.
///
/// # Examples
///
/// ```
/// use rescission_engine::calculation::salary_balance;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let balance = salary_balance(
///     Decimal::new(300000, 2),
///     NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
/// );
/// assert_eq!(balance, Decimal::new(150000, 2));
/// ```
pub fn salary_balance(monthly_salary: Decimal, termination_date: NaiveDate) -> Decimal {
    let days = Decimal::from(termination_date.day());
    round_money(daily_rate(monthly_salary) * days)
}

/// Proportional 13th salary: `salary × months / 12`.
pub fn proportional_thirteenth(monthly_salary: Decimal, accrual_months: u32) -> Decimal {
    let proportion = divide_precise(
        Decimal::from(accrual_months),
        Decimal::from(MONTHS_PER_YEAR),
    );
    round_money(monthly_salary * proportion)
}

/// Proportional vacation plus one-third: `salary × months / 12`, plus a third.
pub fn proportional_vacation(monthly_salary: Decimal, accrual_months: u32) -> Decimal {
    let base = divide_precise(
        monthly_salary * Decimal::from(accrual_months),
        Decimal::from(MONTHS_PER_YEAR),
    );
    round_money(plus_one_third(base))
}

/// Acquired but untaken vacation plus one-third: `daily rate × days`, plus a third.
pub fn accrued_vacation(monthly_salary: Decimal, unused_days: u32) -> Decimal {
    let base = daily_rate(monthly_salary) * Decimal::from(unused_days);
    round_money(plus_one_third(base))
}

/// Notice paid instead of worked: `daily rate × days`.
pub fn indemnified_notice(monthly_salary: Decimal, notice_days: u32) -> Decimal {
    round_money(daily_rate(monthly_salary) * Decimal::from(notice_days))
}

/// FGTS penalty: the type's penalty rate applied to the deposited balance.
pub fn fgts_penalty(termination_type: TerminationType, fgts_balance: Decimal) -> Decimal {
    round_money(fgts_balance * termination_type.fgts_penalty_rate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_salary_balance_by_day_of_month() {
        let termination = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        assert_eq!(salary_balance(dec("3000.00"), termination), dec("1500.00"));
    }

    #[test]
    fn test_salary_balance_31st_exceeds_monthly_salary() {
        let termination = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        assert_eq!(salary_balance(dec("3000.00"), termination), dec("3100.00"));
    }

    #[test]
    fn test_salary_balance_uneven_daily_rate() {
        // 1000 / 30 = 33.3333333333; x 7 = 233.3333333331
        let termination = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(salary_balance(dec("1000.00"), termination), dec("233.33"));
    }

    #[test]
    fn test_proportional_thirteenth_eight_months() {
        assert_eq!(proportional_thirteenth(dec("3000.00"), 8), dec("2000.00"));
    }

    #[test]
    fn test_proportional_thirteenth_full_year() {
        assert_eq!(proportional_thirteenth(dec("3000.00"), 12), dec("3000.00"));
    }

    #[test]
    fn test_proportional_vacation_eight_months() {
        assert_eq!(proportional_vacation(dec("3000.00"), 8), dec("2666.67"));
    }

    #[test]
    fn test_accrued_vacation_ten_days() {
        assert_eq!(accrued_vacation(dec("3000.00"), 10), dec("1333.33"));
    }

    #[test]
    fn test_accrued_vacation_full_period() {
        assert_eq!(accrued_vacation(dec("3000.00"), 30), dec("4000.00"));
    }

    #[test]
    fn test_indemnified_notice_42_days() {
        assert_eq!(indemnified_notice(dec("3000.00"), 42), dec("4200.00"));
    }

    #[test]
    fn test_fgts_penalty_by_type() {
        let balance = dec("5000.00");
        assert_eq!(fgts_penalty(TerminationType::WithoutCause, balance), dec("2000.00"));
        assert_eq!(fgts_penalty(TerminationType::MutualAgreement, balance), dec("1000.00"));
        assert_eq!(fgts_penalty(TerminationType::WithCause, balance), dec("0.00"));
        assert_eq!(fgts_penalty(TerminationType::Resignation, balance), dec("0.00"));
    }

    #[test]
    fn test_all_amounts_have_two_digits() {
        let termination = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
        let amounts = [
            salary_balance(dec("3000"), termination),
            proportional_thirteenth(dec("3000"), 7),
            proportional_vacation(dec("3000"), 7),
            accrued_vacation(dec("3000"), 3),
            indemnified_notice(dec("3000"), 33),
            fgts_penalty(TerminationType::WithoutCause, dec("1234.5")),
        ];
        for amount in amounts {
            assert_eq!(amount.scale(), 2, "{} should have scale 2", amount);
        }
    }
}
