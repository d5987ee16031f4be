//! Notice-period (aviso prévio) day counts.
//!
//! The notice period is 30 days, plus 3 days for each full year of tenure
//! beyond the first, capped at 90 days (CLT art. 487, Lei 12.506/2011).

use chrono::{Datelike, NaiveDate};

use crate::models::TerminationType;

/// Notice days owed for up to one full year of tenure.
pub const BASE_NOTICE_DAYS: u32 = 30;

/// Extra notice days per full year of tenure beyond the first.
pub const NOTICE_DAYS_PER_YEAR: u32 = 3;

/// Upper bound on the notice period.
pub const MAX_NOTICE_DAYS: u32 = 90;

/// Legal reference for the notice rules.
pub const NOTICE_LEGAL_REF: &str = "CLT art. 487; Lei 12.506/2011";

/// Counts full anniversaries between `start` and `end`.
///
/// A year only counts once its anniversary date has been reached, so
/// 2023-08-15 to 2025-08-14 is one year and to 2025-08-15 is two.
pub fn full_years_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Full notice-period entitlement in days.
///
/// Falls back to [`BASE_NOTICE_DAYS`] when the termination precedes the
/// hire date instead of failing.
///
/// # Examples
///
/// ```
/// use rescission_engine::calculation::notice_days;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 8, 1).unwrap();
/// let termination = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// assert_eq!(notice_days(hire, termination), 42);
/// ```
pub fn notice_days(hire_date: NaiveDate, termination_date: NaiveDate) -> u32 {
    if termination_date < hire_date {
        return BASE_NOTICE_DAYS;
    }

    let years = full_years_between(hire_date, termination_date);
    if years <= 1 {
        return BASE_NOTICE_DAYS;
    }

    (BASE_NOTICE_DAYS + NOTICE_DAYS_PER_YEAR * (years - 1)).min(MAX_NOTICE_DAYS)
}

/// Notice days projected past the termination date when crediting accrual
/// months: the full entitlement whenever indemnified notice was requested,
/// halved (floor) for mutual agreement. The termination type does not gate
/// the projection, only the payment.
pub fn projected_notice_days(
    termination_type: TerminationType,
    indemnified_requested: bool,
    full_notice_days: u32,
) -> u32 {
    if !indemnified_requested {
        return 0;
    }
    if termination_type.halves_notice() {
        full_notice_days / 2
    } else {
        full_notice_days
    }
}

/// Notice days actually paid out: the projected days when the termination
/// type allows indemnified notice, zero otherwise.
pub fn applied_notice_days(
    termination_type: TerminationType,
    indemnified_requested: bool,
    full_notice_days: u32,
) -> u32 {
    if !termination_type.permits_indemnified_notice() {
        return 0;
    }
    projected_notice_days(termination_type, indemnified_requested, full_notice_days)
}
