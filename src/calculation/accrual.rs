//! Accrual months for the termination year.
//!
//! A calendar month of the termination year is credited when the employee
//! was present on at least 15 of its days. Presence starts at the later of
//! the hire date and January 1st and ends at the termination date pushed
//! forward by the projected notice days, clipped to December 31st.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Minimum days of presence for a month to count.
pub const MIN_DAYS_FOR_MONTH: i64 = 15;

/// Legal reference for the 15-day fraction rule.
pub const ACCRUAL_LEGAL_REF: &str = "Lei 4.090/1962 art. 1 §2; CLT art. 146";

/// The presence window inside the termination year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccrualWindow {
    /// First credited day.
    pub start: NaiveDate,
    /// Last credited day, notice projection included.
    pub end: NaiveDate,
}

/// Computes the presence window, or `None` when it is empty.
pub fn accrual_window(
    hire_date: NaiveDate,
    termination_date: NaiveDate,
    projected_notice_days: u32,
) -> Option<AccrualWindow> {
    let year = termination_date.year();
    let year_start = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let year_end = NaiveDate::from_ymd_opt(year, 12, 31)?;

    let start = hire_date.max(year_start);
    let extended_end = termination_date
        .checked_add_days(Days::new(u64::from(projected_notice_days)))
        .unwrap_or(year_end);
    let end = extended_end.min(year_end);

    if end < start {
        return None;
    }
    Some(AccrualWindow { start, end })
}

/// Counts the months of the termination year credited by the 15-day rule.
///
/// # Examples
///
/// ```
/// use rescission_engine::calculation::accrual_months;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let termination = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// assert_eq!(accrual_months(hire, termination, 0), 8);
/// ```
pub fn accrual_months(
    hire_date: NaiveDate,
    termination_date: NaiveDate,
    projected_notice_days: u32,
) -> u32 {
    let Some(window) = accrual_window(hire_date, termination_date, projected_notice_days) else {
        return 0;
    };

    let year = termination_date.year();
    let months = (1..=12)
        .filter_map(|month| month_bounds(year, month))
        .filter(|(month_start, month_end)| {
            let from = (*month_start).max(window.start);
            let to = (*month_end).min(window.end);
            to >= from && (to - from).num_days() + 1 >= MIN_DAYS_FOR_MONTH
        })
        .count();

    // at most twelve by construction
    u32::try_from(months).unwrap_or(12).min(12)
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    Some((first, last))
}
