//! Request types for the Rescission Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{CalculationInput, TerminationType};

/// Request body for the `/calculate` endpoint.
///
/// Mirrors [`CalculationInput`], with an optional caller reference echoed
/// back in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Caller-supplied reference for the employee or case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// The legal form of the termination.
    pub termination_type: TerminationType,
    /// Monthly salary.
    pub monthly_salary: Decimal,
    /// First day of employment.
    pub hire_date: NaiveDate,
    /// Last day of employment.
    pub termination_date: NaiveDate,
    /// Whether the notice period is paid out instead of worked.
    #[serde(default)]
    pub indemnified_notice: bool,
    /// Acquired but untaken vacation days.
    #[serde(default)]
    pub unused_vacation_days: u32,
    /// FGTS balance deposited so far.
    #[serde(default)]
    pub fgts_balance: Option<Decimal>,
    /// Dependents for the income-tax deduction.
    #[serde(default)]
    pub dependents: u32,
    /// Caller's own count of months worked this year.
    #[serde(default)]
    pub months_worked_this_year: Option<u32>,
}

impl From<CalculationRequest> for CalculationInput {
    fn from(req: CalculationRequest) -> Self {
        CalculationInput {
            termination_type: req.termination_type,
            monthly_salary: req.monthly_salary,
            hire_date: req.hire_date,
            termination_date: req.termination_date,
            indemnified_notice: req.indemnified_notice,
            unused_vacation_days: req.unused_vacation_days,
            fgts_balance: req.fgts_balance,
            dependents: req.dependents,
            months_worked_this_year: req.months_worked_this_year,
        }
    }
}
