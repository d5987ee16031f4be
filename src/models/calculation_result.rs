//! Calculation output models for the Rescission Engine.
//!
//! This module contains the [`CalculationOutput`] type and its associated
//! structures: itemised earning and withholding components, totals, the
//! payment deadline, and an audit trace of every rule applied.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_money;

/// Identifies the rule that produced a component.
///
/// # Example
///
/// ```
/// use rescission_engine::models::ComponentKind;
///
/// let kind = ComponentKind::ProportionalThirteenth;
/// assert_eq!(serde_json::to_string(&kind).unwrap(), "\"proportional_thirteenth\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Salary for the days worked in the termination month.
    SalaryBalance,
    /// Proportional 13th salary.
    ProportionalThirteenth,
    /// Proportional vacation plus one-third.
    ProportionalVacation,
    /// Acquired but untaken vacation plus one-third.
    AccruedVacation,
    /// Notice period paid instead of worked.
    IndemnifiedNotice,
    /// Deposited FGTS balance.
    FgtsBalance,
    /// FGTS termination penalty.
    FgtsPenalty,
    /// INSS withheld on the salary balance.
    InssSalaryBalance,
    /// INSS withheld on the 13th salary.
    InssThirteenth,
    /// IRRF withheld on the salary balance.
    IrrfSalaryBalance,
    /// IRRF withheld on the 13th salary.
    IrrfThirteenth,
}

/// A single line of the settlement, either an earning or a withholding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningComponent {
    /// The rule that produced this line.
    pub kind: ComponentKind,
    /// Human-readable label.
    pub label: String,
    /// Amount, always carried with two fractional digits.
    pub amount: Decimal,
}

impl EarningComponent {
    /// Creates a component, rounding `amount` to two fractional digits.
    pub fn new(kind: ComponentKind, label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            kind,
            label: label.into(),
            amount: round_money(amount),
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute backing this rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The audit trace for a calculation.
///
/// Holds no timings or identifiers, so two runs over the same input
/// produce identical traces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a settlement calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationOutput {
    /// Gross earning components, in the order their rules fired.
    pub earnings: Vec<EarningComponent>,
    /// Non-zero withholding components.
    pub withholdings: Vec<EarningComponent>,
    /// Sum of all earnings.
    pub gross_total: Decimal,
    /// Sum of all withholdings.
    pub withholding_total: Decimal,
    /// `gross_total - withholding_total`.
    pub net_total: Decimal,
    /// Statutory deadline: termination date plus ten days.
    pub payment_due_date: NaiveDate,
    /// Months of the termination year credited by the 15-day rule.
    pub accrual_months: u32,
    /// Full notice-period entitlement in days.
    pub notice_days: u32,
    /// Every rule decision made during the calculation.
    pub audit_trace: AuditTrace,
}

impl CalculationOutput {
    /// Finds the earning produced by `kind`, if any.
    pub fn earning(&self, kind: ComponentKind) -> Option<&EarningComponent> {
        self.earnings.iter().find(|c| c.kind == kind)
    }

    /// Finds the withholding produced by `kind`, if any.
    pub fn withholding(&self, kind: ComponentKind) -> Option<&EarningComponent> {
        self.withholdings.iter().find(|c| c.kind == kind)
    }
}
