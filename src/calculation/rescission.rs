//! Settlement orchestration.
//!
//! [`RescissionCalculator`] decides which components the termination type
//! owes, computes each one, withholds INSS and IRRF on the salary balance
//! and on the 13th salary separately, and assembles the totals.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde_json::json;
use tracing::debug;

use crate::config::TaxTables;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationInput, CalculationOutput, ComponentKind,
    EarningComponent,
};

use super::accrual::{ACCRUAL_LEGAL_REF, accrual_months};
use super::earnings::{
    accrued_vacation, fgts_penalty, indemnified_notice, proportional_thirteenth,
    proportional_vacation, salary_balance,
};
use super::money::{round_money, zero_money};
use super::notice::{
    NOTICE_LEGAL_REF, applied_notice_days, notice_days, projected_notice_days,
};
use super::withholding::{
    BracketWithholding, CONTRIBUTION_LEGAL_REF, INCOME_TAX_LEGAL_REF, WithholdingCalculator,
};

/// Days after termination within which the settlement must be paid.
pub const PAYMENT_DEADLINE_DAYS: u64 = 10;

/// Legal reference for the payment deadline.
pub const PAYMENT_DEADLINE_LEGAL_REF: &str = "CLT art. 477 §6";

/// Computes termination settlements.
///
/// The calculator holds no state between calls; one instance may serve any
/// number of concurrent calculations.
///
/// # Examples
///
/// ```
/// use rescission_engine::calculation::{BracketWithholding, RescissionCalculator};
/// use rescission_engine::config::TaxTables;
/// use rescission_engine::models::{CalculationInput, TerminationType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let tables = TaxTables::brazil_2025().unwrap();
/// let calculator = RescissionCalculator::new(BracketWithholding::new(tables));
/// let output = calculator
///     .calculate(&CalculationInput {
///         termination_type: TerminationType::WithCause,
///         monthly_salary: Decimal::new(300000, 2),
///         hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///         termination_date: NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(),
///         indemnified_notice: false,
///         unused_vacation_days: 0,
///         fgts_balance: None,
///         dependents: 0,
///         months_worked_this_year: None,
///     })
///     .unwrap();
///
/// assert_eq!(output.gross_total, Decimal::new(150000, 2));
/// assert_eq!(output.net_total, output.gross_total - output.withholding_total);
/// ```
#[derive(Debug, Clone)]
pub struct RescissionCalculator<W> {
    withholding: W,
}

impl<W: WithholdingCalculator> RescissionCalculator<W> {
    /// Creates a calculator that withholds with `withholding`.
    pub fn new(withholding: W) -> Self {
        Self { withholding }
    }

    /// Computes the full settlement for `input`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `input` fails validation and
    /// `NoApplicableBracket` if the withholding table cannot place a base.
    /// No partial output is produced on error.
    pub fn calculate(&self, input: &CalculationInput) -> EngineResult<CalculationOutput> {
        input.validate()?;

        let mut audit = AuditRecorder::default();
        let salary = input.monthly_salary;
        let termination_type = input.termination_type;

        let full_notice_days = notice_days(input.hire_date, input.termination_date);
        let projected_days =
            projected_notice_days(termination_type, input.indemnified_notice, full_notice_days);
        let applied_days =
            applied_notice_days(termination_type, input.indemnified_notice, full_notice_days);
        audit.record(
            "notice_days",
            "Notice Period",
            NOTICE_LEGAL_REF,
            json!({
                "hire_date": input.hire_date.to_string(),
                "termination_date": input.termination_date.to_string(),
                "termination_type": termination_type.as_str(),
                "indemnified_requested": input.indemnified_notice
            }),
            json!({
                "full_days": full_notice_days,
                "projected_days": projected_days,
                "applied_days": applied_days
            }),
            format!(
                "{} days of notice; {} days projected; {} days paid out",
                full_notice_days, projected_days, applied_days
            ),
        );

        let months = accrual_months(input.hire_date, input.termination_date, projected_days);
        audit.record(
            "accrual_months",
            "Accrual Months",
            ACCRUAL_LEGAL_REF,
            json!({
                "hire_date": input.hire_date.to_string(),
                "termination_date": input.termination_date.to_string(),
                "projected_notice_days": projected_days
            }),
            json!({ "months": months }),
            format!(
                "{} months of the termination year with at least 15 days of presence",
                months
            ),
        );
        if let Some(reported) = input.months_worked_this_year.filter(|m| *m != months) {
            audit.warn(
                "MONTHS_WORKED_MISMATCH",
                format!(
                    "Reported {} months worked this year; the dates credit {}",
                    reported, months
                ),
                "low",
            );
        }

        let mut earnings = Vec::new();

        let balance = salary_balance(salary, input.termination_date);
        earnings.push(EarningComponent::new(
            ComponentKind::SalaryBalance,
            "Salary balance",
            balance,
        ));
        audit.record(
            "salary_balance",
            "Salary Balance",
            "CLT art. 462",
            json!({
                "monthly_salary": salary.to_string(),
                "days": input.termination_date.day()
            }),
            json!({ "amount": balance.to_string() }),
            format!(
                "R$ {} / 30 x {} days = R$ {}",
                salary.normalize(),
                input.termination_date.day(),
                balance
            ),
        );

        let mut thirteenth = Decimal::ZERO;
        if termination_type.includes_proportional_thirteenth() && months > 0 {
            thirteenth = proportional_thirteenth(salary, months);
            earnings.push(EarningComponent::new(
                ComponentKind::ProportionalThirteenth,
                format!("Proportional 13th salary ({}/12)", months),
                thirteenth,
            ));
            audit.record(
                "proportional_thirteenth",
                "Proportional 13th Salary",
                "Lei 4.090/1962 art. 3",
                json!({ "monthly_salary": salary.to_string(), "months": months }),
                json!({ "amount": thirteenth.to_string() }),
                format!("R$ {} x {}/12 = R$ {}", salary.normalize(), months, thirteenth),
            );
        } else {
            audit.skip(
                "proportional_thirteenth",
                "Proportional 13th Salary",
                "Lei 4.090/1962 art. 3",
                skip_reason(termination_type.includes_proportional_thirteenth(), months),
            );
        }

        if termination_type.includes_proportional_vacation() && months > 0 {
            let amount = proportional_vacation(salary, months);
            earnings.push(EarningComponent::new(
                ComponentKind::ProportionalVacation,
                format!("Proportional vacation + 1/3 ({}/12)", months),
                amount,
            ));
            audit.record(
                "proportional_vacation",
                "Proportional Vacation",
                "CLT art. 146; CF art. 7 XVII",
                json!({ "monthly_salary": salary.to_string(), "months": months }),
                json!({ "amount": amount.to_string() }),
                format!(
                    "R$ {} x {}/12, plus one third = R$ {}",
                    salary.normalize(),
                    months,
                    amount
                ),
            );
        } else {
            audit.skip(
                "proportional_vacation",
                "Proportional Vacation",
                "CLT art. 146; CF art. 7 XVII",
                skip_reason(termination_type.includes_proportional_vacation(), months),
            );
        }

        if input.unused_vacation_days > 0 {
            let amount = accrued_vacation(salary, input.unused_vacation_days);
            earnings.push(EarningComponent::new(
                ComponentKind::AccruedVacation,
                format!("Accrued vacation + 1/3 ({} days)", input.unused_vacation_days),
                amount,
            ));
            audit.record(
                "accrued_vacation",
                "Accrued Vacation",
                "CLT art. 146",
                json!({
                    "monthly_salary": salary.to_string(),
                    "days": input.unused_vacation_days
                }),
                json!({ "amount": amount.to_string() }),
                format!(
                    "R$ {} / 30 x {} days, plus one third = R$ {}",
                    salary.normalize(),
                    input.unused_vacation_days,
                    amount
                ),
            );
        }

        if applied_days > 0 {
            let amount = indemnified_notice(salary, applied_days);
            earnings.push(EarningComponent::new(
                ComponentKind::IndemnifiedNotice,
                format!("Indemnified notice ({} days)", applied_days),
                amount,
            ));
            audit.record(
                "indemnified_notice",
                "Indemnified Notice",
                NOTICE_LEGAL_REF,
                json!({ "monthly_salary": salary.to_string(), "days": applied_days }),
                json!({ "amount": amount.to_string() }),
                format!(
                    "R$ {} / 30 x {} days = R$ {}",
                    salary.normalize(),
                    applied_days,
                    amount
                ),
            );
        }

        let fgts_balance = round_money(input.fgts_balance_or_zero());
        earnings.push(EarningComponent::new(
            ComponentKind::FgtsBalance,
            "FGTS balance",
            fgts_balance,
        ));

        let penalty = fgts_penalty(termination_type, fgts_balance);
        if penalty > Decimal::ZERO {
            let rate = termination_type.fgts_penalty_rate() * Decimal::ONE_HUNDRED;
            earnings.push(EarningComponent::new(
                ComponentKind::FgtsPenalty,
                format!("FGTS penalty ({}%)", rate.normalize()),
                penalty,
            ));
        }
        audit.record(
            "fgts",
            "FGTS Balance and Penalty",
            "Lei 8.036/1990 art. 18",
            json!({
                "balance": fgts_balance.to_string(),
                "termination_type": termination_type.as_str()
            }),
            json!({ "penalty": penalty.to_string() }),
            format!(
                "Penalty of {}% on R$ {} = R$ {}",
                (termination_type.fgts_penalty_rate() * Decimal::ONE_HUNDRED).normalize(),
                fgts_balance,
                penalty
            ),
        );

        for component in &earnings {
            debug!(kind = ?component.kind, amount = %component.amount, "earning included");
        }

        let withholdings = self.withhold(balance, thirteenth, input.dependents, &mut audit)?;

        let gross_total = sum_components(&earnings);
        let withholding_total = sum_components(&withholdings);
        let net_total = round_money(gross_total - withholding_total);
        let payment_due_date = payment_deadline(input.termination_date)?;
        audit.record(
            "payment_deadline",
            "Payment Deadline",
            PAYMENT_DEADLINE_LEGAL_REF,
            json!({ "termination_date": input.termination_date.to_string() }),
            json!({ "payment_due_date": payment_due_date.to_string() }),
            format!(
                "Settlement due {} days after termination",
                PAYMENT_DEADLINE_DAYS
            ),
        );

        debug!(
            termination_type = %termination_type,
            gross = %gross_total,
            withholdings = %withholding_total,
            net = %net_total,
            "settlement computed"
        );

        Ok(CalculationOutput {
            earnings,
            withholdings,
            gross_total,
            withholding_total,
            net_total,
            payment_due_date,
            accrual_months: months,
            notice_days: full_notice_days,
            audit_trace: audit.finish(),
        })
    }

    /// Withholds INSS then IRRF on the salary balance and the 13th salary,
    /// each base on its own. Zero lines are dropped.
    fn withhold(
        &self,
        salary_balance: Decimal,
        thirteenth: Decimal,
        dependents: u32,
        audit: &mut AuditRecorder,
    ) -> EngineResult<Vec<EarningComponent>> {
        let inss_balance = self.withholding.calculate_contribution(salary_balance);
        let inss_thirteenth = self.withholding.calculate_contribution(thirteenth);
        let irrf_balance =
            self.withholding
                .calculate_income_tax(salary_balance, inss_balance, dependents)?;
        let irrf_thirteenth =
            self.withholding
                .calculate_income_tax(thirteenth, inss_thirteenth, dependents)?;

        audit.record(
            "inss",
            "INSS Contribution",
            CONTRIBUTION_LEGAL_REF,
            json!({
                "salary_balance": salary_balance.to_string(),
                "thirteenth": thirteenth.to_string()
            }),
            json!({
                "on_salary_balance": inss_balance.to_string(),
                "on_thirteenth": inss_thirteenth.to_string()
            }),
            "Progressive contribution applied to each base separately".to_string(),
        );
        audit.record(
            "irrf",
            "IRRF Withholding",
            INCOME_TAX_LEGAL_REF,
            json!({ "dependents": dependents }),
            json!({
                "on_salary_balance": irrf_balance.to_string(),
                "on_thirteenth": irrf_thirteenth.to_string()
            }),
            format!(
                "Income tax on each base net of its INSS and {} dependent deductions",
                dependents
            ),
        );

        let lines = [
            (ComponentKind::InssSalaryBalance, "INSS on salary balance", inss_balance),
            (ComponentKind::InssThirteenth, "INSS on 13th salary", inss_thirteenth),
            (ComponentKind::IrrfSalaryBalance, "IRRF on salary balance", irrf_balance),
            (ComponentKind::IrrfThirteenth, "IRRF on 13th salary", irrf_thirteenth),
        ];

        Ok(lines
            .into_iter()
            .filter(|(_, _, amount)| *amount > Decimal::ZERO)
            .map(|(kind, label, amount)| {
                debug!(kind = ?kind, amount = %amount, "withholding included");
                EarningComponent::new(kind, label, amount)
            })
            .collect())
    }
}

/// Computes a settlement with the built-in 2025 tables.
pub fn calculate_rescission(input: &CalculationInput) -> EngineResult<CalculationOutput> {
    let tables = TaxTables::brazil_2025()?;
    RescissionCalculator::new(BracketWithholding::new(tables)).calculate(input)
}

fn sum_components(components: &[EarningComponent]) -> Decimal {
    round_money(components.iter().map(|c| c.amount).sum::<Decimal>())
}

fn payment_deadline(termination_date: NaiveDate) -> EngineResult<NaiveDate> {
    termination_date
        .checked_add_days(Days::new(PAYMENT_DEADLINE_DAYS))
        .ok_or_else(|| EngineError::InvalidInput {
            field: "termination_date".to_string(),
            message: format!(
                "{} leaves no representable payment deadline",
                termination_date
            ),
        })
}

fn skip_reason(eligible: bool, months: u32) -> String {
    if eligible {
        format!("Not included - {} accrual months", months)
    } else {
        "Not included - termination for just cause".to_string()
    }
}

/// Collects audit steps, numbering them in order.
#[derive(Debug, Default)]
struct AuditRecorder {
    trace: AuditTrace,
}

impl AuditRecorder {
    fn record(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        legal_ref: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        let step_number = self.trace.steps.len() as u32 + 1;
        self.trace.steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            legal_ref: legal_ref.to_string(),
            input,
            output,
            reasoning,
        });
    }

    fn skip(&mut self, rule_id: &str, rule_name: &str, legal_ref: &str, reasoning: String) {
        debug!(rule_id, reason = %reasoning, "rule skipped");
        self.record(
            rule_id,
            rule_name,
            legal_ref,
            json!({}),
            json!({ "amount": zero_money().to_string(), "included": false }),
            reasoning,
        );
    }

    fn warn(&mut self, code: &str, message: String, severity: &str) {
        self.trace.warnings.push(AuditWarning {
            code: code.to_string(),
            message,
            severity: severity.to_string(),
        });
    }

    fn finish(self) -> AuditTrace {
        self.trace
    }
}
