//! Termination types and the per-type settlement policy.
//!
//! Every policy branch of the settlement (which components are owed,
//! whether notice may be indemnified, the FGTS penalty rate) is decided by
//! matching on [`TerminationType`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The legal form of the termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TerminationType {
    /// Dismissal by the employer without just cause (sem justa causa).
    WithoutCause,
    /// Dismissal for just cause (justa causa).
    WithCause,
    /// Resignation by the employee (pedido de demissão).
    Resignation,
    /// Negotiated termination under CLT art. 484-A: half notice, 20% penalty.
    MutualAgreement,
    /// End of a fixed-term contract (término de contrato).
    FixedTermEnd,
}

impl TerminationType {
    /// All termination types, in declaration order.
    pub const ALL: [TerminationType; 5] = [
        TerminationType::WithoutCause,
        TerminationType::WithCause,
        TerminationType::Resignation,
        TerminationType::MutualAgreement,
        TerminationType::FixedTermEnd,
    ];

    /// Returns the wire name of this termination type.
    pub fn as_str(self) -> &'static str {
        match self {
            TerminationType::WithoutCause => "WITHOUT_CAUSE",
            TerminationType::WithCause => "WITH_CAUSE",
            TerminationType::Resignation => "RESIGNATION",
            TerminationType::MutualAgreement => "MUTUAL_AGREEMENT",
            TerminationType::FixedTermEnd => "FIXED_TERM_END",
        }
    }

    /// Whether the proportional 13th salary is owed.
    pub fn includes_proportional_thirteenth(self) -> bool {
        !matches!(self, TerminationType::WithCause)
    }

    /// Whether proportional vacation plus one-third is owed.
    pub fn includes_proportional_vacation(self) -> bool {
        !matches!(self, TerminationType::WithCause)
    }

    /// Whether the notice period may be paid out instead of worked.
    pub fn permits_indemnified_notice(self) -> bool {
        match self {
            TerminationType::WithoutCause | TerminationType::MutualAgreement => true,
            TerminationType::WithCause
            | TerminationType::Resignation
            | TerminationType::FixedTermEnd => false,
        }
    }

    /// Whether only half of the notice period is projected and paid.
    pub fn halves_notice(self) -> bool {
        matches!(self, TerminationType::MutualAgreement)
    }

    /// The FGTS penalty rate applied to the deposited balance.
    pub fn fgts_penalty_rate(self) -> Decimal {
        match self {
            TerminationType::WithoutCause => Decimal::new(40, 2),
            TerminationType::MutualAgreement => Decimal::new(20, 2),
            TerminationType::WithCause
            | TerminationType::Resignation
            | TerminationType::FixedTermEnd => Decimal::ZERO,
        }
    }
}

impl std::fmt::Display for TerminationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
