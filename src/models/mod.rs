//! Core data models for the Rescission Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_input;
mod calculation_result;
mod termination;

pub use calculation_input::{CalculationInput, MAX_AMOUNT};
pub use calculation_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationOutput, ComponentKind, EarningComponent,
};
pub use termination::TerminationType;
