//! Rescission Engine for Brazilian employment terminations
//!
//! This crate computes termination settlements (verbas rescisórias): the
//! earning components owed for a termination type, the INSS and IRRF
//! withholdings on the taxable bases, the gross/withholding/net totals and
//! the statutory payment deadline.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
