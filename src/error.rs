//! Error types for the Rescission Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a settlement.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Rescission Engine.
///
/// Input errors are recoverable and belong to the caller. Table and
/// configuration errors mean the deployed tax tables are wrong and must
/// never be silently defaulted.
///
/// # Example
///
/// ```
/// use rescission_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/contribution.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/contribution.yaml"
/// );
/// ```
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A bracket table is malformed (gap, ordering, missing open-ended entry).
    #[error("Invalid {table} table: {message}")]
    InvalidTaxTable {
        /// The table that failed validation ("contribution" or "withholding").
        table: String,
        /// A description of what is wrong with the table.
        message: String,
    },

    /// No withholding bracket matched the base.
    #[error("No withholding bracket applies to base {base}")]
    NoApplicableBracket {
        /// The net base that could not be placed in a bracket.
        base: Decimal,
    },

    /// A calculation input violated a precondition.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Returns true for errors caused by the caller's input rather than
    /// by the deployed configuration.
    pub fn is_input_error(&self) -> bool {
        matches!(self, EngineError::InvalidInput { .. })
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/withholding.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/withholding.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_tax_table_displays_table_and_message() {
        let error = EngineError::InvalidTaxTable {
            table: "withholding".to_string(),
            message: "missing open-ended final bracket".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid withholding table: missing open-ended final bracket"
        );
    }

    #[test]
    fn test_no_applicable_bracket_displays_base() {
        let error = EngineError::NoApplicableBracket {
            base: Decimal::from_str("5160.91").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "No withholding bracket applies to base 5160.91"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "termination_date".to_string(),
            message: "precedes hire date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input field 'termination_date': precedes hire date"
        );
        assert!(error.is_input_error());
    }

    #[test]
    fn test_table_errors_are_not_input_errors() {
        let error = EngineError::InvalidTaxTable {
            table: "contribution".to_string(),
            message: "empty".to_string(),
        };
        assert!(!error.is_input_error());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }
}
