//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax tables
//! from YAML files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ContributionBracket, TaxTables, WithholdingBracket};

/// Contents of `tax_year.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxYearMetadata {
    /// The calendar year the tables apply to.
    pub tax_year: i32,
    /// A human-readable name for the table set.
    pub name: String,
    /// Income-tax deduction per dependent.
    pub dependent_deduction: Decimal,
}

#[derive(Debug, Deserialize)]
struct ContributionFile {
    brackets: Vec<ContributionBracket>,
}

#[derive(Debug, Deserialize)]
struct WithholdingFile {
    brackets: Vec<WithholdingBracket>,
}

/// Loads and provides access to tax tables.
///
/// # Directory Structure
///
/// ```text
/// config/br2025/
/// ├── tax_year.yaml      # Year, name and dependent deduction
/// ├── contribution.yaml  # INSS brackets (capped)
/// └── withholding.yaml   # IRRF brackets (open-ended last)
/// ```
///
/// # Example
///
/// ```no_run
/// use rescission_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/br2025")?;
/// println!("Loaded tables for {}", loader.tables().tax_year());
/// # Ok::<(), rescission_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    metadata: TaxYearMetadata,
    tables: TaxTables,
}

impl ConfigLoader {
    /// Loads and validates the tables in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The tables fail validation (`InvalidTaxTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TaxYearMetadata>(&path.join("tax_year.yaml"))?;
        let contribution = Self::load_yaml::<ContributionFile>(&path.join("contribution.yaml"))?;
        let withholding = Self::load_yaml::<WithholdingFile>(&path.join("withholding.yaml"))?;

        let tables = TaxTables::new(
            metadata.tax_year,
            contribution.brackets,
            withholding.brackets,
            metadata.dependent_deduction,
        )?;

        Ok(Self { metadata, tables })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the table-set metadata.
    pub fn metadata(&self) -> &TaxYearMetadata {
        &self.metadata
    }

    /// Returns the validated tables.
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }

    /// Consumes the loader, returning the validated tables.
    pub fn into_tables(self) -> TaxTables {
        self.tables
    }
}
