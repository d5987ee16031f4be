//! Tax table configuration for the Rescission Engine.
//!
//! Bracket tables are immutable once built. The 2025 tables are available
//! without any I/O through [`TaxTables::brazil_2025`]; the same tables can
//! also be loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use rescission_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/br2025").unwrap();
//! println!("Loaded: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, TaxYearMetadata};
pub use types::{ContributionBracket, TaxTables, WithholdingBracket};
