//! Application state for the Rescission Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, TaxTables};

/// Shared application state.
///
/// Holds the tax tables loaded at startup. Tables are read-only after
/// loading, so every request shares the same instance.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the tax tables used for withholding.
    pub fn tables(&self) -> &TaxTables {
        self.config.tables()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_exposes_loaded_tables() {
        let config = ConfigLoader::load("./config/br2025").expect("Failed to load config");
        let state = AppState::new(config);
        assert_eq!(state.tables().tax_year(), 2025);
        assert_eq!(state.config().metadata().tax_year, 2025);
    }
}
