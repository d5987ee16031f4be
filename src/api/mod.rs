//! HTTP API module for the Rescission Engine.
//!
//! This module provides the REST API endpoint for computing a termination
//! settlement against the tax tables loaded at startup.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{ENGINE_VERSION, create_router};
pub use request::CalculationRequest;
pub use response::{ApiError, CalculationResponse};
pub use state::AppState;
