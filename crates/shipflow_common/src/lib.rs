// --- File: crates/shipflow_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod features; // Runtime feature flag handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared request/response envelopes
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, validation_error, HttpStatusCode,
    ShipflowError,
};

// Re-export HTTP utilities for easier access
pub use http::{client::HTTP_CLIENT, IntoHttpResponse};

// Re-export feature flag handling utilities for easier access
pub use features::{
    is_batscrm_enabled, is_dialpad_enabled, is_feature_enabled, is_simstudio_enabled,
    is_slack_enabled,
};
