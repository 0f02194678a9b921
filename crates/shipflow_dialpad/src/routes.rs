// --- File: crates/shipflow_dialpad/src/routes.rs ---

use axum::{routing::post, Router};
use shipflow_config::AppConfig;
use std::sync::Arc;

use shipflow_dispatch::WorkflowBridge;

use crate::handlers::{dialpad_webhook_handler, DialpadState};

/// Creates a router containing the Dialpad webhook route.
///
/// # Arguments
/// * `config` - Shared application configuration (`Arc<AppConfig>`).
/// * `bridge` - The workflow bridge events are submitted through.
///
/// # Returns
/// An Axum Router configured with Dialpad routes and state.
pub fn routes(config: Arc<AppConfig>, bridge: Arc<WorkflowBridge>) -> Router {
    let state = Arc::new(DialpadState { config, bridge });

    Router::new()
        // Endpoint called by the Dialpad server for webhook notifications
        .route("/webhooks/dialpad", post(dialpad_webhook_handler))
        .with_state(state)
}
