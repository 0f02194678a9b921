// --- File: crates/shipflow_dispatch/src/routes.rs ---

use axum::{routing::post, Router};
use shipflow_config::AppConfig;
use std::sync::Arc;

use shipflow_common::services::{BoxedError, CrmService};

use crate::bridge::WorkflowBridge;
use crate::handlers::{shipping_notify_handler, ShippingState};

/// Creates a router containing the manual shipping-trigger route.
///
/// # Arguments
/// * `config` - Shared application configuration (`Arc<AppConfig>`).
/// * `crm` - CRM service used for the status write and event enrichment.
/// * `bridge` - The workflow bridge events are submitted through.
///
/// # Returns
/// An Axum Router configured with the shipping routes and state.
pub fn routes(
    config: Arc<AppConfig>,
    crm: Arc<dyn CrmService<Error = BoxedError>>,
    bridge: Arc<WorkflowBridge>,
) -> Router {
    let state = Arc::new(ShippingState {
        config,
        crm,
        bridge,
    });

    Router::new()
        // Endpoint operators call to push a shipping status update through
        .route("/shipping/notify", post(shipping_notify_handler))
        .with_state(state)
}
