// --- File: crates/shipflow_batscrm/src/routes.rs ---

use axum::{routing::post, Router};
use shipflow_config::AppConfig;
use std::sync::Arc;

use shipflow_common::services::{BoxedError, CrmService};
use shipflow_dispatch::WorkflowBridge;

use crate::handlers::{batscrm_webhook_handler, BatsCrmState};

/// Creates a router containing the BatsCRM webhook route.
///
/// # Arguments
/// * `config` - Shared application configuration (`Arc<AppConfig>`).
/// * `crm` - CRM service used to enrich webhook events.
/// * `bridge` - The workflow bridge events are submitted through.
///
/// # Returns
/// An Axum Router configured with BatsCRM routes and state.
pub fn routes(
    config: Arc<AppConfig>,
    crm: Arc<dyn CrmService<Error = BoxedError>>,
    bridge: Arc<WorkflowBridge>,
) -> Router {
    let state = Arc::new(BatsCrmState {
        config,
        crm,
        bridge,
    });

    Router::new()
        // Endpoint called by the BatsCRM server for webhook notifications
        .route("/webhooks/batscrm", post(batscrm_webhook_handler))
        .with_state(state)
}
