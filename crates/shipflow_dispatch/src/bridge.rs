// --- File: crates/shipflow_dispatch/src/bridge.rs ---
//! Submits enriched events to the workflow engine and dispatches whatever
//! actions the engine returns.

use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use shipflow_common::services::{BoxedError, WorkflowEngineService, WorkflowRunResult};

use crate::actions::Action;
use crate::dispatcher::{ActionDispatcher, DispatchError};
use crate::events::EventRecord;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The engine call failed or returned an undecodable result. Propagates
    /// unchanged to the inbound handler; there is no internal retry.
    #[error("workflow engine call failed: {0}")]
    Engine(#[source] BoxedError),

    #[error("failed to encode event payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// The bridge between inbound events and the action dispatcher.
pub struct WorkflowBridge {
    engine: Arc<dyn WorkflowEngineService<Error = BoxedError>>,
    dispatcher: ActionDispatcher,
    workflow_id: String,
}

impl WorkflowBridge {
    pub fn new(
        engine: Arc<dyn WorkflowEngineService<Error = BoxedError>>,
        dispatcher: ActionDispatcher,
        workflow_id: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            dispatcher,
            workflow_id: workflow_id.into(),
        }
    }

    /// Submit one event to the engine, execute the returned action list,
    /// and hand back the raw engine result.
    pub async fn submit(&self, event: EventRecord) -> Result<WorkflowRunResult, BridgeError> {
        let input = serde_json::to_value(&event)?;
        let result = self
            .engine
            .run(&self.workflow_id, input)
            .await
            .map_err(BridgeError::Engine)?;

        let actions = parse_actions(&result);
        debug!(
            workflow_id = %self.workflow_id,
            actions = actions.len(),
            "Workflow engine returned action list"
        );
        self.dispatcher.execute(&actions).await?;

        Ok(result)
    }
}

/// Decode the engine's action values. Entries that are not JSON objects at
/// all are dropped with a diagnostic; everything else parses, unknown tags
/// included.
fn parse_actions(result: &WorkflowRunResult) -> Vec<Action> {
    result
        .actions
        .iter()
        .filter_map(|value| match serde_json::from_value(value.clone()) {
            Ok(action) => Some(action),
            Err(err) => {
                warn!(%err, "Dropping malformed action entry from engine output");
                None
            }
        })
        .collect()
}
