// --- File: crates/shipflow_simstudio/src/service.rs ---

use serde_json::Value;
use shipflow_config::SimStudioConfig;
use shipflow_common::services::{BoxFuture, BoxedError, WorkflowEngineService, WorkflowRunResult};

use crate::logic;

/// Sim Studio implementation of the workflow engine trait.
pub struct SimStudioEngineService {
    config: SimStudioConfig,
}

impl SimStudioEngineService {
    /// Create a new Sim Studio service from its configuration section.
    pub fn new(config: SimStudioConfig) -> Self {
        Self { config }
    }
}

impl WorkflowEngineService for SimStudioEngineService {
    type Error = BoxedError;

    fn run(
        &self,
        workflow_id: &str,
        input: Value,
    ) -> BoxFuture<'_, WorkflowRunResult, Self::Error> {
        let workflow_id = workflow_id.to_string();
        Box::pin(async move {
            logic::run_workflow(&self.config, &workflow_id, input)
                .await
                .map_err(BoxedError::new)
        })
    }
}
