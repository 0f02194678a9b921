// --- File: crates/shipflow_simstudio/src/logic.rs ---

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use shipflow_config::SimStudioConfig;
use shipflow_common::services::WorkflowRunResult;
use shipflow_common::HTTP_CLIENT;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum SimStudioError {
    #[error("Sim Studio API request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Sim Studio API returned an error: Status={status}, Message='{message}'")]
    ApiError { status: u16, message: String },
    #[error("Failed to parse Sim Studio response: {0}")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Serialize, Debug)]
struct RunWorkflowBody {
    input: Value,
}

/// Run a workflow with the given event payload as input.
///
/// The engine result is kept raw; the `output.actions` list is extracted
/// for the dispatcher, defaulting to empty when the engine returned none.
pub async fn run_workflow(
    config: &SimStudioConfig,
    workflow_id: &str,
    input: Value,
) -> Result<WorkflowRunResult, SimStudioError> {
    let url = format!("{}/workflows/{}/run", config.api_url, workflow_id);
    let response = HTTP_CLIENT
        .post(&url)
        .bearer_auth(&config.api_key)
        .json(&RunWorkflowBody { input })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        error!("Sim Studio returned {}: {}", status, message);
        return Err(SimStudioError::ApiError {
            status: status.as_u16(),
            message,
        });
    }

    let raw: Value = response.json().await?;
    let actions = extract_actions(&raw);
    debug!(workflow_id, actions = actions.len(), "Sim Studio run complete");
    Ok(WorkflowRunResult { raw, actions })
}

/// Pull `output.actions` out of the engine response. A missing or
/// non-array value means no actions, not an error.
fn extract_actions(raw: &Value) -> Vec<Value> {
    raw.get("output")
        .and_then(|output| output.get("actions"))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> SimStudioConfig {
        SimStudioConfig {
            api_url: server.uri(),
            api_key: "sim-key".to_string(),
            workflow_id: "wf-shipping".to_string(),
        }
    }

    #[test]
    fn extract_actions_defaults_to_empty() {
        assert!(extract_actions(&json!({})).is_empty());
        assert!(extract_actions(&json!({"output": {}})).is_empty());
        assert!(extract_actions(&json!({"output": {"actions": "nope"}})).is_empty());
    }

    #[tokio::test]
    async fn run_workflow_wraps_input_and_extracts_actions() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/workflows/wf-shipping/run"))
            .and(header("authorization", "Bearer sim-key"))
            .and(body_json(json!({"input": {"type": "incoming_message"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "output": {
                    "actions": [
                        {"type": "send_sms", "phoneNumber": "+1555", "message": "hi"}
                    ]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = run_workflow(
            &config_for(&server),
            "wf-shipping",
            json!({"type": "incoming_message"}),
        )
        .await
        .unwrap();

        assert_eq!(result.actions.len(), 1);
        assert_eq!(result.actions[0]["type"], "send_sms");
        assert_eq!(result.raw["output"]["actions"][0]["message"], "hi");
    }

    #[tokio::test]
    async fn run_workflow_tolerates_missing_actions() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/workflows/wf-shipping/run"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"output": {}})))
            .mount(&server)
            .await;

        let result = run_workflow(&config_for(&server), "wf-shipping", json!({}))
            .await
            .unwrap();
        assert!(result.actions.is_empty());
    }

    #[tokio::test]
    async fn engine_error_status_propagates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/workflows/wf-shipping/run"))
            .respond_with(ResponseTemplate::new(502).set_body_string("engine offline"))
            .mount(&server)
            .await;

        let err = run_workflow(&config_for(&server), "wf-shipping", json!({}))
            .await
            .unwrap_err();
        match err {
            SimStudioError::ApiError { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "engine offline");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }
}
