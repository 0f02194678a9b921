// --- File: crates/shipflow_dialpad/src/logic.rs ---

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use shipflow_config::DialpadConfig;
use shipflow_common::services::ProviderReceipt;
use shipflow_common::HTTP_CLIENT;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum DialpadError {
    #[error("Dialpad API request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Dialpad API returned an error: Status={status}, Message='{message}'")]
    ApiError { status: u16, message: String },
}

// --- Request Payloads ---

#[derive(Serialize, Debug)]
struct SendSmsBody<'a> {
    to: &'a str,
    message: &'a str,
}

#[derive(Serialize, Debug)]
struct InitiateCallBody<'a> {
    to: &'a str,
    from: &'a str,
    notes: &'a str,
}

// --- API Calls ---

/// Send an SMS to a phone number.
pub async fn send_sms(
    config: &DialpadConfig,
    to: &str,
    message: &str,
) -> Result<ProviderReceipt, DialpadError> {
    info!("Sending SMS to {}", to);
    let url = format!("{}/messages", config.base_url);
    let response = HTTP_CLIENT
        .post(&url)
        .bearer_auth(&config.api_key)
        .json(&SendSmsBody { to, message })
        .send()
        .await?;
    let response = check_status(response).await?;
    let body: Value = response.json().await?;
    Ok(ProviderReceipt::from_json(&body))
}

/// Initiate an outbound call from `caller_id` to `to`.
pub async fn initiate_call(
    config: &DialpadConfig,
    to: &str,
    caller_id: &str,
    notes: Option<&str>,
) -> Result<ProviderReceipt, DialpadError> {
    info!("Initiating call to {} from {}", to, caller_id);
    let url = format!("{}/calls", config.base_url);
    let response = HTTP_CLIENT
        .post(&url)
        .bearer_auth(&config.api_key)
        .json(&InitiateCallBody {
            to,
            from: caller_id,
            notes: notes.unwrap_or(""),
        })
        .send()
        .await?;
    let response = check_status(response).await?;
    let body: Value = response.json().await?;
    Ok(ProviderReceipt::from_json(&body))
}

/// Map a non-2xx response to an ApiError carrying the body text.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, DialpadError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    error!("Dialpad returned {}: {}", status, message);
    Err(DialpadError::ApiError {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> DialpadConfig {
        DialpadConfig {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
            caller_id: Some("+15557654321".to_string()),
        }
    }

    #[tokio::test]
    async fn send_sms_posts_to_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_json(json!({"to": "+15551234567", "message": "On the way"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_1",
                "status": "queued"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = send_sms(&config_for(&server), "+15551234567", "On the way")
            .await
            .unwrap();
        assert_eq!(receipt.id.as_deref(), Some("msg_1"));
        assert_eq!(receipt.status, "queued");
    }

    #[tokio::test]
    async fn initiate_call_posts_from_and_notes() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/calls"))
            .and(body_json(json!({
                "to": "+15551234567",
                "from": "+15557654321",
                "notes": "confirm delivery window"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "call_1"})))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = initiate_call(
            &config_for(&server),
            "+15551234567",
            "+15557654321",
            Some("confirm delivery window"),
        )
        .await
        .unwrap();
        assert_eq!(receipt.id.as_deref(), Some("call_1"));
    }

    #[tokio::test]
    async fn api_error_carries_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/messages"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = send_sms(&config_for(&server), "+1555", "hi")
            .await
            .unwrap_err();
        match err {
            DialpadError::ApiError { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api key");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }
}
