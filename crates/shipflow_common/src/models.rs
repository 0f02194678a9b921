// --- File: crates/shipflow_common/src/models.rs ---

// This file contains data structures that are shared across the HTTP
// surface of the application: the success/error envelope every inbound
// entry point responds with.

use serde::{Deserialize, Serialize};

/// The acknowledgement body returned by webhook and trigger endpoints.
///
/// Inbound entry points respond with a binary success/error outcome; on
/// error the message field carries a human-readable string and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WebhookAck {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WebhookAck {
    /// A plain success acknowledgement.
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: None,
        }
    }
}
