// --- File: crates/shipflow_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- BatsCRM Config ---
// Holds non-secret BatsCRM config. API key loaded via env override.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BatsCrmConfig {
    pub base_url: String, // e.g. https://api.batscrm.com/v1
    pub api_key: String,  // Loaded via SHIPFLOW__BATSCRM__API_KEY
    /// Base URL of the human-facing BatsCRM portal, used to build
    /// "view order" links in notifications.
    pub portal_url: String,
}

// --- Dialpad Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DialpadConfig {
    pub base_url: String, // e.g. https://api.dialpad.com/v2
    pub api_key: String,  // Loaded via SHIPFLOW__DIALPAD__API_KEY
    /// Default caller id for outbound calls when the workflow engine
    /// does not supply one.
    pub caller_id: Option<String>,
}

// --- Slack Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SlackConfig {
    /// Slack Web API root. Overridable so tests can point it at a mock.
    #[serde(default = "default_slack_api_url")]
    pub api_url: String,
    pub bot_token: String, // Loaded via SHIPFLOW__SLACK__BOT_TOKEN
}

fn default_slack_api_url() -> String {
    "https://slack.com/api".to_string()
}

// --- Sim Studio Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SimStudioConfig {
    pub api_url: String,
    pub api_key: String, // Loaded via SHIPFLOW__SIMSTUDIO__API_KEY
    /// Identifier of the shipping-coordination workflow every event is
    /// submitted to.
    pub workflow_id: String,
}

// --- Dispatch Config ---

/// What the action dispatcher does when a routed provider call fails.
///
/// `Abort` stops at the first failure and propagates it, dropping the rest
/// of the list. `Continue` attempts every action and collects the failures.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    #[default]
    Abort,
    Continue,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DispatchConfig {
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_batscrm: bool,
    #[serde(default)]
    pub use_dialpad: bool,
    #[serde(default)]
    pub use_slack: bool,
    #[serde(default)]
    pub use_simstudio: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub batscrm: Option<BatsCrmConfig>,
    #[serde(default)]
    pub dialpad: Option<DialpadConfig>,
    #[serde(default)]
    pub slack: Option<SlackConfig>,
    #[serde(default)]
    pub simstudio: Option<SimStudioConfig>,
    #[serde(default)]
    pub dispatch: Option<DispatchConfig>,
}

impl AppConfig {
    /// Effective failure policy: configured value or the `abort` default.
    pub fn failure_policy(&self) -> FailurePolicy {
        self.dispatch
            .as_ref()
            .map(|d| d.failure_policy)
            .unwrap_or_default()
    }
}
