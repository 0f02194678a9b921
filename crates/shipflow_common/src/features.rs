//! Feature flag handling for the Shipflow application.
//!
//! Integrations are toggled at runtime through configuration: a `use_*`
//! flag plus the matching configuration section. A feature counts as
//! enabled only when both are present, so a half-configured integration
//! stays off instead of failing at first use.

use shipflow_config::AppConfig;
use std::sync::Arc;

/// Check if a feature is enabled at runtime based on configuration.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `use_feature` - The configuration flag that enables the feature
/// * `feature_config` - The configuration section for the feature
pub fn is_feature_enabled<T>(
    _config: &Arc<AppConfig>,
    use_feature: bool,
    feature_config: Option<&T>,
) -> bool {
    use_feature && feature_config.is_some()
}

/// Check if the BatsCRM integration is enabled at runtime.
pub fn is_batscrm_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_batscrm, config.batscrm.as_ref())
}

/// Check if the Dialpad integration is enabled at runtime.
pub fn is_dialpad_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_dialpad, config.dialpad.as_ref())
}

/// Check if the Slack integration is enabled at runtime.
pub fn is_slack_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_slack, config.slack.as_ref())
}

/// Check if the Sim Studio integration is enabled at runtime.
pub fn is_simstudio_enabled(config: &Arc<AppConfig>) -> bool {
    is_feature_enabled(config, config.use_simstudio, config.simstudio.as_ref())
}
