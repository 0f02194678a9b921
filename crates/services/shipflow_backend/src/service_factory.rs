// --- File: crates/services/shipflow_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! This module provides an implementation of the ServiceFactory trait for
//! the backend service. Each provider service is built once at startup from
//! its configuration section; a service is only available when its runtime
//! flag and configuration are both present.

use shipflow_config::AppConfig;
use std::sync::Arc;
use tracing::info;

use shipflow_common::services::{
    BoxedError, CrmService, NotificationService, ServiceFactory, TelephonyService,
    WorkflowEngineService,
};
use shipflow_common::{
    is_batscrm_enabled, is_dialpad_enabled, is_simstudio_enabled, is_slack_enabled,
};

use shipflow_batscrm::BatsCrmService;
use shipflow_dialpad::DialpadTelephonyService;
use shipflow_simstudio::SimStudioEngineService;
use shipflow_slack::SlackNotificationService;

/// Service factory implementation.
///
/// Initializes the concrete provider services based on the application
/// configuration and exposes them through the `ServiceFactory` trait.
pub struct ShipflowServiceFactory {
    crm_service: Option<Arc<dyn CrmService<Error = BoxedError>>>,
    telephony_service: Option<Arc<dyn TelephonyService<Error = BoxedError>>>,
    notification_service: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
    workflow_engine: Option<Arc<dyn WorkflowEngineService<Error = BoxedError>>>,
}

impl ShipflowServiceFactory {
    /// Create a new service factory.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let crm_service: Option<Arc<dyn CrmService<Error = BoxedError>>> =
            if is_batscrm_enabled(&config) {
                info!("Initializing BatsCRM service...");
                let section = config.batscrm.clone().unwrap();
                Some(Arc::new(BatsCrmService::new(section)))
            } else {
                None
            };

        let telephony_service: Option<Arc<dyn TelephonyService<Error = BoxedError>>> =
            if is_dialpad_enabled(&config) {
                info!("Initializing Dialpad service...");
                let section = config.dialpad.clone().unwrap();
                Some(Arc::new(DialpadTelephonyService::new(section)))
            } else {
                None
            };

        let notification_service: Option<Arc<dyn NotificationService<Error = BoxedError>>> =
            if is_slack_enabled(&config) {
                info!("Initializing Slack service...");
                let section = config.slack.clone().unwrap();
                Some(Arc::new(SlackNotificationService::new(section)))
            } else {
                None
            };

        let workflow_engine: Option<Arc<dyn WorkflowEngineService<Error = BoxedError>>> =
            if is_simstudio_enabled(&config) {
                info!("Initializing Sim Studio service...");
                let section = config.simstudio.clone().unwrap();
                Some(Arc::new(SimStudioEngineService::new(section)))
            } else {
                None
            };

        Self {
            crm_service,
            telephony_service,
            notification_service,
            workflow_engine,
        }
    }
}

impl ServiceFactory for ShipflowServiceFactory {
    fn crm_service(&self) -> Option<Arc<dyn CrmService<Error = BoxedError>>> {
        self.crm_service.clone()
    }

    fn telephony_service(&self) -> Option<Arc<dyn TelephonyService<Error = BoxedError>>> {
        self.telephony_service.clone()
    }

    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>> {
        self.notification_service.clone()
    }

    fn workflow_engine(&self) -> Option<Arc<dyn WorkflowEngineService<Error = BoxedError>>> {
        self.workflow_engine.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shipflow_config::{AppConfig, ServerConfig};

    fn base_config() -> AppConfig {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            use_batscrm: false,
            use_dialpad: false,
            use_slack: false,
            use_simstudio: false,
            batscrm: None,
            dialpad: None,
            slack: None,
            simstudio: None,
            dispatch: None,
        }
    }

    #[test]
    fn disabled_integrations_yield_no_services() {
        let factory = ShipflowServiceFactory::new(Arc::new(base_config()));
        assert!(factory.crm_service().is_none());
        assert!(factory.telephony_service().is_none());
        assert!(factory.notification_service().is_none());
        assert!(factory.workflow_engine().is_none());
    }

    #[test]
    fn flag_without_config_section_stays_disabled() {
        let mut config = base_config();
        config.use_batscrm = true; // no batscrm section present
        let factory = ShipflowServiceFactory::new(Arc::new(config));
        assert!(factory.crm_service().is_none());
    }
}
