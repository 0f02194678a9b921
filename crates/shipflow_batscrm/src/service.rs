// --- File: crates/shipflow_batscrm/src/service.rs ---

use shipflow_config::BatsCrmConfig;
use shipflow_common::services::{
    BoxFuture, BoxedError, CrmService, Customer, Order, ProviderReceipt, ShipmentData,
};

use crate::logic;

/// BatsCRM implementation of the CRM service trait.
pub struct BatsCrmService {
    config: BatsCrmConfig,
}

impl BatsCrmService {
    /// Create a new BatsCRM service from its configuration section.
    pub fn new(config: BatsCrmConfig) -> Self {
        Self { config }
    }
}

impl CrmService for BatsCrmService {
    type Error = BoxedError;

    fn get_customer(&self, customer_id: &str) -> BoxFuture<'_, Customer, Self::Error> {
        let customer_id = customer_id.to_string();
        Box::pin(async move {
            logic::get_customer(&self.config, &customer_id)
                .await
                .map_err(BoxedError::new)
        })
    }

    fn get_order(&self, order_id: &str) -> BoxFuture<'_, Order, Self::Error> {
        let order_id = order_id.to_string();
        Box::pin(async move {
            logic::get_order(&self.config, &order_id)
                .await
                .map_err(BoxedError::new)
        })
    }

    fn update_order_status(
        &self,
        order_id: &str,
        status: &str,
        notes: Option<&str>,
    ) -> BoxFuture<'_, ProviderReceipt, Self::Error> {
        let order_id = order_id.to_string();
        let status = status.to_string();
        let notes = notes.map(|n| n.to_string());
        Box::pin(async move {
            logic::update_order_status(&self.config, &order_id, &status, notes.as_deref())
                .await
                .map_err(BoxedError::new)
        })
    }

    fn create_shipping_record(
        &self,
        order_id: &str,
        shipment: ShipmentData,
    ) -> BoxFuture<'_, ProviderReceipt, Self::Error> {
        let order_id = order_id.to_string();
        Box::pin(async move {
            logic::create_shipping_record(&self.config, &order_id, &shipment)
                .await
                .map_err(BoxedError::new)
        })
    }
}
