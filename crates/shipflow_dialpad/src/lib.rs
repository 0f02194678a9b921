// --- File: crates/shipflow_dialpad/src/lib.rs ---

pub mod doc;
pub mod handlers;
pub mod logic;
pub mod routes;
/// This module provides the Dialpad implementation of the telephony service trait.
pub mod service;

pub use logic::DialpadError;
pub use routes::routes;
pub use service::DialpadTelephonyService;
