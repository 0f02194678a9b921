// --- File: crates/shipflow_dispatch/src/lib.rs ---

// Declare modules within this crate
pub mod actions; // The open action vocabulary
pub mod bridge; // Event submission to the workflow engine
pub mod dispatcher; // Action-to-provider routing
pub mod doc; // OpenAPI documentation
pub mod events; // Inbound event records
pub mod handlers; // HTTP request handlers
pub mod routes; // Route definitions

// Re-export the pieces the integration crates work with
pub use actions::{Action, KnownAction, UnrecognizedAction};
pub use bridge::{BridgeError, WorkflowBridge};
pub use dispatcher::{ActionDispatcher, DispatchError, DispatchFailure, DispatchSummary};
pub use events::EventRecord;
pub use routes::routes;
