// File: services/shipflow_backend/src/main.rs
use axum::{routing::get, Router};
use shipflow_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use shipflow_batscrm::routes as batscrm_routes;
use shipflow_common::logging;
use shipflow_common::services::ServiceFactory;
use shipflow_dialpad::routes as dialpad_routes;
use shipflow_dispatch::routes as shipping_routes;
use shipflow_dispatch::{ActionDispatcher, WorkflowBridge};

mod service_factory;
use service_factory::ShipflowServiceFactory;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    logging::init();

    let factory = ShipflowServiceFactory::new(config.clone());

    // The relay cannot run without its four collaborators; fail loudly at
    // startup rather than on the first webhook.
    let crm = factory
        .crm_service()
        .expect("BatsCRM integration must be enabled and configured");
    let telephony = factory
        .telephony_service()
        .expect("Dialpad integration must be enabled and configured");
    let notifier = factory
        .notification_service()
        .expect("Slack integration must be enabled and configured");
    let engine = factory
        .workflow_engine()
        .expect("Sim Studio integration must be enabled and configured");
    let workflow_id = config
        .simstudio
        .as_ref()
        .map(|s| s.workflow_id.clone())
        .expect("Sim Studio workflow_id must be configured");

    let dispatcher = ActionDispatcher::new(
        crm.clone(),
        telephony,
        notifier,
        config.failure_policy(),
    );
    let bridge = Arc::new(WorkflowBridge::new(engine, dispatcher, workflow_id));

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Shipflow API!" }))
        .merge(batscrm_routes(config.clone(), crm.clone(), bridge.clone()))
        .merge(dialpad_routes(config.clone(), bridge.clone()))
        .merge(shipping_routes(config.clone(), crm, bridge));

    #[allow(unused_mut)] // mutable only when the openapi feature merges the docs router
    let mut app = Router::new()
        .nest("/api", api_router)
        .layer(TraceLayer::new_for_http());

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use shipflow_batscrm::doc::BatsCrmApiDoc;
        use shipflow_dialpad::doc::DialpadApiDoc;
        use shipflow_dispatch::doc::DispatchApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Shipflow API",
                version = "0.1.0",
                description = "Shipflow Service API Docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Shipflow", description = "Shipping coordination endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BatsCrmApiDoc::openapi());
        openapi_doc.merge(DialpadApiDoc::openapi());
        openapi_doc.merge(DispatchApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    println!("Starting Shipflow at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
