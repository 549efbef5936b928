// File: services/agendify_backend/src/main.rs
use agendify_booking::{require_admin_session, routes as booking_routes};
use agendify_common::log_result;
use agendify_config::load_config;
use axum::{middleware, routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    agendify_common::logging::init();

    let config = match log_result(load_config(), "Configuration loaded", "Failed to load config") {
        Ok(config) => Arc::new(config),
        Err(_) => std::process::exit(1),
    };

    let booking_router = match booking_routes(config.clone()) {
        Ok(router) => router,
        Err(e) => {
            error!("Failed to set up booking API client: {}", e);
            std::process::exit(1);
        }
    };

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to Agendify API!" }))
        .merge(booking_router);

    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use agendify_booking::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Agendify API",
                version = "0.1.0",
                description = "Appointment booking and availability API",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Agendify", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        let swagger_ui = SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc);
        app = app.merge(swagger_ui);
    }

    // Serve the built UI in dev mode; admin pages need a live session
    if cfg!(debug_assertions) {
        if let Some(static_dir) = config.static_dir.as_deref() {
            info!("Running in development mode, serving static files from {}", static_dir);

            let admin_router = Router::new()
                .nest_service("/admin", ServeDir::new(Path::new(static_dir).join("admin")))
                .layer(middleware::from_fn_with_state(
                    config.clone(),
                    require_admin_session,
                ));
            app = app
                .merge(admin_router)
                .fallback_service(ServeDir::new(static_dir));
        }
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        error!("Server error: {}", e);
    }
}
